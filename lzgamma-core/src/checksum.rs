//! Additive checksum.
//!
//! The codec reports the plain sum of every character code point it
//! consumes (compression) or produces (decompression). The sum is
//! order-insensitive and carries no modulus: any permutation of the same
//! characters yields the same value. It is a weak integrity signal that the
//! caller may compare; the codec itself never rejects on it.

/// Running additive checksum over byte code points.
///
/// # Example
///
/// ```
/// use lzgamma_core::Checksum;
///
/// let mut sum = Checksum::new();
/// sum.update(b"AB");
/// sum.update_byte(b'C');
/// assert_eq!(sum.value(), 65 + 66 + 67);
/// assert_eq!(Checksum::compute(b"CBA"), sum.value());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checksum {
    sum: u64,
}

impl Checksum {
    /// Create a zeroed checksum.
    pub fn new() -> Self {
        Self { sum: 0 }
    }

    /// Add a single code point.
    #[inline]
    pub fn update_byte(&mut self, byte: u8) {
        self.sum += byte as u64;
    }

    /// Add every byte of `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.sum += data.iter().map(|&b| b as u64).sum::<u64>();
    }

    /// Current checksum value.
    pub fn value(&self) -> u64 {
        self.sum
    }

    /// Compute the checksum of `data` in one call.
    pub fn compute(data: &[u8]) -> u64 {
        let mut checksum = Self::new();
        checksum.update(data);
        checksum.value()
    }
}
