//! Elias-gamma coding of positive integers.
//!
//! A value `n` with a `k`-bit binary representation is written as `k - 1`
//! zero bits followed by those `k` bits. The leading zeros tell the decoder
//! how wide the value is, so no external length field is needed. The total
//! width is `2k - 1` bits and `1` encodes as the single bit `1`.
//!
//! ```text
//! n = 1  ->  1
//! n = 2  ->  010
//! n = 5  ->  00101
//! n = 9  ->  0001001
//! ```

use crate::bitstream::{BitPacker, BitReader, MAX_BITS};
use crate::error::{CodecError, Result};
use crate::numeric::{bit_length, to_binary};

/// Longest zero prefix a decoder accepts: a value of up to `MAX_BITS` bits.
const MAX_PREFIX_ZEROS: u32 = MAX_BITS as u32 - 1;

/// Number of bits the Elias-gamma code of `n` occupies.
///
/// Returns 0 for `n == 0`, which has no code.
pub fn encoded_len(n: u64) -> u32 {
    match bit_length(n) {
        0 => 0,
        k => 2 * k as u32 - 1,
    }
}

/// Write the Elias-gamma code of `n` to `packer`.
pub fn encode(packer: &mut BitPacker, n: u64) -> Result<()> {
    let k = bit_length(n);
    if k == 0 {
        return Err(CodecError::InvalidGammaValue);
    }
    if k > MAX_BITS {
        return Err(CodecError::InvalidBitCount(k));
    }

    for _ in 1..k {
        packer.write_bit(false)?;
    }
    packer.write_bits(n, k)
}

/// Read one Elias-gamma code from `reader`.
///
/// Returns the decoded value and the number of bits consumed (`2k - 1`).
pub fn decode(reader: &mut BitReader<'_>) -> Result<(u64, u32)> {
    let start = reader.bit_position();

    let mut zeros = 0u32;
    while !reader.read_bit()? {
        zeros += 1;
        if zeros > MAX_PREFIX_ZEROS {
            return Err(CodecError::invalid_gamma(start));
        }
    }

    // The leading 1 has been consumed; `zeros` more bits complete the value.
    let rest = reader.read_bits(zeros as u8)?;
    let value = (1u64 << zeros) | rest;

    Ok((value, 2 * zeros + 1))
}

/// Render the Elias-gamma code of `n` as binary digits.
pub fn to_bit_string(n: u64) -> Result<String> {
    let k = bit_length(n);
    if k == 0 {
        return Err(CodecError::InvalidGammaValue);
    }
    let mut bits = "0".repeat(k as usize - 1);
    bits.push_str(&to_binary(n, k));
    Ok(bits)
}
