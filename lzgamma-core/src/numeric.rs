//! Binary ⇄ decimal conversion helpers.
//!
//! The codec itself works on integers and packed bits; these helpers render
//! and parse the textual binary-digit form used for token inspection and for
//! feeding hand-written bit strings into a [`BitPacker`](crate::BitPacker).

use crate::error::{CodecError, Result};

/// Number of significant bits in `value` (no leading zeros).
///
/// Zero has a bit length of 0.
#[inline]
pub fn bit_length(value: u64) -> u8 {
    (u64::BITS - value.leading_zeros()) as u8
}

/// Render the low `width` bits of `value` as binary digits, MSB first.
///
/// # Example
///
/// ```
/// use lzgamma_core::numeric::to_binary;
///
/// assert_eq!(to_binary(5, 4), "0101");
/// assert_eq!(to_binary(65, 8), "01000001");
/// ```
pub fn to_binary(value: u64, width: u8) -> String {
    (0..width)
        .rev()
        .map(|shift| {
            if shift < 64 && (value >> shift) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

/// Parse a string of binary digits (MSB first) into an integer.
///
/// An empty string parses as 0. At most 64 digits are accepted.
pub fn from_binary(digits: &str) -> Result<u64> {
    let mut value = 0u64;
    for (index, digit) in digits.chars().enumerate() {
        if index >= 64 {
            return Err(CodecError::InvalidBitCount(index.min(u8::MAX as usize) as u8));
        }
        let bit = match digit {
            '0' => 0,
            '1' => 1,
            _ => return Err(CodecError::InvalidBinaryDigit { digit, index }),
        };
        value = (value << 1) | bit;
    }
    Ok(value)
}
