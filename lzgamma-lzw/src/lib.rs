//! # lzgamma-lzw: Fixed-Alphabet LZW
//!
//! A deliberately simple LZW codec over a fixed 93-symbol printable
//! alphabet. It shares nothing with the adaptive dictionary codec.
//!
//! ## Format
//!
//! - The dictionary is seeded with the [`ALPHABET`] symbols as codes 0..=92
//! - Codes are not bit-packed: each code occupies one 16-bit unit
//! - The dictionary stops growing once code 65535 is assigned
//!
//! ## Example
//!
//! ```rust
//! use lzgamma_lzw::{compress, decompress};
//!
//! let original = "TOBEORNOTTOBEORTOBEORNOT";
//! let codes = compress(original).unwrap();
//! assert!(codes.len() < original.len());
//! assert_eq!(decompress(&codes).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod alphabet;
mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use alphabet::{ALPHABET, ALPHABET_SIZE, MAX_CODE, code_of, is_supported};
pub use decoder::LzwDecoder;
pub use dictionary::LzwDictionary;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};

/// Compress text drawn from the fixed alphabet.
///
/// # Example
///
/// ```rust
/// use lzgamma_lzw::compress;
///
/// assert_eq!(compress("abababa").unwrap(), vec![0, 1, 93, 95]);
/// assert!(compress("tab\t").is_err());
/// ```
pub fn compress(text: &str) -> Result<Vec<u16>> {
    LzwEncoder::new().encode(text)
}

/// Decompress codes produced by [`compress`].
pub fn decompress(codes: &[u16]) -> Result<String> {
    LzwDecoder::new().decode(codes)
}

/// Serialize codes as big-endian 16-bit units.
pub fn codes_to_bytes(codes: &[u16]) -> Vec<u8> {
    codes.iter().flat_map(|code| code.to_be_bytes()).collect()
}

/// Parse big-endian 16-bit units back into codes.
pub fn bytes_to_codes(bytes: &[u8]) -> Result<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        return Err(LzwError::OddByteLength(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect())
}
