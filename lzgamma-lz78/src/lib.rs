//! # lzgamma-lz78: Adaptive Dictionary Compression
//!
//! An LZ78-style text compressor that addresses a growing, self-referential
//! dictionary text with variable-width tokens.
//!
//! ## Stream Format
//!
//! The stream is a plain MSB-first sequence of tokens, zero-padded to a byte
//! boundary. There is no header and no stored checksum.
//!
//! - **Literal**: `0` followed by the 8-bit code point
//! - **Back-reference**: `1`, the 1-based dictionary position in
//!   `code_width` bits, then the Elias-gamma code of the match length
//!
//! `code_width` starts at 2 bits and grows by one each time the flushed
//! dictionary length reaches the current capacity threshold (4, 8, 16, ...).
//! Encoder and decoder track it identically, so it is never transmitted.
//!
//! ## Checksum
//!
//! Both directions report the plain sum of the code points they consumed
//! or produced. The sum is order-insensitive and only meant as a weak
//! integrity signal; comparing it is up to the caller.
//!
//! ## Example
//!
//! ```rust
//! use lzgamma_lz78::{compress, decompress};
//!
//! let compressed = compress("AAAAAAAAAA").unwrap();
//! assert_eq!(compressed.checksum, 650);
//!
//! let decompressed = decompress(&compressed.data).unwrap();
//! assert_eq!(decompressed.checksum, compressed.checksum);
//! assert_eq!(decompressed.into_text(), "AAAAAAAAAA");
//! ```
//!
//! ## Input Domain
//!
//! Text input is limited to characters U+0000..=U+00FF; anything wider is
//! rejected with [`CodecError::NonAsciiCharacter`] instead of being
//! truncated. Raw bytes can be compressed directly with [`compress_bytes`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod state;
mod token;

pub use config::CodecConfig;
pub use decoder::{DecodeContext, Decoder, Decompressed};
pub use dictionary::DictionaryText;
pub use encoder::{Compressed, Encoder, MatchFinder};
pub use lzgamma_core::{CodecError, Result};
pub use state::{INITIAL_CAPACITY_THRESHOLD, INITIAL_CODE_WIDTH, WidthState};
pub use token::{Token, TokenRecord};

/// Convert text to its single-byte code points.
///
/// Fails on the first character above U+00FF.
pub fn text_to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(offset, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| CodecError::non_ascii(ch as u32, offset))
        })
        .collect()
}

/// Compress text with the default configuration.
///
/// # Example
///
/// ```rust
/// use lzgamma_lz78::compress;
///
/// let compressed = compress("").unwrap();
/// assert!(compressed.data.is_empty());
/// assert_eq!(compressed.checksum, 0);
/// ```
pub fn compress(text: &str) -> Result<Compressed> {
    compress_with(text, &CodecConfig::DEFAULT)
}

/// Compress text with the given configuration.
///
/// Characters are converted chunk by chunk as they are encoded; the whole
/// text is never copied.
pub fn compress_with(text: &str, config: &CodecConfig) -> Result<Compressed> {
    Encoder::new(*config)?.encode_text(text)
}

/// Compress raw bytes with the default configuration.
pub fn compress_bytes(data: &[u8]) -> Result<Compressed> {
    Encoder::new(CodecConfig::DEFAULT)?.encode(data)
}

/// Decompress a stream produced by [`compress`] or [`compress_bytes`].
///
/// # Example
///
/// ```rust
/// use lzgamma_lz78::{compress_bytes, decompress};
///
/// let data = b"to be or not to be";
/// let compressed = compress_bytes(data).unwrap();
/// let decompressed = decompress(&compressed.data).unwrap();
/// assert_eq!(decompressed.data, data);
/// ```
pub fn decompress(data: &[u8]) -> Result<Decompressed> {
    decompress_with(data, &CodecConfig::DEFAULT)
}

/// Decompress with the given configuration.
pub fn decompress_with(data: &[u8], config: &CodecConfig) -> Result<Decompressed> {
    Decoder::new(*config)?.decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = "Grüße, señor! ¿Qué tal?";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed.data).unwrap();
        assert_eq!(decompressed.checksum, compressed.checksum);
        assert_eq!(decompressed.into_text(), original);
    }

    #[test]
    fn test_wide_character_rejected() {
        let err = compress("abc€").unwrap_err();
        assert_eq!(err, CodecError::non_ascii(0x20AC, 3));
    }

    #[test]
    fn test_compress_text_equals_bytes() {
        let original = "Grüße aus Köln, Grüße aus Bonn";
        let bytes = text_to_bytes(original).unwrap();
        let config = CodecConfig::with_chunk_size(2);
        assert_eq!(
            compress_with(original, &config).unwrap(),
            compress_bytes(&bytes).unwrap()
        );
    }

    #[test]
    fn test_text_to_bytes_latin1() {
        assert_eq!(text_to_bytes("\u{0}ÿA").unwrap(), vec![0, 0xFF, b'A']);
    }

    #[test]
    fn test_zero_chunk_rejected() {
        let config = CodecConfig::with_chunk_size(0);
        assert!(compress_with("abc", &config).is_err());
        assert!(decompress_with(&[], &config).is_err());
    }
}
