//! Error types for lzgamma codec operations.
//!
//! Every failure the primary codec can detect is local and deterministic, so
//! each one gets its own variant and is raised at the point of detection
//! rather than producing silently-wrong output.

use thiserror::Error;

/// The main error type for lzgamma codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A back-reference addresses bytes beyond the current dictionary text.
    #[error(
        "Invalid back-reference: position {position} length {length} exceeds dictionary of {dictionary_len} bytes"
    )]
    InvalidBackReference {
        /// 1-based start position of the reference.
        position: u64,
        /// Length of the reference.
        length: u64,
        /// Dictionary length at the time of decoding.
        dictionary_len: usize,
    },

    /// A character cannot be represented by the 8-bit literal field.
    #[error("Character U+{code_point:04X} at offset {offset} is outside the 0-255 range")]
    NonAsciiCharacter {
        /// The offending code point.
        code_point: u32,
        /// Character offset within the input.
        offset: usize,
    },

    /// The bit source ended in the middle of a token.
    #[error("Truncated input at bit position {bit_position}")]
    TruncatedInput {
        /// Bit position where more data was required.
        bit_position: u64,
    },

    /// An Elias-gamma prefix is longer than any encodable length.
    #[error("Invalid Elias-gamma code at bit position {bit_position}")]
    InvalidGammaCode {
        /// Bit position where the code started.
        bit_position: u64,
    },

    /// Elias-gamma coding only covers positive integers.
    #[error("Elias-gamma coding requires a positive integer")]
    InvalidGammaValue,

    /// Bit count outside the supported 0-57 range.
    #[error("Invalid bit count: {0} (must be 0-57)")]
    InvalidBitCount(u8),

    /// A binary digit string contained something other than `0` or `1`.
    #[error("Invalid binary digit {digit:?} at index {index}")]
    InvalidBinaryDigit {
        /// The offending character.
        digit: char,
        /// Index within the digit string.
        index: usize,
    },

    /// Chunk size must be positive.
    #[error("Invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(usize),
}

/// Result type alias for lzgamma codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an invalid back-reference error.
    pub fn invalid_back_reference(position: u64, length: u64, dictionary_len: usize) -> Self {
        Self::InvalidBackReference {
            position,
            length,
            dictionary_len,
        }
    }

    /// Create a non-ASCII (outside 0-255) character error.
    pub fn non_ascii(code_point: u32, offset: usize) -> Self {
        Self::NonAsciiCharacter { code_point, offset }
    }

    /// Create a truncated input error.
    pub fn truncated(bit_position: u64) -> Self {
        Self::TruncatedInput { bit_position }
    }

    /// Create an invalid Elias-gamma code error.
    pub fn invalid_gamma(bit_position: u64) -> Self {
        Self::InvalidGammaCode { bit_position }
    }
}
