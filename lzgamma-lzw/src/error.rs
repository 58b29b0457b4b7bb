//! LZW-specific error types.

use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LzwError {
    /// A code that is neither in the dictionary nor the next one to be
    /// assigned.
    #[error("Bad compressed code {code} at index {index} (next assignable code is {next_code})")]
    BadCompressedCode {
        /// The offending code.
        code: u16,
        /// Index of the code within the compressed input.
        index: usize,
        /// Code the dictionary would assign next.
        next_code: u32,
    },

    /// Input character outside the fixed alphabet.
    #[error("Character {character:?} at offset {offset} is not in the LZW alphabet")]
    UnsupportedCharacter {
        /// The offending character.
        character: char,
        /// Character offset within the input.
        offset: usize,
    },

    /// Serialized codes must come in whole 16-bit units.
    #[error("Compressed byte stream has odd length {0}")]
    OddByteLength(usize),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
