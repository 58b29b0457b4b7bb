//! Encoded tokens and their bit layout.
//!
//! ```text
//! Literal:        0 | code point (8 bits)
//! BackReference:  1 | position (code_width bits, 1-based) | gamma(length)
//! ```

use lzgamma_core::numeric::to_binary;
use lzgamma_core::{BitPacker, Result, gamma};
use std::fmt;

/// A single unit of compressed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// One byte written verbatim.
    Literal(u8),
    /// A substring already present in the dictionary text.
    BackReference {
        /// 1-based start position within the dictionary text.
        position: u64,
        /// Number of bytes referenced.
        length: u64,
    },
}

impl Token {
    /// Number of bytes this token expands to.
    pub fn expanded_len(&self) -> u64 {
        match *self {
            Token::Literal(_) => 1,
            Token::BackReference { length, .. } => length,
        }
    }

    /// Whether this is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Literal(byte) => write!(f, "Literal({:?})", byte as char),
            Token::BackReference { position, length } => {
                write!(f, "BackReference(position={}, length={})", position, length)
            }
        }
    }
}

/// A token together with the code width in force when it was coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRecord {
    /// The token.
    pub token: Token,
    /// Position width used for a back-reference at this point.
    pub code_width: u8,
}

impl TokenRecord {
    /// Write the token's bits.
    pub fn write(&self, packer: &mut BitPacker) -> Result<()> {
        match self.token {
            Token::Literal(byte) => {
                packer.write_bit(false)?;
                packer.write_bits(byte as u64, 8)
            }
            Token::BackReference { position, length } => {
                packer.write_bit(true)?;
                packer.write_bits(position, self.code_width)?;
                gamma::encode(packer, length)
            }
        }
    }

    /// Number of bits the token occupies in the stream.
    pub fn bit_len(&self) -> u32 {
        match self.token {
            Token::Literal(_) => 9,
            Token::BackReference { length, .. } => {
                1 + self.code_width as u32 + gamma::encoded_len(length)
            }
        }
    }

    /// Render the token's bits as binary digits.
    pub fn to_bit_string(&self) -> Result<String> {
        match self.token {
            Token::Literal(byte) => Ok(format!("0{}", to_binary(byte as u64, 8))),
            Token::BackReference { position, length } => Ok(format!(
                "1{}{}",
                to_binary(position, self.code_width),
                gamma::to_bit_string(length)?
            )),
        }
    }
}
