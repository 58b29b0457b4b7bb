//! Codec configuration.

use lzgamma_core::{CodecError, DEFAULT_CHUNK_SIZE, Result};

/// Configuration parameters for the adaptive dictionary codec.
///
/// The chunk size only bounds transient memory: it caps how many text
/// characters are converted to bytes at a time, how many output bytes are
/// buffered before being appended to the result, and how many compressed
/// bytes the decoder loads per refill. Byte-slice input is already in
/// memory and is walked directly. The emitted bits never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Bytes handled per chunk (must be at least 1).
    pub chunk_size: usize,
}

impl CodecConfig {
    /// Default configuration (1024-byte chunks).
    pub const DEFAULT: Self = Self {
        chunk_size: DEFAULT_CHUNK_SIZE,
    };

    /// Create a configuration with the given chunk size.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(CodecError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
