//! # lzgamma Core
//!
//! Core components for the lzgamma codecs.
//!
//! This crate provides the building blocks the adaptive dictionary codec is
//! assembled from:
//!
//! - [`bitstream`]: MSB-first bit packer and chunked bit reader
//! - [`gamma`]: Elias-gamma coding of match lengths
//! - [`numeric`]: binary ⇄ decimal helpers
//! - [`checksum`]: additive code-point checksum
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Tool                                                │
//! │     lzgamma CLI                                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Adaptive dictionary (LZ78 + gamma), fixed LZW       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitPacker/BitReader, Elias-gamma, Checksum          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lzgamma_core::bitstream::{BitPacker, BitReader};
//! use lzgamma_core::gamma;
//!
//! let mut packer = BitPacker::new();
//! packer.write_bit(true).unwrap();
//! gamma::encode(&mut packer, 5).unwrap();
//! let data = packer.finish();
//!
//! let mut reader = BitReader::new(&data);
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(gamma::decode(&mut reader).unwrap(), (5, 5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod checksum;
pub mod error;
pub mod gamma;
pub mod numeric;

// Re-exports for convenience
pub use bitstream::{BitPacker, BitReader, DEFAULT_CHUNK_SIZE, REFILL_THRESHOLD_BITS};
pub use checksum::Checksum;
pub use error::{CodecError, Result};
