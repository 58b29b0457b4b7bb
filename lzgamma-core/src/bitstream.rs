//! Bit-level I/O for the adaptive dictionary codec.
//!
//! This module provides [`BitPacker`] and [`BitReader`], which pack and
//! unpack the variable-width token stream of the codec.
//!
//! # Bit Ordering
//!
//! Unlike DEFLATE, the codec stream is MSB-first: the first bit written
//! becomes the most significant bit of the first output byte. The final
//! partial byte is right-padded with zero bits.
//!
//! # Chunking
//!
//! Both sides work in bounded chunks. The packer holds assembled bytes in a
//! pending buffer that is moved to the result once it grows past the chunk
//! size; the reader keeps only a small resident window of the source and
//! refills it a chunk at a time whenever it runs low.
//!
//! # Example
//!
//! ```
//! use lzgamma_core::bitstream::{BitPacker, BitReader};
//!
//! let mut packer = BitPacker::new();
//! packer.write_bits(0b101, 3).unwrap();
//! packer.write_bits(0b1100, 4).unwrap();
//! let data = packer.finish();
//! assert_eq!(data, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! assert!(reader.at_padding());
//! ```

use crate::error::{CodecError, Result};
use crate::numeric::from_binary;

/// Default number of bytes handled per chunk on either side of the codec.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// The reader refills its resident window once this many bits or fewer
/// remain unread.
pub const REFILL_THRESHOLD_BITS: usize = 100;

/// Maximum number of bits accepted by a single read or write.
pub const MAX_BITS: u8 = 57;

/// MSB-first bit packer with chunked output buffering.
#[derive(Debug)]
pub struct BitPacker {
    /// Bytes already handed over to the overall result.
    output: Vec<u8>,
    /// Assembled bytes not yet moved to `output`.
    pending: Vec<u8>,
    /// Pending-buffer size that triggers a move to `output`.
    chunk_size: usize,
    /// Bit buffer (MSB-first, at most 7 bits between writes).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits: u64,
}

impl BitPacker {
    /// Create a new packer with the default chunk size.
    pub fn new() -> Self {
        Self::with_chunk(DEFAULT_CHUNK_SIZE)
    }

    /// Create a new packer that flushes its pending buffer every
    /// `chunk_size` bytes.
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(CodecError::InvalidChunkSize(chunk_size));
        }
        Ok(Self::with_chunk(chunk_size))
    }

    fn with_chunk(chunk_size: usize) -> Self {
        Self {
            output: Vec::new(),
            pending: Vec::with_capacity(chunk_size.saturating_add(1).min(1 << 16)),
            chunk_size,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits: 0,
        }
    }

    /// Write the low `count` bits of `value`, most significant first.
    ///
    /// # Arguments
    ///
    /// * `value` - Bits to write (higher bits are ignored)
    /// * `count` - Number of bits to write (0-57)
    pub fn write_bits(&mut self, value: u64, count: u8) -> Result<()> {
        if count > MAX_BITS {
            return Err(CodecError::InvalidBitCount(count));
        }
        if count == 0 {
            return Ok(());
        }

        let mask = (1u64 << count) - 1;
        self.buffer = (self.buffer << count) | (value & mask);
        self.bits_in_buffer += count;
        self.total_bits += count as u64;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.push_byte(byte);
            self.bits_in_buffer -= 8;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;

        Ok(())
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u64, 1)
    }

    /// Append a string of binary digits (`'0'`/`'1'`), first digit first.
    pub fn append_bit_str(&mut self, digits: &str) -> Result<()> {
        let chars: Vec<char> = digits.chars().collect();
        let mut offset = 0;
        for chunk in chars.chunks(MAX_BITS as usize) {
            let text: String = chunk.iter().collect();
            let value = from_binary(&text).map_err(|err| match err {
                CodecError::InvalidBinaryDigit { digit, index } => {
                    CodecError::InvalidBinaryDigit {
                        digit,
                        index: offset + index,
                    }
                }
                other => other,
            })?;
            self.write_bits(value, chunk.len() as u8)?;
            offset += chunk.len();
        }
        Ok(())
    }

    /// Total bits written so far (excluding final padding).
    pub fn bits_written(&self) -> u64 {
        self.total_bits
    }

    /// Pad the final partial byte with zeros and return all output bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let byte = (self.buffer << (8 - self.bits_in_buffer)) as u8;
            self.push_byte(byte);
            self.bits_in_buffer = 0;
        }
        self.output.append(&mut self.pending);
        self.output
    }

    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.pending.push(byte);
        if self.pending.len() > self.chunk_size {
            self.output.append(&mut self.pending);
        }
    }
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// MSB-first bit reader with a bounded resident window.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Full compressed source.
    source: &'a [u8],
    /// Next source byte to load into the window.
    source_pos: usize,
    /// Resident bytes.
    window: Vec<u8>,
    /// Bit index of the next unread bit within `window`.
    cursor: usize,
    /// Bytes loaded per refill.
    chunk_size: usize,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader with the default chunk size.
    pub fn new(source: &'a [u8]) -> Self {
        Self::with_chunk(source, DEFAULT_CHUNK_SIZE)
    }

    /// Create a reader that loads `chunk_size` source bytes per refill.
    pub fn with_chunk_size(source: &'a [u8], chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(CodecError::InvalidChunkSize(chunk_size));
        }
        Ok(Self::with_chunk(source, chunk_size))
    }

    fn with_chunk(source: &'a [u8], chunk_size: usize) -> Self {
        Self {
            source,
            source_pos: 0,
            window: Vec::new(),
            cursor: 0,
            chunk_size,
            total_bits_read: 0,
        }
    }

    /// Get the current bit position (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.total_bits_read
    }

    /// Whether every source byte has been loaded into the window.
    pub fn is_exhausted(&self) -> bool {
        self.source_pos >= self.source.len()
    }

    /// Number of unread bits currently resident.
    #[inline]
    fn resident_bits(&self) -> usize {
        self.window.len() * 8 - self.cursor
    }

    /// Top the window up while it holds no more than the refill threshold.
    fn refill(&mut self) {
        while self.resident_bits() <= REFILL_THRESHOLD_BITS && !self.is_exhausted() {
            let consumed = self.cursor / 8;
            self.window.drain(..consumed);
            self.cursor -= consumed * 8;

            let end = self
                .source_pos
                .saturating_add(self.chunk_size)
                .min(self.source.len());
            self.window
                .extend_from_slice(&self.source[self.source_pos..end]);
            self.source_pos = end;
        }
    }

    #[inline]
    fn bit_at(&self, index: usize) -> u64 {
        ((self.window[index / 8] >> (7 - index % 8)) & 1) as u64
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Read `count` bits (0-57), first bit in the most significant position.
    pub fn read_bits(&mut self, count: u8) -> Result<u64> {
        if count > MAX_BITS {
            return Err(CodecError::InvalidBitCount(count));
        }

        self.refill();
        if self.resident_bits() < count as usize {
            return Err(CodecError::truncated(self.total_bits_read));
        }

        let mut value = 0u64;
        for _ in 0..count {
            value = (value << 1) | self.bit_at(self.cursor);
            self.cursor += 1;
        }
        self.total_bits_read += count as u64;

        Ok(value)
    }

    /// Whether only the encoder's zero padding remains.
    ///
    /// True once the source is exhausted and at most one byte's worth of
    /// unread bits remains, all of them zero.
    pub fn at_padding(&mut self) -> bool {
        self.refill();
        if !self.is_exhausted() || self.resident_bits() > 8 {
            return false;
        }
        (self.cursor..self.window.len() * 8).all(|index| self.bit_at(index) == 0)
    }
}
