//! Code-width state machine shared by encoder and decoder.

use tracing::trace;

/// Width in bits of a back-reference position at the start of a call.
pub const INITIAL_CODE_WIDTH: u8 = 2;

/// Flushed length at which the code width first grows.
pub const INITIAL_CAPACITY_THRESHOLD: u64 = 4;

/// Tracks how many bytes have been flushed to the dictionary text and the
/// position width that follows from it.
///
/// The threshold always equals `2^code_width` and the flushed length stays
/// strictly below it between flushes. A single flush can never cross two
/// thresholds because a match is at most as long as everything flushed
/// before it, so every 1-based position fits in `code_width` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthState {
    code_width: u8,
    capacity_threshold: u64,
    flushed: u64,
}

impl WidthState {
    /// Fresh state for a new call.
    pub fn new() -> Self {
        Self {
            code_width: INITIAL_CODE_WIDTH,
            capacity_threshold: INITIAL_CAPACITY_THRESHOLD,
            flushed: 0,
        }
    }

    /// Current back-reference position width.
    pub fn code_width(&self) -> u8 {
        self.code_width
    }

    /// Flushed length at which the width grows next.
    pub fn capacity_threshold(&self) -> u64 {
        self.capacity_threshold
    }

    /// Bytes flushed so far.
    pub fn flushed(&self) -> u64 {
        self.flushed
    }

    /// Account for `length` newly flushed bytes.
    ///
    /// Returns `true` when the code width grew.
    pub fn record_flush(&mut self, length: usize) -> bool {
        self.flushed += length as u64;
        if self.flushed < self.capacity_threshold {
            return false;
        }

        self.capacity_threshold *= 2;
        self.code_width += 1;
        trace!(
            code_width = self.code_width,
            capacity_threshold = self.capacity_threshold,
            flushed = self.flushed,
            "code width grew"
        );
        true
    }
}

impl Default for WidthState {
    fn default() -> Self {
        Self::new()
    }
}
