//! Append-only dictionary text.

use lzgamma_core::{CodecError, Result};
use std::ops::Range;

/// The concatenation of every substring flushed so far in one call.
///
/// Back-references address it by 1-based start position and length. It
/// only ever grows, and a fresh one is created for every call.
#[derive(Debug, Clone, Default)]
pub struct DictionaryText {
    text: Vec<u8>,
}

impl DictionaryText {
    /// Create an empty dictionary text.
    pub fn new() -> Self {
        Self { text: Vec::new() }
    }

    /// Current length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether nothing has been flushed yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The dictionary contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Consume the dictionary and return its contents.
    pub fn into_bytes(self) -> Vec<u8> {
        self.text
    }

    /// Append a flushed substring.
    pub fn append(&mut self, bytes: &[u8]) {
        self.text.extend_from_slice(bytes);
    }

    /// Append a single flushed byte.
    pub fn push(&mut self, byte: u8) {
        self.text.push(byte);
    }

    /// 0-based start of the first occurrence of `needle` at or after `from`.
    pub fn find_from(&self, needle: &[u8], from: usize) -> Option<usize> {
        if needle.is_empty() {
            return Some(from.min(self.text.len()));
        }
        let haystack = self.text.get(from..)?;
        if needle.len() > haystack.len() {
            return None;
        }
        let first = needle[0];
        haystack
            .windows(needle.len())
            .position(|window| window[0] == first && window == needle)
            .map(|index| index + from)
    }

    /// Re-append the referenced substring and return where the copy landed.
    ///
    /// `position` is 1-based; the reference must lie entirely within the
    /// text as it was before the copy.
    pub fn copy_reference(&mut self, position: u64, length: u64) -> Result<Range<usize>> {
        let len = self.text.len();
        let in_bounds = position >= 1
            && length >= 1
            && position
                .checked_add(length - 1)
                .is_some_and(|last| last <= len as u64);
        if !in_bounds {
            return Err(CodecError::invalid_back_reference(position, length, len));
        }

        let start = (position - 1) as usize;
        self.text.extend_from_within(start..start + length as usize);
        Ok(len..self.text.len())
    }
}
