//! LZW dictionary (code table) management.

use crate::alphabet::{ALPHABET, MAX_CODE};
use std::collections::HashMap;

/// LZW dictionary for encoding and decoding.
///
/// The dictionary maps codes to strings and, for encoding, strings back to
/// codes. It is seeded with the 93 alphabet symbols and stops growing once
/// the largest code a 16-bit output unit can hold has been assigned.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> string.
    table: Vec<String>,
    /// Reverse lookup: string -> code (for encoding only).
    reverse: HashMap<String, u16>,
    /// Next available code.
    next_code: u32,
}

impl LzwDictionary {
    /// Create a dictionary seeded with the alphabet.
    pub fn new() -> Self {
        let mut dict = Self {
            table: Vec::new(),
            reverse: HashMap::new(),
            next_code: 0,
        };
        for ch in ALPHABET.chars() {
            dict.add(ch.to_string());
        }
        dict
    }

    /// Add a new string, returning its code, or `None` once the table is full.
    pub fn add(&mut self, string: String) -> Option<u16> {
        if self.is_full() {
            return None;
        }

        let code = self.next_code as u16;
        self.table.push(string.clone());
        self.reverse.insert(string, code);
        self.next_code += 1;
        Some(code)
    }

    /// Get the string for a code.
    pub fn get(&self, code: u16) -> Option<&str> {
        self.table.get(code as usize).map(String::as_str)
    }

    /// Find the code for a string (for encoding).
    pub fn find(&self, string: &str) -> Option<u16> {
        self.reverse.get(string).copied()
    }

    /// Check if the dictionary is full.
    pub fn is_full(&self) -> bool {
        self.next_code > MAX_CODE
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }
}

impl Default for LzwDictionary {
    fn default() -> Self {
        Self::new()
    }
}
