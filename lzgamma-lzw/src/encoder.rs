//! LZW encoder (compression).

use crate::alphabet::code_of;
use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use tracing::debug;

/// LZW encoder for compression.
///
/// Holds no state between calls; each call seeds a fresh dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwEncoder;

impl LzwEncoder {
    /// Create a new LZW encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode text with LZW compression.
    ///
    /// # Algorithm
    ///
    /// 1. Seed the dictionary with the 93 alphabet symbols
    /// 2. Extend the current string while the extension is in the dictionary
    /// 3. On a miss, output the current string's code, add the extension
    ///    as a new entry, and restart from the current character
    /// 4. Output the code of the final string
    ///
    /// Each code occupies one 16-bit output unit.
    pub fn encode(&self, text: &str) -> Result<Vec<u16>> {
        let mut dict = LzwDictionary::new();
        let mut output = Vec::new();

        let mut chars = text.chars().enumerate();
        let Some((_, first)) = chars.next() else {
            return Ok(output);
        };
        let mut current = first.to_string();
        let mut current_code = symbol_code(first, 0)?;

        for (offset, ch) in chars {
            let code = symbol_code(ch, offset)?;

            current.push(ch);
            if let Some(extended) = dict.find(&current) {
                current_code = extended;
                continue;
            }

            output.push(current_code);
            dict.add(current.clone());

            current.clear();
            current.push(ch);
            current_code = code;
        }
        output.push(current_code);

        debug!(
            input_len = text.len(),
            codes = output.len(),
            dictionary_size = dict.next_code(),
            "lzw compressed"
        );
        Ok(output)
    }
}

fn symbol_code(ch: char, offset: usize) -> Result<u16> {
    code_of(ch).ok_or(LzwError::UnsupportedCharacter {
        character: ch,
        offset,
    })
}
