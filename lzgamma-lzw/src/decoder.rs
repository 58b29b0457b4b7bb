//! LZW decoder (decompression).

use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use tracing::debug;

/// LZW decoder for decompression.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwDecoder;

impl LzwDecoder {
    /// Create a new LZW decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode LZW codes back into text.
    ///
    /// The decoder rebuilds the dictionary one entry behind the encoder, so
    /// a code equal to the next assignable code refers to the entry being
    /// built: the previous string plus its own first character. Any code
    /// beyond that is an error.
    pub fn decode(&self, codes: &[u16]) -> Result<String> {
        let mut dict = LzwDictionary::new();
        let mut output = String::new();

        // Previous string (for dictionary building)
        let mut prev: Option<String> = None;

        for (index, &code) in codes.iter().enumerate() {
            let entry = match (dict.get(code), &prev) {
                (Some(known), _) => known.to_string(),
                (None, Some(prev)) if u32::from(code) == dict.next_code() => {
                    let mut entry = prev.clone();
                    entry.extend(prev.chars().next());
                    entry
                }
                _ => {
                    return Err(LzwError::BadCompressedCode {
                        code,
                        index,
                        next_code: dict.next_code(),
                    });
                }
            };

            output.push_str(&entry);

            if let Some(mut new_entry) = prev.take() {
                new_entry.extend(entry.chars().next());
                dict.add(new_entry);
            }

            prev = Some(entry);
        }

        debug!(
            codes = codes.len(),
            output_len = output.len(),
            dictionary_size = dict.next_code(),
            "lzw decompressed"
        );
        Ok(output)
    }
}
