//! Adaptive dictionary encoder (compression).

use crate::config::CodecConfig;
use crate::dictionary::DictionaryText;
use crate::state::WidthState;
use crate::token::{Token, TokenRecord};
use lzgamma_core::{BitPacker, Checksum, CodecError, Result};
use tracing::debug;

/// Greedy match finder over the growing dictionary text.
///
/// The current match is extended one byte at a time for as long as the
/// extension still occurs somewhere in the dictionary text; the first byte
/// that breaks the match flushes it as a token and seeds the next match.
#[derive(Debug)]
pub struct MatchFinder {
    dictionary: DictionaryText,
    widths: WidthState,
    /// Bytes of the match being built.
    current: Vec<u8>,
    /// 0-based start of the first occurrence of `current` once it is
    /// longer than one byte.
    location: Option<usize>,
}

impl MatchFinder {
    /// Create a match finder with an empty dictionary.
    pub fn new() -> Self {
        Self {
            dictionary: DictionaryText::new(),
            widths: WidthState::new(),
            current: Vec::new(),
            location: None,
        }
    }

    /// Feed the next input byte, returning a token when a match is flushed.
    pub fn push(&mut self, byte: u8) -> Option<TokenRecord> {
        if self.current.is_empty() {
            self.current.push(byte);
            return None;
        }

        // A longer string cannot occur before its own prefix does.
        let from = self.location.unwrap_or(0);
        self.current.push(byte);
        if let Some(start) = self.dictionary.find_from(&self.current, from) {
            self.location = Some(start);
            return None;
        }

        self.current.pop();
        let record = self.flush();
        self.current.push(byte);
        Some(record)
    }

    /// Flush whatever match remains once the input is exhausted.
    pub fn finish(&mut self) -> Option<TokenRecord> {
        if self.current.is_empty() {
            None
        } else {
            Some(self.flush())
        }
    }

    /// The complete token sequence for `input`.
    ///
    /// Tokens depend only on the input bytes, never on chunking, so this
    /// needs no configuration.
    pub fn tokenize(input: &[u8]) -> Vec<TokenRecord> {
        let mut finder = Self::new();
        let mut records: Vec<TokenRecord> = input.iter().filter_map(|&b| finder.push(b)).collect();
        records.extend(finder.finish());
        records
    }

    /// Current back-reference position width.
    pub fn code_width(&self) -> u8 {
        self.widths.code_width()
    }

    /// Emit the current match and append it to the dictionary text.
    fn flush(&mut self) -> TokenRecord {
        let token = match self.location.take() {
            Some(start) if self.current.len() > 1 => Token::BackReference {
                position: start as u64 + 1,
                length: self.current.len() as u64,
            },
            _ => Token::Literal(self.current[0]),
        };
        let record = TokenRecord {
            token,
            code_width: self.widths.code_width(),
        };

        self.dictionary.append(&self.current);
        self.widths.record_flush(self.current.len());
        self.current.clear();

        record
    }
}

impl Default for MatchFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a compression call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// Packed token stream, zero-padded to a byte boundary.
    pub data: Vec<u8>,
    /// Sum of every input code point.
    pub checksum: u64,
}

/// Adaptive dictionary encoder.
///
/// The encoder only holds configuration; every call builds its own
/// dictionary and width state, so one encoder can serve many calls.
#[derive(Debug, Clone)]
pub struct Encoder {
    config: CodecConfig,
}

impl Encoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compress `input`.
    ///
    /// # Algorithm
    ///
    /// 1. Seed the current match with the first byte
    /// 2. Extend the match while the extension occurs in the dictionary text
    /// 3. On a miss, emit the match (literal or back-reference) and append
    ///    it to the dictionary text, growing the position width as the
    ///    flushed total crosses each doubling threshold
    /// 4. Flush the final match and zero-pad to a byte boundary
    pub fn encode(&self, input: &[u8]) -> Result<Compressed> {
        let mut run = EncodeRun::new(&self.config)?;
        run.feed(input)?;
        run.finish()
    }

    /// Compress text whose characters are all at most U+00FF.
    ///
    /// Characters are converted to bytes one chunk at a time, so the
    /// transient copy never exceeds the configured chunk size. Fails with
    /// [`CodecError::NonAsciiCharacter`] at the first wider character;
    /// nothing is returned for the part already encoded.
    pub fn encode_text(&self, text: &str) -> Result<Compressed> {
        let mut run = EncodeRun::new(&self.config)?;
        let mut chunk = Vec::with_capacity(self.config.chunk_size);

        for (offset, ch) in text.chars().enumerate() {
            let byte = u8::try_from(u32::from(ch))
                .map_err(|_| CodecError::non_ascii(u32::from(ch), offset))?;
            chunk.push(byte);
            if chunk.len() == self.config.chunk_size {
                run.feed(&chunk)?;
                chunk.clear();
            }
        }
        run.feed(&chunk)?;
        run.finish()
    }
}

/// State of one compression call.
struct EncodeRun {
    packer: BitPacker,
    finder: MatchFinder,
    checksum: Checksum,
    input_len: usize,
    tokens: usize,
}

impl EncodeRun {
    fn new(config: &CodecConfig) -> Result<Self> {
        Ok(Self {
            packer: BitPacker::with_chunk_size(config.chunk_size)?,
            finder: MatchFinder::new(),
            checksum: Checksum::new(),
            input_len: 0,
            tokens: 0,
        })
    }

    fn feed(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            self.checksum.update_byte(byte);
            if let Some(record) = self.finder.push(byte) {
                record.write(&mut self.packer)?;
                self.tokens += 1;
            }
        }
        self.input_len += bytes.len();
        Ok(())
    }

    fn finish(mut self) -> Result<Compressed> {
        if let Some(record) = self.finder.finish() {
            record.write(&mut self.packer)?;
            self.tokens += 1;
        }

        let data = self.packer.finish();
        debug!(
            input_len = self.input_len,
            output_len = data.len(),
            tokens = self.tokens,
            code_width = self.finder.code_width(),
            checksum = self.checksum.value(),
            "compressed"
        );

        Ok(Compressed {
            data,
            checksum: self.checksum.value(),
        })
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            config: CodecConfig::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(byte: u8, code_width: u8) -> TokenRecord {
        TokenRecord {
            token: Token::Literal(byte),
            code_width,
        }
    }

    fn reference(position: u64, length: u64, code_width: u8) -> TokenRecord {
        TokenRecord {
            token: Token::BackReference { position, length },
            code_width,
        }
    }

    #[test]
    fn test_ten_a_tokens() {
        let tokens = MatchFinder::tokenize(b"AAAAAAAAAA");
        assert_eq!(
            tokens,
            vec![
                literal(b'A', 2),
                literal(b'A', 2),
                reference(1, 2, 2),
                reference(1, 4, 3),
                reference(1, 2, 4),
            ]
        );
    }

    #[test]
    fn test_ten_a_encoding() {
        let compressed = Encoder::default().encode(b"AAAAAAAAAA").unwrap();
        assert_eq!(compressed.checksum, 650);
        // 9 + 9 + 6 + 9 + 8 = 41 bits
        assert_eq!(compressed.data.len(), 6);
        assert_eq!(compressed.data[0], 0b0010_0000);
    }

    #[test]
    fn test_first_occurrence_wins() {
        // "ab" occurs at 1 and 3 once "abab" is flushed; the match must
        // point at the first one.
        let tokens = MatchFinder::tokenize(b"abababab");
        assert_eq!(tokens[0], literal(b'a', 2));
        assert_eq!(tokens[1], literal(b'b', 2));
        assert_eq!(tokens[2], reference(1, 2, 2));
        assert!(tokens[3..].iter().all(|r| match r.token {
            Token::BackReference { position, .. } => position == 1,
            Token::Literal(_) => true,
        }));
    }

    #[test]
    fn test_empty_input() {
        let encoder = Encoder::default();
        assert!(MatchFinder::tokenize(b"").is_empty());
        let compressed = encoder.encode(b"").unwrap();
        assert!(compressed.data.is_empty());
        assert_eq!(compressed.checksum, 0);
    }

    #[test]
    fn test_single_byte() {
        let tokens = MatchFinder::tokenize(b"z");
        assert_eq!(tokens, vec![literal(b'z', 2)]);
    }

    #[test]
    fn test_tokens_cover_input() {
        let input = b"the rain in spain stays mainly in the plain";
        let total: u64 = MatchFinder::tokenize(input)
            .iter()
            .map(|r| r.token.expanded_len())
            .sum();
        assert_eq!(total, input.len() as u64);
    }

    #[test]
    fn test_chunk_size_does_not_change_output() {
        let input = b"abracadabra ".repeat(200);
        let reference = Encoder::default().encode(&input).unwrap();
        for chunk_size in [1, 7, 64, 5000] {
            let encoder = Encoder::new(CodecConfig::with_chunk_size(chunk_size)).unwrap();
            assert_eq!(encoder.encode(&input).unwrap(), reference);
        }
    }

    #[test]
    fn test_text_matches_bytes_across_chunks() {
        let text = "señor mañana ".repeat(50);
        let bytes: Vec<u8> = text.chars().map(|c| c as u8).collect();
        let reference = Encoder::default().encode(&bytes).unwrap();
        for chunk_size in [1, 3, 13, 4096] {
            let encoder = Encoder::new(CodecConfig::with_chunk_size(chunk_size)).unwrap();
            assert_eq!(encoder.encode_text(&text).unwrap(), reference);
        }
    }

    #[test]
    fn test_wide_character_in_later_chunk() {
        let text = format!("{}\u{3042}tail", "x".repeat(10));
        let encoder = Encoder::new(CodecConfig::with_chunk_size(4)).unwrap();
        assert_eq!(
            encoder.encode_text(&text).unwrap_err(),
            CodecError::non_ascii(0x3042, 10)
        );
    }

    #[test]
    fn test_tokenize_matches_decoded_stream() {
        let input = b"she sells sea shells by the sea shore";
        let expected = MatchFinder::tokenize(input);
        for chunk_size in [1, 5, 1024] {
            let config = CodecConfig::with_chunk_size(chunk_size);
            let compressed = Encoder::new(config).unwrap().encode(input).unwrap();
            let decoded = crate::Decoder::new(config)
                .unwrap()
                .tokens(&compressed.data)
                .unwrap();
            assert_eq!(decoded, expected);
        }
    }

    #[test]
    fn test_invalid_config() {
        assert!(Encoder::new(CodecConfig::with_chunk_size(0)).is_err());
    }
}
