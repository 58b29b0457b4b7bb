//! Adaptive dictionary decoder (decompression).
//!
//! All cursor state (bit reader window, dictionary text, width state,
//! checksum) lives in a [`DecodeContext`] created for each call, so a
//! single [`Decoder`] can be shared freely between threads and calls.

use crate::config::CodecConfig;
use crate::dictionary::DictionaryText;
use crate::state::WidthState;
use crate::token::{Token, TokenRecord};
use lzgamma_core::{BitReader, Checksum, Result, gamma};
use tracing::debug;

/// Result of a decompression call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decompressed {
    /// Reconstructed bytes.
    pub data: Vec<u8>,
    /// Sum of every reconstructed code point.
    pub checksum: u64,
}

impl Decompressed {
    /// The reconstructed bytes as text, one character per byte.
    pub fn text(&self) -> String {
        self.data.iter().map(|&b| b as char).collect()
    }

    /// Consume the result and return it as text.
    pub fn into_text(self) -> String {
        self.text()
    }
}

/// Per-call decoding state.
#[derive(Debug)]
pub struct DecodeContext<'a> {
    reader: BitReader<'a>,
    dictionary: DictionaryText,
    widths: WidthState,
    checksum: Checksum,
}

impl<'a> DecodeContext<'a> {
    /// Start decoding `data`.
    pub fn new(data: &'a [u8], config: &CodecConfig) -> Result<Self> {
        Ok(Self {
            reader: BitReader::with_chunk_size(data, config.chunk_size)?,
            dictionary: DictionaryText::new(),
            widths: WidthState::new(),
            checksum: Checksum::new(),
        })
    }

    /// Read the next token, or `None` once only padding remains.
    pub fn read_token(&mut self) -> Result<Option<TokenRecord>> {
        if self.reader.at_padding() {
            return Ok(None);
        }

        let code_width = self.widths.code_width();
        let token = if self.reader.read_bit()? {
            let position = self.reader.read_bits(code_width)?;
            let (length, _) = gamma::decode(&mut self.reader)?;
            Token::BackReference { position, length }
        } else {
            Token::Literal(self.reader.read_bits(8)? as u8)
        };

        Ok(Some(TokenRecord { token, code_width }))
    }

    /// Expand a token into the dictionary text.
    pub fn apply(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Literal(byte) => {
                self.dictionary.push(byte);
                self.checksum.update_byte(byte);
                self.widths.record_flush(1);
            }
            Token::BackReference { position, length } => {
                let range = self.dictionary.copy_reference(position, length)?;
                self.checksum.update(&self.dictionary.as_bytes()[range]);
                self.widths.record_flush(length as usize);
            }
        }
        Ok(())
    }

    /// Read and apply the next token.
    pub fn step(&mut self) -> Result<Option<TokenRecord>> {
        let record = self.read_token()?;
        if let Some(record) = record {
            self.apply(record.token)?;
        }
        Ok(record)
    }

    /// Bytes reconstructed so far.
    pub fn output(&self) -> &[u8] {
        self.dictionary.as_bytes()
    }

    /// Finish the call.
    pub fn into_decompressed(self) -> Decompressed {
        Decompressed {
            checksum: self.checksum.value(),
            data: self.dictionary.into_bytes(),
        }
    }
}

/// Adaptive dictionary decoder.
#[derive(Debug, Clone)]
pub struct Decoder {
    config: CodecConfig,
}

impl Decoder {
    /// Create a new decoder with the given configuration.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Decompress `data`.
    ///
    /// Decoding stops once the source is exhausted and only the encoder's
    /// zero padding is left.
    pub fn decode(&self, data: &[u8]) -> Result<Decompressed> {
        let mut context = DecodeContext::new(data, &self.config)?;
        let mut tokens = 0usize;
        while context.step()?.is_some() {
            tokens += 1;
        }

        let decompressed = context.into_decompressed();
        debug!(
            input_len = data.len(),
            output_len = decompressed.data.len(),
            tokens,
            checksum = decompressed.checksum,
            "decompressed"
        );
        Ok(decompressed)
    }

    /// Decode `data` and return its token sequence.
    pub fn tokens(&self, data: &[u8]) -> Result<Vec<TokenRecord>> {
        let mut context = DecodeContext::new(data, &self.config)?;
        let mut records = Vec::new();
        while let Some(record) = context.step()? {
            records.push(record);
        }
        Ok(records)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            config: CodecConfig::DEFAULT,
        }
    }
}
