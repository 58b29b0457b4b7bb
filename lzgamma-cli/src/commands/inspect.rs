//! Inspect command implementation.

use lzgamma_lz78::{MatchFinder, Token, TokenRecord};
use serde::Serialize;
use std::path::Path;

/// JSON serializable token data.
#[derive(Debug, Serialize)]
struct TokenJson {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    byte: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<u64>,
    length: u64,
    code_width: u8,
    bits: String,
}

impl TokenJson {
    fn from_record(record: &TokenRecord) -> lzgamma_lz78::Result<Self> {
        let bits = record.to_bit_string()?;
        Ok(match record.token {
            Token::Literal(byte) => Self {
                kind: "literal",
                byte: Some(byte),
                position: None,
                length: 1,
                code_width: record.code_width,
                bits,
            },
            Token::BackReference { position, length } => Self {
                kind: "back_reference",
                byte: None,
                position: Some(position),
                length,
                code_width: record.code_width,
                bits,
            },
        })
    }
}

pub fn cmd_inspect(
    input: &Path,
    limit: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let records = MatchFinder::tokenize(&data);
    let shown = limit.unwrap_or(records.len()).min(records.len());

    if json {
        let tokens = records[..shown]
            .iter()
            .map(TokenJson::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    let total_bits: u64 = records.iter().map(|r| r.bit_len() as u64).sum();
    let literals = records.iter().filter(|r| r.token.is_literal()).count();

    println!("Token stream for {}", input.display());
    println!("  Input size: {} bytes", data.len());
    println!(
        "  Tokens: {} ({} literals, {} back-references)",
        records.len(),
        literals,
        records.len() - literals
    );
    println!("  Stream size: {} bits ({} bytes)", total_bits, total_bits.div_ceil(8));
    println!();
    println!("{:>6}  {:>5}  {:<40}  BITS", "#", "WIDTH", "TOKEN");
    for (index, record) in records[..shown].iter().enumerate() {
        println!(
            "{:>6}  {:>5}  {:<40}  {}",
            index,
            record.code_width,
            record.token.to_string(),
            record.to_bit_string()?
        );
    }
    if shown < records.len() {
        println!("  ... {} more", records.len() - shown);
    }

    Ok(())
}
