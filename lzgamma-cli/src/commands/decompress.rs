//! Decompress command implementation.

use crate::utils::{LZG_EXTENSION, decompressed_path};
use lzgamma_lz78::{CodecConfig, Decoder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// JSON output for a decompression run.
#[derive(Debug, Serialize)]
struct DecompressJson {
    input: String,
    output: String,
    compressed_size: usize,
    decompressed_size: usize,
    checksum: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum_ok: Option<bool>,
}

pub fn cmd_decompress(
    input: &Path,
    output: Option<&PathBuf>,
    chunk_size: usize,
    expect_checksum: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let decoder = Decoder::new(CodecConfig::with_chunk_size(chunk_size))?;
    let decompressed = decoder.decode(&data)?;

    let checksum_ok = expect_checksum.map(|expected| expected == decompressed.checksum);
    let mismatch = expect_checksum.filter(|&expected| expected != decompressed.checksum);
    if let Some(expected) = mismatch {
        warn!(expected, computed = decompressed.checksum, "checksum mismatch");
    }

    let output = output
        .cloned()
        .unwrap_or_else(|| decompressed_path(input, LZG_EXTENSION));
    std::fs::write(&output, &decompressed.data)?;
    info!(input = %input.display(), output = %output.display(), "wrote decompressed data");

    if json {
        let report = DecompressJson {
            input: input.display().to_string(),
            output: output.display().to_string(),
            compressed_size: data.len(),
            decompressed_size: decompressed.data.len(),
            checksum: decompressed.checksum,
            checksum_ok,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Decompressed {} -> {}", input.display(), output.display());
        println!("  Size: {} bytes", decompressed.data.len());
        println!("  Checksum: {}", decompressed.checksum);
    }

    match mismatch {
        Some(expected) => Err(format!(
            "checksum mismatch: expected {}, computed {}",
            expected, decompressed.checksum
        )
        .into()),
        None => Ok(()),
    }
}
