//! Compress command implementation.

use crate::utils::{LZG_EXTENSION, compressed_path, saving_percent};
use lzgamma_lz78::{CodecConfig, Encoder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// JSON output for a compression run.
#[derive(Debug, Serialize)]
struct CompressJson {
    input: String,
    output: String,
    original_size: usize,
    compressed_size: usize,
    checksum: u64,
}

pub fn cmd_compress(
    input: &Path,
    output: Option<&PathBuf>,
    chunk_size: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let encoder = Encoder::new(CodecConfig::with_chunk_size(chunk_size))?;
    let compressed = encoder.encode(&data)?;

    let output = output
        .cloned()
        .unwrap_or_else(|| compressed_path(input, LZG_EXTENSION));
    std::fs::write(&output, &compressed.data)?;
    info!(input = %input.display(), output = %output.display(), "wrote compressed stream");

    if json {
        let report = CompressJson {
            input: input.display().to_string(),
            output: output.display().to_string(),
            original_size: data.len(),
            compressed_size: compressed.data.len(),
            checksum: compressed.checksum,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Compressed {} -> {}", input.display(), output.display());
        println!("  Original size: {} bytes", data.len());
        println!("  Compressed size: {} bytes", compressed.data.len());
        println!(
            "  Saving: {:.1}%",
            saving_percent(data.len(), compressed.data.len())
        );
        println!("  Checksum: {}", compressed.checksum);
    }

    Ok(())
}
