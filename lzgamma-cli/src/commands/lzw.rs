//! LZW compress/decompress command implementations.

use crate::utils::{LZW_EXTENSION, compressed_path, decompressed_path};
use lzgamma_lzw::{bytes_to_codes, codes_to_bytes, compress, decompress};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn cmd_lzw_compress(
    input: &Path,
    output: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input)?;
    let codes = compress(&text)?;

    let output = output
        .cloned()
        .unwrap_or_else(|| compressed_path(input, LZW_EXTENSION));
    std::fs::write(&output, codes_to_bytes(&codes))?;
    info!(codes = codes.len(), output = %output.display(), "wrote lzw codes");

    println!("Compressed {} -> {}", input.display(), output.display());
    println!("  Characters: {}", text.chars().count());
    println!("  Codes: {} ({} bytes)", codes.len(), codes.len() * 2);

    Ok(())
}

pub fn cmd_lzw_decompress(
    input: &Path,
    output: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let codes = bytes_to_codes(&std::fs::read(input)?)?;
    let text = decompress(&codes)?;

    let output = output
        .cloned()
        .unwrap_or_else(|| decompressed_path(input, LZW_EXTENSION));
    std::fs::write(&output, &text)?;

    println!("Decompressed {} -> {}", input.display(), output.display());
    println!("  Characters: {}", text.chars().count());

    Ok(())
}
