//! Utility functions for the CLI.

use std::path::{Path, PathBuf};

/// Extension given to adaptive dictionary streams.
pub const LZG_EXTENSION: &str = "lzg";

/// Extension given to LZW code streams.
pub const LZW_EXTENSION: &str = "lzw";

/// Output path for a compressed file: the input path plus `extension`.
pub fn compressed_path(input: &Path, extension: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Output path for a decompressed file.
///
/// Strips `extension` when present, otherwise appends `.out`.
pub fn decompressed_path(input: &Path, extension: &str) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == extension) {
        input.with_extension("")
    } else {
        compressed_path(input, "out")
    }
}

/// Space saving of `compressed` relative to `original`, in percent.
pub fn saving_percent(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        (1.0 - compressed as f64 / original as f64) * 100.0
    }
}
