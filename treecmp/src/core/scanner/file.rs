// src/core/scanner/file.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Reads a file as text.
///
/// Valid UTF-8 is returned unchanged. Anything else is mapped byte-for-byte
/// onto the first 256 code points, so binary files still compare.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
#[inline]
pub fn read_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(decode(bytes))
}

#[inline]
#[must_use]
pub fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| err.into_bytes().into_iter().map(char::from).collect())
}
