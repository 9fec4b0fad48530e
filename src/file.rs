// src/file.rs

use std::path::Path;

use crate::error::{Result, decode_document};

/// Read an export from disk as text. Fails on I/O or non-UTF-8 content.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let text = decode_document(&bytes)?;
    logd!("Read {} byte(s) from {}", bytes.len(), path.display());
    Ok(text.to_owned())
}
