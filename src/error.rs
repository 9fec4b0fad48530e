// src/error.rs
//! Errors surfaced to callers.
//!
//! Only documents that cannot be read as text or markup at all end up here.
//! Missing tables, unresolved headers and unparsable cells are recovered
//! inside the extractors and never produce an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Asset manifest is not well-formed XML.
    #[error("malformed XML document: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Input bytes are not UTF-8 text.
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Reading an export from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Validate raw bytes as a UTF-8 document, dropping a leading byte-order mark.
pub fn decode_document(bytes: &[u8]) -> Result<&str> {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    Ok(std::str::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_strips_bom() {
        let raw = b"\xEF\xBB\xBF<html></html>";
        assert_eq!(decode_document(raw).unwrap(), "<html></html>");
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let err = decode_document(&[0x3C, 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, ExtractError::Encoding(_)));
        assert!(err.to_string().contains("UTF-8"));
    }
}
