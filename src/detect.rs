//! Quill container detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Quill container format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuillFormat {
    /// Declared file header length (normally 20)
    pub header_len: u16,
}

impl std::fmt::Display for QuillFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Quill document (header {} bytes)", self.header_len)
    }
}

/// Container signature: bytes 2..10 of the file header.
const QUILL_MAGIC: &[u8] = b"vrm1qdf0";
const MAGIC_OFFSET: usize = 2;
const MAGIC_END: usize = MAGIC_OFFSET + 8;

/// Detect the Quill format from a file path.
///
/// # Returns
/// * `Ok(QuillFormat)` if the file carries the Quill signature
/// * `Err(Error::UnknownFormat)` otherwise
///
/// # Example
/// ```no_run
/// use quillview::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("letter_doc").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<QuillFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 10];
    reader.read_exact(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the Quill format from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 10 bytes of the file
pub fn detect_format_from_bytes(data: &[u8]) -> Result<QuillFormat> {
    if data.len() < MAGIC_END {
        return Err(Error::UnknownFormat);
    }

    if &data[MAGIC_OFFSET..MAGIC_END] != QUILL_MAGIC {
        return Err(Error::UnknownFormat);
    }

    let header_len = u16::from_be_bytes([data[0], data[1]]);

    Ok(QuillFormat { header_len })
}

/// Check if a file is a Quill document.
pub fn is_quill<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with a valid Quill header.
pub fn is_quill_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
