//! Error types for the quillview library.

use std::io;
use thiserror::Error;

/// Result type alias for quillview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding or rendering a Quill document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not carry the Quill container signature.
    #[error("Unknown file format: not a valid Quill document")]
    UnknownFormat,

    /// A declared table or buffer extends past the end of the file,
    /// or a table header is inconsistent with its contents.
    #[error("Corrupted Quill container: {0}")]
    Corrupted(String),

    /// Error during rendering (text, HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
