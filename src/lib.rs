//! # quillview
//!
//! Reader for Sinclair QL Quill word-processor documents.
//!
//! This library decodes Quill's binary container format and renders the
//! text the way Quill would have printed it: fixed-width lines with
//! word-wrap, left/center/full justification, tab expansion, pagination
//! and header/footer page numbering. Output formats are annotated plain
//! text, HTML, and a JSON dump of the parsed structures.
//!
//! ## Quick Start
//!
//! ```no_run
//! use quillview::{parse_file, render};
//!
//! fn main() -> quillview::Result<()> {
//!     // Parse a Quill document
//!     let doc = parse_file("letter_doc")?;
//!
//!     // Render it as plain text
//!     let options = render::RenderOptions::new().with_source_name("letter_doc");
//!     let text = render::to_text(&doc, &options)?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Faithful layout**: word-wrap and justification reproduce Quill's
//!   own line breaks, including its pagination quirks
//! - **QL character set**: every text byte maps to UTF-8, pound sign and
//!   accented ranges included
//! - **Multiple output formats**: annotated text, HTML, JSON

pub mod charset;
pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use charset::CharsetTable;
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_quill, QuillFormat};
pub use error::{Error, Result};
pub use model::{
    Document, HeaderJustify, Justification, LayoutParameters, ParagraphRecord, TabGroup, TabKind,
    TabStop, TabTable,
};
pub use parser::QuillParser;
pub use render::{JsonFormat, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Parse a Quill document file.
///
/// # Example
///
/// ```no_run
/// use quillview::parse_file;
///
/// let doc = parse_file("letter_doc").unwrap();
/// println!("Paragraphs: {}", doc.body_paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = QuillParser::open(path)?;
    parser.parse()
}

/// Parse a Quill document from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = QuillParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a Quill document from a reader.
///
/// # Example
///
/// ```no_run
/// use quillview::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("letter_doc").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = QuillParser::from_reader(reader)?;
    parser.parse()
}

/// Convert a Quill document file to annotated plain text.
///
/// # Example
///
/// ```no_run
/// use quillview::to_text;
///
/// let text = to_text("letter_doc").unwrap();
/// println!("{}", text);
/// ```
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let source = display_name(path.as_ref());
    let doc = parse_file(path)?;
    let options = RenderOptions::new().with_source_name(source);
    render::to_text(&doc, &options)
}

/// Convert a Quill document file to HTML.
///
/// # Example
///
/// ```no_run
/// use quillview::to_html;
///
/// let html = to_html("letter_doc").unwrap();
/// std::fs::write("letter.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let source = display_name(path.as_ref());
    let doc = parse_file(path)?;
    let options = RenderOptions::new().with_source_name(source);
    render::to_html(&doc, &options)
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_rejects_garbage() {
        let result = parse_bytes(b"not a quill document at all");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_reader_rejects_short_input() {
        let data = b"short";
        assert!(parse_reader(&data[..]).is_err());
    }
}
