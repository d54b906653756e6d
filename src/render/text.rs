//! Annotated plain-text output.

use crate::charset::CharsetTable;
use crate::error::Result;
use crate::layout::Composer;
use crate::model::codes::{BOLD, FORM_FEED, SUB_SCRIPT, SUPER_SCRIPT, UNDERLINE};
use crate::model::Document;

use super::{OutputSink, RenderOptions, RenderState};

/// Horizontal rule above the attribution trailer.
const TRAILER_RULE: &str =
    "____________________________________________________________________";

/// Renders composed lines as plain UTF-8 text.
///
/// Formatting toggles carry no textual representation and are dropped;
/// every other byte goes through the QL character set table. The output
/// opens with a byte order mark so editors pick up the encoding.
pub struct TextSink {
    charset: CharsetTable,
}

impl TextSink {
    pub fn new() -> Self {
        Self {
            charset: CharsetTable::ql_to_utf8(),
        }
    }
}

impl Default for TextSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for TextSink {
    fn begin_document(&self, out: &mut String) {
        out.push('\u{feff}');
    }

    fn margin(&self, out: &mut String, count: i32, _state: &mut RenderState) {
        for _ in 0..count.max(0) {
            out.push(' ');
        }
    }

    fn line(&self, out: &mut String, bytes: &[u8], _state: &mut RenderState) {
        for &b in bytes {
            match b {
                BOLD | UNDERLINE | SUB_SCRIPT | SUPER_SCRIPT | FORM_FEED => {}
                _ => out.push_str(self.charset.lookup(b)),
            }
        }
        out.push('\n');
    }

    fn end_document(&self, out: &mut String, source: &str, _state: &mut RenderState) {
        out.push_str("\n\n");
        out.push_str(TRAILER_RULE);
        out.push('\n');
        out.push_str(&format!("File: {source}\n"));
        out.push_str(&format!(
            "Translated by quillview {}\n",
            env!("CARGO_PKG_VERSION")
        ));
    }
}

/// Render a parsed document to annotated plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    Ok(Composer::new(doc, TextSink::new(), options).render())
}
