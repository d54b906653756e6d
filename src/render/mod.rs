//! Output back ends for composed documents.
//!
//! The layout engine produces lines of raw document bytes with control
//! codes still embedded; an [`OutputSink`] turns those lines into a
//! concrete output format. Two sinks ship with the crate: annotated
//! plain text ([`TextSink`]) and HTML ([`HtmlSink`]), plus a JSON dump
//! of the parsed structures for inspection.

mod html;
mod json;
mod options;
mod text;

pub use html::{to_html, HtmlSink};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::{to_text, TextSink};

/// Mutable state shared between the composer and its sink.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// Current line number on the page
    pub line_no: i32,

    /// Current page number
    pub page_no: i32,

    /// Smallest left margin over the body paragraphs
    pub min_left: i32,

    /// Largest right margin over the body paragraphs
    pub max_right: i32,

    /// Bold toggle is open
    pub bold: bool,

    /// Underline toggle is open
    pub underline: bool,

    /// Subscript toggle is open
    pub subscript: bool,

    /// Superscript toggle is open
    pub superscript: bool,
}

impl RenderState {
    /// Whether any formatting toggle is currently open.
    pub fn any_open(&self) -> bool {
        self.bold || self.underline || self.subscript || self.superscript
    }
}

/// A render target the composer writes lines and margins into.
///
/// The composer drives pagination and justification; the sink only
/// decides how a line of document bytes, a run of margin padding, and
/// the document frame appear in the output.
pub trait OutputSink {
    /// Called once before any content.
    fn begin_document(&self, out: &mut String);

    /// Called at the start of every paragraph.
    fn begin_paragraph(&self, _out: &mut String) {}

    /// Called at the end of every paragraph.
    fn end_paragraph(&self, _out: &mut String) {}

    /// Emit `count` columns of left padding.
    fn margin(&self, out: &mut String, count: i32, state: &mut RenderState);

    /// Emit one line of document bytes followed by a line break.
    fn line(&self, out: &mut String, bytes: &[u8], state: &mut RenderState);

    /// Close any open formatting toggles without changing the state.
    /// Used around page furniture so headers stay unformatted.
    fn close_toggles(&self, _out: &mut String, _state: &mut RenderState) {}

    /// Reopen toggles closed by [`close_toggles`](Self::close_toggles).
    fn reopen_toggles(&self, _out: &mut String, _state: &mut RenderState) {}

    /// Close open toggles and clear the state, at paragraph end.
    fn reset_toggles(&self, _out: &mut String, _state: &mut RenderState) {}

    /// Called once after all content, with the source file name.
    fn end_document(&self, out: &mut String, source: &str, state: &mut RenderState);
}
