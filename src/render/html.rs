//! HTML output.
//!
//! The page is monospace with all paragraph spacing removed, so the
//! fixed-width layout of the composer survives into the browser. Spaces
//! and margin padding render as `&nbsp;` for the same reason.

use crate::charset::CharsetTable;
use crate::error::Result;
use crate::layout::Composer;
use crate::model::codes::{
    BOLD, FORM_FEED, SOFT_HYPHEN, SPACE, SUB_SCRIPT, SUPER_SCRIPT, TAB, UNDERLINE,
};
use crate::model::Document;

use super::{OutputSink, RenderOptions, RenderState};

const HTML_HEAD: &str = "<html><head><title>Quill Document</title>\
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\" /></head>\n\
<body><style type=\"text/css\">\n\
p {font-family:monospace; padding-top:0px; padding-bottom:0px; margin-top:0px; margin-bottom:0px;}\n\
</style>\n";

const HTML_TAIL: &str = "</body></html>";

const TRAILER_RULE: &str =
    "_____________________________________________________________________________";

/// Renders composed lines as HTML with inline formatting tags.
pub struct HtmlSink {
    charset: CharsetTable,
}

impl HtmlSink {
    pub fn new() -> Self {
        Self {
            charset: CharsetTable::ql_to_utf8(),
        }
    }

    /// Emit closing tags for every open toggle, leaving the state alone.
    fn close_open(&self, out: &mut String, state: &RenderState) {
        if state.bold {
            out.push_str("</b>");
        }
        if state.underline {
            out.push_str("</u>");
        }
        if state.subscript {
            out.push_str("</sub>");
        }
        if state.superscript {
            out.push_str("</sup>");
        }
    }

    /// Emit opening tags for every open toggle.
    fn reopen_open(&self, out: &mut String, state: &RenderState) {
        if state.bold {
            out.push_str("<b>");
        }
        if state.underline {
            out.push_str("<u>");
        }
        if state.subscript {
            out.push_str("<sub>");
        }
        if state.superscript {
            out.push_str("<sup>");
        }
    }
}

impl Default for HtmlSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for HtmlSink {
    fn begin_document(&self, out: &mut String) {
        out.push_str(HTML_HEAD);
    }

    fn begin_paragraph(&self, out: &mut String) {
        out.push_str("<p>");
    }

    fn end_paragraph(&self, out: &mut String) {
        out.push_str("</p>");
    }

    fn margin(&self, out: &mut String, count: i32, state: &mut RenderState) {
        // Padding must not inherit bold or underline.
        self.close_open(out, state);
        for _ in 0..count.max(0) {
            out.push_str("&nbsp;");
        }
        self.reopen_open(out, state);
    }

    fn line(&self, out: &mut String, bytes: &[u8], state: &mut RenderState) {
        for &b in bytes {
            match b {
                BOLD => {
                    out.push_str(if state.bold { "</b>" } else { "<b>" });
                    state.bold = !state.bold;
                }
                UNDERLINE => {
                    out.push_str(if state.underline { "</u>" } else { "<u>" });
                    state.underline = !state.underline;
                }
                SUB_SCRIPT => {
                    out.push_str(if state.subscript { "</sub>" } else { "<sub>" });
                    state.subscript = !state.subscript;
                }
                SUPER_SCRIPT => {
                    out.push_str(if state.superscript { "</sup>" } else { "<sup>" });
                    state.superscript = !state.superscript;
                }
                FORM_FEED => {}
                SOFT_HYPHEN => out.push('-'),
                b'<' => out.push_str("&lt;"),
                b'>' => out.push_str("&gt;"),
                SPACE | TAB => out.push_str("&nbsp;"),
                _ => out.push_str(self.charset.lookup(b)),
            }
        }
        out.push_str("<br>\n");
    }

    fn close_toggles(&self, out: &mut String, state: &mut RenderState) {
        self.close_open(out, state);
    }

    fn reopen_toggles(&self, out: &mut String, state: &mut RenderState) {
        self.reopen_open(out, state);
    }

    fn reset_toggles(&self, out: &mut String, state: &mut RenderState) {
        self.close_open(out, state);
        state.bold = false;
        state.underline = false;
        state.subscript = false;
        state.superscript = false;
    }

    fn end_document(&self, out: &mut String, source: &str, state: &mut RenderState) {
        out.push_str("<p>");
        self.line(out, TRAILER_RULE.as_bytes(), state);
        self.line(out, format!("File: {source}").as_bytes(), state);
        self.line(
            out,
            format!("Translated by quillview {}", env!("CARGO_PKG_VERSION")).as_bytes(),
            state,
        );
        out.push_str("</p>");
        out.push_str(HTML_TAIL);
    }
}

/// Render a parsed document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    Ok(Composer::new(doc, HtmlSink::new(), options).render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(bytes: &[u8], state: &mut RenderState) -> String {
        let sink = HtmlSink::new();
        let mut out = String::new();
        sink.line(&mut out, bytes, state);
        out
    }

    #[test]
    fn test_bold_toggles_open_and_close() {
        let mut state = RenderState::default();
        let out = line_of(&[BOLD, b'h', b'i', BOLD], &mut state);
        assert_eq!(out, "<b>hi</b><br>\n");
        assert!(!state.bold);
    }

    #[test]
    fn test_toggle_state_spans_lines() {
        let mut state = RenderState::default();
        let first = line_of(&[BOLD, b'a'], &mut state);
        assert_eq!(first, "<b>a<br>\n");
        assert!(state.bold);
        let second = line_of(&[b'b', BOLD], &mut state);
        assert_eq!(second, "b</b><br>\n");
        assert!(!state.bold);
    }

    #[test]
    fn test_angle_brackets_escaped() {
        let mut state = RenderState::default();
        let out = line_of(b"a<b>c", &mut state);
        assert_eq!(out, "a&lt;b&gt;c<br>\n");
    }

    #[test]
    fn test_spaces_become_nbsp() {
        let mut state = RenderState::default();
        let out = line_of(&[b'a', SPACE, TAB, b'b'], &mut state);
        assert_eq!(out, "a&nbsp;&nbsp;b<br>\n");
    }

    #[test]
    fn test_margin_closes_formatting_around_padding() {
        let sink = HtmlSink::new();
        let mut out = String::new();
        let mut state = RenderState {
            bold: true,
            ..RenderState::default()
        };
        sink.margin(&mut out, 2, &mut state);
        assert_eq!(out, "</b>&nbsp;&nbsp;<b>");
        assert!(state.bold);
    }

    #[test]
    fn test_reset_toggles_clears_state() {
        let sink = HtmlSink::new();
        let mut out = String::new();
        let mut state = RenderState {
            bold: true,
            underline: true,
            ..RenderState::default()
        };
        sink.reset_toggles(&mut out, &mut state);
        assert_eq!(out, "</b></u>");
        assert!(!state.any_open());
    }

    #[test]
    fn test_soft_hyphen_renders_as_hyphen() {
        let mut state = RenderState::default();
        let out = line_of(&[b'a', SOFT_HYPHEN], &mut state);
        assert_eq!(out, "a-<br>\n");
    }
}
