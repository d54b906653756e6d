//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{LayoutParameters, ParagraphRecord, TabTable};

/// Size of the container's file header; stored paragraph offsets are
/// relative to the start of the file and must be adjusted by this before
/// indexing the text buffer.
pub const FILE_HEADER_LEN: u32 = 20;

/// A decoded Quill document.
///
/// Built once by the container parser and consumed read-only by the layout
/// and rendering stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Raw text area with embedded control codes; each paragraph ends in a
    /// NUL, the whole area in an end-of-text marker
    pub text: Vec<u8>,

    /// Paragraph table in container order. The first entry is garbage,
    /// the second and third describe the header and footer templates.
    pub paragraphs: Vec<ParagraphRecord>,

    /// Tab groups referenced by paragraph records
    pub tabs: TabTable,

    /// Page geometry and header/footer flags
    pub layout: LayoutParameters,
}

impl Document {
    /// Byte of the text area at `offset`, or the end-of-paragraph code
    /// past the end. The trailing zero keeps every scanner loop bounded.
    pub fn byte(&self, offset: usize) -> u8 {
        self.text.get(offset).copied().unwrap_or(0)
    }

    /// Byte of the text area at `offset`, `None` once past the end.
    pub fn read(&self, offset: usize) -> Option<u8> {
        self.text.get(offset).copied()
    }

    /// Find the paragraph record for a text-buffer offset.
    ///
    /// Stored offsets are file-relative; the first table entry never holds
    /// a usable record and is skipped. `None` falls back to the previous
    /// (or default) record at the call site rather than being an error.
    pub fn paragraph_at(&self, offset: usize) -> Option<&ParagraphRecord> {
        let file_offset = offset as u32 + FILE_HEADER_LEN;
        self.paragraphs
            .iter()
            .skip(1)
            .find(|p| p.offset == file_offset)
    }

    /// Minimum left margin and maximum right margin across the body
    /// paragraphs, used only for header/footer alignment.
    ///
    /// The first three table entries (garbage, header, footer) are
    /// excluded. An empty body leaves the initial (100, 0) extrema.
    pub fn margin_extrema(&self) -> (i32, i32) {
        let mut min_left = 100;
        let mut max_right = 0;
        for rec in self.paragraphs.iter().skip(3) {
            min_left = min_left.min(i32::from(rec.left_margin));
            max_right = max_right.max(i32::from(rec.right_margin));
        }
        (min_left, max_right)
    }

    /// Number of body paragraphs (table entries past the reserved three).
    pub fn body_paragraph_count(&self) -> usize {
        self.paragraphs.len().saturating_sub(3)
    }
}
