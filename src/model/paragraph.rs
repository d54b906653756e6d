//! Paragraph table records.

use serde::{Deserialize, Serialize};

/// One entry of the container's paragraph table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Offset of the paragraph text, relative to the start of the file
    /// (so 20 larger than the text-buffer index).
    pub offset: u32,

    /// Length of the paragraph text including its terminating NUL.
    pub len: u16,

    /// Left margin, applied from the second line on.
    pub left_margin: u8,

    /// Indent margin, applied to the first line only.
    pub indent_margin: u8,

    /// Right margin.
    pub right_margin: u8,

    /// Justification mode.
    pub justification: Justification,

    /// Tab table entry that applies to this paragraph.
    pub tab_table: u8,
}

impl ParagraphRecord {
    /// Record used when no table entry matches a text offset. Margins
    /// follow Quill's defaults.
    pub fn fallback() -> Self {
        Self {
            offset: 0,
            len: 0,
            left_margin: 9,
            indent_margin: 14,
            right_margin: 69,
            justification: Justification::Left,
            tab_table: 0,
        }
    }
}

/// Paragraph justification mode.
///
/// `Right` is Quill's full justification: inter-word spacing is stretched
/// so both margins are flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    /// Left alignment (default)
    #[default]
    Left,
    /// Centered within the margin span
    Center,
    /// Full justification
    Right,
}

impl Justification {
    /// Decode the justification byte; unknown values fall back to left.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Justification::Center,
            2 => Justification::Right,
            _ => Justification::Left,
        }
    }
}
