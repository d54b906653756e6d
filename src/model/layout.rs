//! Page layout parameters decoded from the container's layout table.

use serde::{Deserialize, Serialize};

/// Document-wide page geometry and header/footer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutParameters {
    /// Page length in lines; 0 disables pagination
    pub page_length: u8,

    /// Top margin in lines
    pub top_margin: u8,

    /// Bottom margin in lines
    pub bottom_margin: u8,

    /// Display mode (40/64/80 columns on the QL; not used for layout)
    pub display_mode: u8,

    /// Line gap (only single spacing is supported)
    pub line_gap: u8,

    /// First page number as stored (numbering always starts at 1 here)
    pub start_page: u8,

    /// Type color, 0 = green, 1 = white; ignored by the renderer
    pub color: u8,

    /// Stored word count
    pub word_count: u16,

    /// Maximum size of the tab area in bytes
    pub max_tab_size: u16,

    /// Used size of the tab area in bytes
    pub tab_size: u16,

    /// Header justification; `None` means no header
    pub header: HeaderJustify,

    /// Footer justification; `None` means no footer
    pub footer: HeaderJustify,

    /// Header margin in lines
    pub header_margin: u8,

    /// Footer margin in lines
    pub footer_margin: u8,

    /// Render the header template in bold
    pub header_bold: bool,

    /// Render the footer template in bold
    pub footer_bold: bool,
}

impl LayoutParameters {
    /// Content lines per page before a break is forced.
    ///
    /// `page_length - top_margin - bottom_margin`; zero when the page
    /// length is zero or the margins leave no room, which disables
    /// automatic pagination.
    pub fn max_lines_per_page(&self) -> i32 {
        let lines =
            i32::from(self.page_length) - i32::from(self.top_margin) - i32::from(self.bottom_margin);
        if self.page_length == 0 || lines < 1 {
            0
        } else {
            lines
        }
    }
}

/// Header/footer presence and justification flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderJustify {
    /// No header/footer
    #[default]
    None,
    /// Left justified, at the minimum left margin
    Left,
    /// Centered within the overall margin span
    Center,
    /// Right aligned to the overall right margin
    Right,
}

impl HeaderJustify {
    /// Decode the stored flag byte; unknown values mean absent.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => HeaderJustify::Left,
            2 => HeaderJustify::Center,
            3 => HeaderJustify::Right,
            _ => HeaderJustify::None,
        }
    }

    /// Whether a header/footer is present at all.
    pub fn is_present(&self) -> bool {
        *self != HeaderJustify::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_lines() {
        let layout = LayoutParameters {
            page_length: 66,
            top_margin: 3,
            bottom_margin: 3,
            ..Default::default()
        };
        assert_eq!(layout.max_lines_per_page(), 60);
    }

    #[test]
    fn test_zero_page_length_disables_pagination() {
        let layout = LayoutParameters {
            page_length: 0,
            ..Default::default()
        };
        assert_eq!(layout.max_lines_per_page(), 0);
    }

    #[test]
    fn test_margins_swallow_page() {
        let layout = LayoutParameters {
            page_length: 10,
            top_margin: 6,
            bottom_margin: 6,
            ..Default::default()
        };
        assert_eq!(layout.max_lines_per_page(), 0);
    }

    #[test]
    fn test_header_justify_from_byte() {
        assert_eq!(HeaderJustify::from_byte(0), HeaderJustify::None);
        assert_eq!(HeaderJustify::from_byte(2), HeaderJustify::Center);
        assert_eq!(HeaderJustify::from_byte(3), HeaderJustify::Right);
        assert!(!HeaderJustify::from_byte(0).is_present());
        assert!(HeaderJustify::from_byte(1).is_present());
    }
}
