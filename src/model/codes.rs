//! Control codes embedded in the Quill text stream.
//!
//! Paragraph text is a raw byte sequence; non-printable byte values toggle
//! inline formatting or signal structural events rather than visible text.

/// End of text area (document EOF marker).
pub const END_TEXT: u8 = 0x0E;
/// End of paragraph; also resets highlighting attributes.
pub const END_PARA: u8 = 0x00;
/// Space.
pub const SPACE: u8 = 0x20;
/// Tab; expanded against the paragraph's tab table.
pub const TAB: u8 = 0x09;
/// Form feed; requests a page break.
pub const FORM_FEED: u8 = 0x0C;
/// Bold toggle.
pub const BOLD: u8 = 0x0F;
/// Underline toggle.
pub const UNDERLINE: u8 = 0x10;
/// Subscript toggle.
pub const SUB_SCRIPT: u8 = 0x11;
/// Superscript toggle.
pub const SUPER_SCRIPT: u8 = 0x12;
/// Soft hyphen; a break candidate in fully justified text, rendered as a
/// literal hyphen.
pub const SOFT_HYPHEN: u8 = 0x1E;

/// Whether a byte occupies a column on the fixed-width page.
pub const fn is_printable(byte: u8) -> bool {
    byte >= 0x20 && byte < 0xC0
}
