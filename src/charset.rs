//! QL character set to UTF-8 translation.
//!
//! Quill text bytes use the Sinclair QL character set. Every byte maps to a
//! fixed UTF-8 sequence of 1-4 bytes; control ranges and the unused high
//! ranges map to a blank. Both output sinks translate through the same
//! table, injected at construction rather than reached as a global.

/// Translation table from a text byte to its UTF-8 output sequence.
#[derive(Debug, Clone, Copy)]
pub struct CharsetTable {
    entries: &'static [&'static str; 256],
}

impl CharsetTable {
    /// The QL character set, rendered as UTF-8.
    pub fn ql_to_utf8() -> Self {
        Self {
            entries: &QL_TO_UTF8,
        }
    }

    /// Look up the output sequence for a text byte. Total: every byte
    /// has a mapping.
    pub fn lookup(&self, byte: u8) -> &'static str {
        self.entries[byte as usize]
    }
}

impl Default for CharsetTable {
    fn default() -> Self {
        Self::ql_to_utf8()
    }
}

#[rustfmt::skip]
static QL_TO_UTF8: [&str; 256] = [
    // 0x00
    " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ",
    // 0x10 (0x1E is the soft hyphen)
    " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", "-", " ",
    // 0x20
    " ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/",
    // 0x30
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ":", ";", "<", "=", ">", "?",
    // 0x40
    "@", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
    // 0x50
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "[", "\\", "]", "^", "_",
    // 0x60 (the QL places the pound sign where ASCII has the backquote)
    "\u{a3}", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
    // 0x70
    "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "{", "|", "}", "~", "\u{a9}",
    // 0x80
    "ä", "ã", "å", "é", "ö", "õ", "ø", "ü", "ç", "ñ", "ǽ", "œ", "á", "à", "â", "ë",
    // 0x90
    "è", "ê", "ï", "í", "ì", "î", "ó", "ò", "ô", "ú", "ù", "û", "ß", "¢", "¥", "`",
    // 0xa0
    "Ä", "Ã", "Å", "É", "Ö", "Õ", "Ø", "Ü", "Ç", "Ñ", "Æ", "Œ", "α", "δ", "θ", "λ",
    // 0xb0
    "µ", "Π", "Φ", "¡", "¿", "€", "§", "¤", "«", "»", "º", "÷", "←", "→", "↑", "↓",
    // 0xc0
    " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ",
    // 0xd0
    " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ",
    // 0xe0
    " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ",
    // 0xf0
    " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ",
];
