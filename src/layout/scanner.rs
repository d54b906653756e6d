//! Line scanners: one word-wrap pass per justification mode.
//!
//! Each scanner starts at a cursor into the document text buffer and
//! consumes bytes until the end-of-paragraph marker or the right margin,
//! returning the rendered line and the updated cursor. The three modes
//! differ in how they treat tabs and where they allow a line to break,
//! which is why they are kept as separate passes rather than one
//! parameterized loop.

use crate::model::codes::{is_printable, END_PARA, FORM_FEED, SOFT_HYPHEN, SPACE, TAB};
use crate::model::Document;

use super::justify;

/// One scanned (and, for full justification, stretched) line.
#[derive(Debug, Clone)]
pub struct Scan {
    /// Rendered line bytes, control codes included
    pub line: Vec<u8>,

    /// Cursor position for the next line of the paragraph
    pub cursor: usize,

    /// A form feed was seen while scanning
    pub page_break: bool,

    /// Final column count of the line (before any margin padding)
    pub col: i32,
}

/// Scan one left-justified line.
///
/// Tabs are expanded eagerly to literal spaces; a tab with no remaining
/// stop ends the line and is consumed. When the right margin is reached
/// the line is cut back to the last space, and leading spaces are skipped
/// so the remainder does not start blank.
pub fn scan_left(doc: &Document, tab_table: u8, start: usize, l_marg: i32, r_marg: i32) -> Scan {
    let mut cursor = start;
    let mut col = l_marg;
    let mut line = Vec::new();
    let mut page_break = false;
    // Last space seen: text offset, line length before it, column after it.
    let mut last_space: Option<(usize, usize, i32)> = None;

    loop {
        let b = doc.byte(cursor);
        if b == FORM_FEED {
            page_break = true;
        }
        if is_printable(b) {
            col += 1;
        }
        if b == SPACE {
            last_space = Some((cursor, line.len(), col));
        }

        if b == TAB {
            let Some(stop) = doc.tabs.next_stop(tab_table, col + 1) else {
                // No stop left: the tab is consumed and the line ends here.
                cursor += 1;
                break;
            };
            while col < stop {
                line.push(SPACE);
                col += 1;
            }
        } else {
            line.push(b);
        }
        cursor += 1;

        if doc.byte(cursor) == END_PARA || col >= r_marg {
            break;
        }
    }

    if col >= r_marg {
        if let Some((offset, len, space_col)) = last_space {
            line.truncate(len);
            cursor = offset;
            col = space_col;
            while doc.byte(cursor) == SPACE {
                cursor += 1;
            }
        }
    }

    Scan {
        line,
        cursor,
        page_break,
        col,
    }
}

/// Scan one centered line.
///
/// Tabs collapse to a single space and count one column; the column
/// counter starts at zero and measures the visible line width, which the
/// composer later centers within the margin span. A wrap does not skip
/// the remainder's leading spaces, so they shift the next line's center.
pub fn scan_center(doc: &Document, start: usize, max_width: i32) -> Scan {
    let mut cursor = start;
    let mut col = 0;
    let mut line = Vec::new();
    let mut page_break = false;
    let mut last_space: Option<(usize, usize, i32)> = None;

    loop {
        let b = doc.byte(cursor);
        if b == FORM_FEED {
            page_break = true;
        }
        if is_printable(b) || b == TAB {
            col += 1;
        }
        if b == SPACE {
            last_space = Some((cursor, line.len(), col));
        }

        if b == TAB {
            line.push(SPACE);
        } else {
            line.push(b);
        }
        cursor += 1;

        if doc.byte(cursor) == END_PARA || col >= max_width {
            break;
        }
    }

    if col >= max_width {
        if let Some((offset, len, space_col)) = last_space {
            line.truncate(len);
            cursor = offset;
            col = space_col;
        }
    }

    Scan {
        line,
        cursor,
        page_break,
        col,
    }
}

/// Scan one fully-justified line.
///
/// Break points are remembered at spaces, tabs and soft hyphens. Tabs are
/// expanded but written as tab markers so the justifier can tell fixed
/// positions from paddable spaces. A line that ends at the paragraph
/// marker, or because a tab ran out of stops, escapes unjustified;
/// otherwise spaces before the break point are stripped and the line is
/// stretched flush to the right margin.
pub fn scan_right(doc: &Document, tab_table: u8, start: usize, l_marg: i32, r_marg: i32) -> Scan {
    let mut cursor = start;
    let mut col = l_marg;
    let mut line = Vec::new();
    let mut tab_wrap = false;
    let mut last_break: Option<(usize, usize, i32)> = None;

    loop {
        let b = doc.byte(cursor);
        if b == SPACE || b == TAB || b == SOFT_HYPHEN {
            // Column recorded before the break byte itself is counted.
            last_break = Some((cursor, line.len(), col));
        }

        if b == TAB {
            let Some(stop) = doc.tabs.next_stop(tab_table, col + 1) else {
                tab_wrap = true;
                cursor += 1;
                break;
            };
            while col < stop && col < r_marg {
                line.push(TAB);
                col += 1;
            }
        } else {
            line.push(b);
            if is_printable(b) {
                col += 1;
            }
        }
        cursor += 1;

        if doc.byte(cursor) == END_PARA || col >= r_marg {
            break;
        }
    }

    // End of paragraph and tab-wrap both escape justification.
    if doc.byte(cursor) == END_PARA || tab_wrap {
        return Scan {
            line,
            cursor,
            page_break: false,
            col,
        };
    }

    if col >= r_marg {
        if let Some((offset, len, break_col)) = last_break {
            line.truncate(len);
            col = break_col;
            // Strip spaces running up to the break point, but never the
            // line's first byte.
            while line.len() > 1 && line.last() == Some(&SPACE) {
                line.pop();
                col -= 1;
            }
            cursor = offset;
            while doc.byte(cursor) == SPACE {
                cursor += 1;
            }
        }
    }

    let line = justify::stretch(&line, col, r_marg);

    Scan {
        line,
        cursor,
        page_break: false,
        col,
    }
}
