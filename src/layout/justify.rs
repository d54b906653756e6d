//! Pad distribution for fully justified lines.

use crate::model::codes::{SPACE, TAB};

/// Stretches `line` to end exactly at `r_marg` by widening its spaces.
///
/// `col` is the column the line currently ends at. Only spaces after the
/// last tab marker take padding; text positioned by a tab stop must keep
/// its column. The rightmost padded space absorbs any remainder, so the
/// extra width leans toward the line end rather than spreading evenly.
pub fn stretch(line: &[u8], col: i32, r_marg: i32) -> Vec<u8> {
    let mut pads = r_marg - col;
    if pads <= 0 {
        return line.to_vec();
    }

    // Spaces reset at each tab marker; padding before a tab stop would
    // shift the stop's column.
    let mut spaces = 0i32;
    let mut last_tab = 0usize;
    for (i, &b) in line.iter().enumerate() {
        if b == TAB {
            spaces = 0;
            last_tab = i;
        } else if b == SPACE {
            spaces += 1;
        }
    }

    let pad_space = if spaces == 0 || pads <= spaces {
        1
    } else {
        pads / spaces
    };

    let mut out = Vec::with_capacity(line.len() + pads as usize);
    if last_tab > 0 {
        out.extend_from_slice(&line[..last_tab]);
    }

    let mut spaces_left = spaces;
    for &b in &line[last_tab..] {
        out.push(b);
        if b == SPACE {
            spaces_left -= 1;
            if spaces_left == 0 {
                // Last space takes whatever padding is still owed.
                while pads > 0 {
                    out.push(SPACE);
                    pads -= 1;
                }
            } else {
                let mut n = pad_space;
                while n > 0 && pads > 0 {
                    out.push(SPACE);
                    n -= 1;
                    pads -= 1;
                }
            }
        }
    }
    out
}
