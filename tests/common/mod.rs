//! Shared helper for assembling Quill containers in tests.
#![allow(dead_code)]

/// Justification byte values as stored in the paragraph table.
pub const JUSTIFY_LEFT: u8 = 0;
pub const JUSTIFY_CENTER: u8 = 1;
pub const JUSTIFY_RIGHT: u8 = 2;

struct Para {
    text: Vec<u8>,
    left: u8,
    indent: u8,
    right: u8,
    justify: u8,
    tab_table: u8,
}

/// Assembles a complete, well-formed Quill container byte by byte.
///
/// The builder takes care of the bookkeeping the format demands: the
/// header and footer templates occupy the first two text paragraphs, the
/// paragraph table gets its garbage leading entry, and all offsets and
/// region lengths are computed from the content.
pub struct QuillFileBuilder {
    header_template: Vec<u8>,
    footer_template: Vec<u8>,
    paragraphs: Vec<Para>,
    page_length: u8,
    top_margin: u8,
    bottom_margin: u8,
    header_flag: u8,
    footer_flag: u8,
    header_bold: bool,
    footer_bold: bool,
    tab_groups: Vec<(u8, Vec<u8>)>,
}

impl QuillFileBuilder {
    pub fn new() -> Self {
        Self {
            header_template: Vec::new(),
            footer_template: Vec::new(),
            paragraphs: Vec::new(),
            page_length: 0,
            top_margin: 0,
            bottom_margin: 0,
            header_flag: 0,
            footer_flag: 0,
            header_bold: false,
            footer_bold: false,
            tab_groups: Vec::new(),
        }
    }

    pub fn header_template(mut self, text: &str) -> Self {
        self.header_template = text.as_bytes().to_vec();
        self
    }

    pub fn footer_template(mut self, text: &str) -> Self {
        self.footer_template = text.as_bytes().to_vec();
        self
    }

    pub fn page(mut self, length: u8, top: u8, bottom: u8) -> Self {
        self.page_length = length;
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// Header flag: 1 left, 2 centered, 3 right.
    pub fn header(mut self, flag: u8, bold: bool) -> Self {
        self.header_flag = flag;
        self.header_bold = bold;
        self
    }

    pub fn footer(mut self, flag: u8, bold: bool) -> Self {
        self.footer_flag = flag;
        self.footer_bold = bold;
        self
    }

    pub fn paragraph(self, text: &[u8], left: u8, right: u8, justify: u8) -> Self {
        self.paragraph_indented(text, left, left, right, justify, 0)
    }

    pub fn paragraph_indented(
        mut self,
        text: &[u8],
        left: u8,
        indent: u8,
        right: u8,
        justify: u8,
        tab_table: u8,
    ) -> Self {
        self.paragraphs.push(Para {
            text: text.to_vec(),
            left,
            indent,
            right,
            justify,
            tab_table,
        });
        self
    }

    pub fn tab_group(mut self, id: u8, stops: &[u8]) -> Self {
        self.tab_groups.push((id, stops.to_vec()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        // Text area: templates first, then the body, then end-of-text.
        let mut text = Vec::new();
        let mut offsets = Vec::new();
        text.extend_from_slice(&self.header_template);
        text.push(0);
        let footer_offset = text.len();
        text.extend_from_slice(&self.footer_template);
        text.push(0);
        for para in &self.paragraphs {
            offsets.push(text.len());
            text.extend_from_slice(&para.text);
            text.push(0);
        }
        text.push(0x0E);

        let text_len = (20 + text.len()) as u32;
        let used = (3 + self.paragraphs.len()) as u16;
        let para_len = (8 + 12 * used as usize) as u16;
        let free_len = 8u16;

        let mut tab_area = Vec::new();
        for (id, stops) in &self.tab_groups {
            tab_area.push(*id);
            tab_area.push((2 + 2 * stops.len()) as u8);
            for &pos in stops {
                tab_area.push(pos);
                tab_area.push(0); // plain tab
            }
        }
        tab_area.extend_from_slice(&[0, 0]); // chain terminator

        let mut data = Vec::new();

        // File header.
        data.extend_from_slice(&20u16.to_be_bytes());
        data.extend_from_slice(b"vrm1qdf0");
        data.extend_from_slice(&text_len.to_be_bytes());
        data.extend_from_slice(&para_len.to_be_bytes());
        data.extend_from_slice(&free_len.to_be_bytes());
        data.extend_from_slice(&20u16.to_be_bytes());
        assert_eq!(data.len(), 20);

        data.extend_from_slice(&text);

        // Paragraph table head: size, gran, used, alloc.
        data.extend_from_slice(&12u16.to_be_bytes());
        data.extend_from_slice(&8u16.to_be_bytes());
        data.extend_from_slice(&used.to_be_bytes());
        data.extend_from_slice(&used.to_be_bytes());

        let record = |offset: u32, len: u16, left: u8, indent: u8, right: u8, justify: u8, tab: u8, data: &mut Vec<u8>| {
            data.extend_from_slice(&offset.to_be_bytes());
            data.extend_from_slice(&len.to_be_bytes());
            data.push(0); // pad
            data.push(left);
            data.push(indent);
            data.push(right);
            data.push(justify);
            data.push(tab);
        };
        record(0, 0, 0, 0, 0, 0, 0, &mut data); // garbage entry
        record(
            20,
            (self.header_template.len() + 1) as u16,
            9,
            9,
            69,
            0,
            0,
            &mut data,
        );
        record(
            (20 + footer_offset) as u32,
            (self.footer_template.len() + 1) as u16,
            9,
            9,
            69,
            0,
            0,
            &mut data,
        );
        for (para, offset) in self.paragraphs.iter().zip(&offsets) {
            record(
                (20 + offset) as u32,
                (para.text.len() + 1) as u16,
                para.left,
                para.indent,
                para.right,
                para.justify,
                para.tab_table,
                &mut data,
            );
        }

        // Free table head.
        data.extend_from_slice(&[0u8; 8]);

        // Layout table.
        let mut layout = [0u8; 20];
        layout[0] = self.bottom_margin;
        layout[3] = self.page_length;
        layout[6] = self.top_margin;
        layout[12..14].copy_from_slice(&(tab_area.len() as u16).to_be_bytes());
        layout[14] = self.header_flag;
        layout[15] = self.footer_flag;
        layout[18] = self.header_bold as u8;
        layout[19] = self.footer_bold as u8;
        data.extend_from_slice(&layout);

        data.extend_from_slice(&tab_area);

        data
    }
}
