//! The page composer: drives the line scanners across paragraphs while
//! tracking page position, and emits page furniture at breaks.

use crate::model::codes::{BOLD, END_PARA, END_TEXT, FORM_FEED};
use crate::model::{Document, HeaderJustify, Justification, ParagraphRecord};
use crate::render::{OutputSink, RenderOptions, RenderState};

use super::scanner::{scan_center, scan_left, scan_right};

/// Margins used for the first three paragraphs, whose table records hold
/// header/footer leftovers rather than usable values.
const FIXED_LEFT_MARGIN: i32 = 9;
const FIXED_RIGHT_MARGIN: i32 = 69;

/// Walks the text stream paragraph by paragraph and writes the rendered
/// document into an [`OutputSink`].
///
/// Line numbering starts at 2 so the page break fires one content line
/// early, leaving room for the footer. Page numbering always starts at 1.
pub struct Composer<'a, S: OutputSink> {
    doc: &'a Document,
    sink: S,
    state: RenderState,
    out: String,
    cursor: usize,
    para_count: u32,
    max_lines: i32,
    header_template: Vec<u8>,
    footer_template: Vec<u8>,
    source: String,
}

impl<'a, S: OutputSink> Composer<'a, S> {
    pub fn new(doc: &'a Document, sink: S, options: &RenderOptions) -> Self {
        let mut max_lines = doc.layout.max_lines_per_page();
        if max_lines > 0 && doc.layout.footer.is_present() {
            max_lines -= 1;
        }

        let (min_left, max_right) = doc.margin_extrema();
        let state = RenderState {
            line_no: 2,
            page_no: 1,
            min_left,
            max_right,
            ..RenderState::default()
        };

        Self {
            doc,
            sink,
            state,
            out: String::new(),
            cursor: 0,
            para_count: 0,
            max_lines,
            header_template: Vec::new(),
            footer_template: Vec::new(),
            source: options.source_name().to_string(),
        }
    }

    /// Render the whole document and return the output.
    pub fn render(mut self) -> String {
        self.sink.begin_document(&mut self.out);

        // The first two paragraphs are the header and footer templates,
        // not body text.
        self.header_template = self.read_template();
        self.footer_template = self.read_template();

        let mut para = self
            .doc
            .paragraph_at(self.cursor)
            .cloned()
            .unwrap_or_else(ParagraphRecord::fallback);

        loop {
            // The end-of-text marker is not a paragraph; consuming an
            // END_PARA can leave the cursor directly on it.
            if self.doc.byte(self.cursor) == END_TEXT {
                break;
            }

            self.print_paragraph(&para);

            match self.doc.read(self.cursor) {
                None | Some(END_TEXT) => break,
                Some(b) => {
                    self.cursor += 1;
                    if b == END_PARA {
                        if let Some(next) = self.doc.paragraph_at(self.cursor) {
                            para = next.clone();
                        }
                    }
                }
            }
        }

        self.sink
            .end_document(&mut self.out, &self.source, &mut self.state);
        self.out
    }

    /// Read one template paragraph (header or footer) from the stream.
    fn read_template(&mut self) -> Vec<u8> {
        let mut template = Vec::new();
        while let Some(b) = self.doc.read(self.cursor) {
            if b == END_PARA {
                break;
            }
            template.push(b);
            self.cursor += 1;
        }
        self.cursor += 1;
        self.para_count += 1;
        template
    }

    fn print_paragraph(&mut self, para: &ParagraphRecord) {
        self.para_count += 1;
        self.sink.begin_paragraph(&mut self.out);

        if self.doc.byte(self.cursor) == END_PARA {
            // Empty paragraph: one blank line, except in the template
            // positions at the top of the stream.
            if self.para_count > 2 {
                self.emit_line(&[]);
            }
        } else {
            match para.justification {
                Justification::Left => self.print_left(para),
                Justification::Center => self.print_center(para),
                Justification::Right => self.print_right(para),
            }
            self.sink.reset_toggles(&mut self.out, &mut self.state);
        }

        self.sink.end_paragraph(&mut self.out);
    }

    fn print_left(&mut self, para: &ParagraphRecord) {
        let mut indent_line = true;

        while self.doc.byte(self.cursor) != END_PARA {
            if self.max_lines > 0 && self.state.line_no >= self.max_lines {
                self.new_page();
            }

            let (l_marg, r_marg) = if self.para_count < 3 {
                (FIXED_LEFT_MARGIN, FIXED_RIGHT_MARGIN)
            } else {
                let left = if indent_line {
                    para.indent_margin
                } else {
                    para.left_margin
                };
                (i32::from(left), i32::from(para.right_margin))
            };
            indent_line = false;

            let scan = scan_left(self.doc, para.tab_table, self.cursor, l_marg, r_marg);
            self.cursor = scan.cursor;

            self.sink.margin(&mut self.out, l_marg, &mut self.state);
            self.emit_line(&scan.line);

            if scan.page_break {
                self.new_page();
            }
        }
    }

    fn print_center(&mut self, para: &ParagraphRecord) {
        // Centered paragraphs never use the indent margin.
        let (l_marg, max_width) = if self.para_count < 3 {
            (FIXED_LEFT_MARGIN, FIXED_RIGHT_MARGIN - FIXED_LEFT_MARGIN)
        } else {
            let left = i32::from(para.left_margin);
            (left, i32::from(para.right_margin) - left)
        };

        while self.doc.byte(self.cursor) != END_PARA {
            if self.max_lines > 0 && self.state.line_no >= self.max_lines {
                self.new_page();
            }

            let scan = scan_center(self.doc, self.cursor, max_width);
            self.cursor = scan.cursor;

            let left_pad = l_marg + max_width / 2 - scan.col / 2;
            self.sink.margin(&mut self.out, left_pad, &mut self.state);
            self.emit_line(&scan.line);

            if scan.page_break {
                self.new_page();
            }
        }
    }

    fn print_right(&mut self, para: &ParagraphRecord) {
        let mut indent_line = true;

        while self.doc.byte(self.cursor) != END_PARA {
            if self.max_lines > 0 && self.state.line_no >= self.max_lines {
                self.new_page();
            }

            let l_marg = i32::from(if indent_line {
                para.indent_margin
            } else {
                para.left_margin
            });
            let r_marg = i32::from(para.right_margin);
            indent_line = false;

            let scan = scan_right(self.doc, para.tab_table, self.cursor, l_marg, r_marg);
            self.cursor = scan.cursor;

            self.sink.margin(&mut self.out, l_marg, &mut self.state);
            self.emit_line(&scan.line);

            // Form feeds survive into the justified line, so the break
            // check runs on the emitted bytes.
            if scan.line.contains(&FORM_FEED) {
                self.new_page();
            }
        }
    }

    /// Finish the current page and open the next: pad to the bottom, emit
    /// the footer, then the new page's header. Formatting toggles are
    /// closed around the furniture so page numbers stay plain.
    fn new_page(&mut self) {
        self.sink.close_toggles(&mut self.out, &mut self.state);

        if self.max_lines > 0 && self.state.line_no < self.max_lines {
            // Each blank line also advances line_no inside emit_line, so
            // the page bottom is reached in half the iterations.
            while self.state.line_no <= self.max_lines {
                self.state.line_no += 1;
                self.emit_line(&[]);
            }
        }

        let footer = std::mem::take(&mut self.footer_template);
        self.render_header_footer(&footer, false);
        self.footer_template = footer;

        self.state.page_no += 1;
        self.state.line_no = 2;

        let header = std::mem::take(&mut self.header_template);
        self.render_header_footer(&header, true);
        self.header_template = header;

        self.sink.reopen_toggles(&mut self.out, &mut self.state);
    }

    /// Expand and emit one header or footer line, positioned against the
    /// document-wide margin extrema.
    fn render_header_footer(&mut self, template: &[u8], is_header: bool) {
        let (flag, bold) = if is_header {
            (self.doc.layout.header, self.doc.layout.header_bold)
        } else {
            (self.doc.layout.footer, self.doc.layout.footer_bold)
        };
        if !flag.is_present() {
            return;
        }

        let line = expand_template(template, self.state.page_no, bold);

        // The toggle bytes wrap the text but take no columns.
        let mut length = line.len() as i32;
        if bold {
            length -= 2;
        }

        let width = self.state.max_right - self.state.min_left;
        let pad = match flag {
            HeaderJustify::None | HeaderJustify::Left => self.state.min_left,
            HeaderJustify::Center => self.state.min_left + width / 2 - length / 2,
            HeaderJustify::Right => width - length,
        };

        self.sink.margin(&mut self.out, pad, &mut self.state);
        self.emit_line(&line);
    }

    fn emit_line(&mut self, bytes: &[u8]) {
        self.state.line_no += 1;
        self.sink.line(&mut self.out, bytes, &mut self.state);
    }
}

/// Substitute the page-number placeholders of a header/footer template.
///
/// Quill distinguishes `nnn` (digits), `aaa` (letters) and `rrr` (roman
/// numerals); all three render as the decimal page number here.
fn expand_template(template: &[u8], page_no: i32, bold: bool) -> Vec<u8> {
    let mut line = Vec::with_capacity(template.len() + 8);
    if bold {
        line.push(BOLD);
    }

    let mut i = 0;
    while i < template.len() {
        let rest = &template[i..];
        if rest.starts_with(b"nnn") || rest.starts_with(b"aaa") || rest.starts_with(b"rrr") {
            line.extend_from_slice(page_no.to_string().as_bytes());
            i += 3;
        } else {
            line.push(template[i]);
            i += 1;
        }
    }

    if bold {
        line.push(BOLD);
    }
    line
}
