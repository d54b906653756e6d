//! Binary decoder for the Quill document container.
//!
//! The container is a sequence of big-endian tables: a 20-byte file header,
//! the text area, the paragraph table, a free-space table, the layout table
//! and the tab area. All region sizes are declared up front; a declared
//! region that does not fit the file is a fatal `Corrupted` error, since
//! page geometry depends on tables decoded before rendering starts.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};
use crate::model::{
    Document, HeaderJustify, Justification, LayoutParameters, ParagraphRecord, TabGroup, TabKind,
    TabStop, TabTable, FILE_HEADER_LEN,
};

const HEADER_LEN: usize = FILE_HEADER_LEN as usize;
const PARA_TABLE_HEAD_LEN: usize = 8;
const PARA_RECORD_MIN_LEN: usize = 12;
const LAYOUT_TABLE_LEN: usize = 20;

/// Quill container parser.
pub struct QuillParser {
    data: Vec<u8>,
}

impl QuillParser {
    /// Open a Quill file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a Quill container from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Parse a Quill container from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Decode the container into a structured [`Document`].
    pub fn parse(&self) -> Result<Document> {
        let text_len = self.read_u32(10, "file header")? as usize;
        let para_len = self.read_u16(14, "file header")? as usize;
        let free_len = self.read_u16(16, "file header")? as usize;

        if text_len < HEADER_LEN || text_len > self.data.len() {
            return Err(Error::Corrupted(format!(
                "text area of {} bytes extends past end of file ({} bytes)",
                text_len,
                self.data.len()
            )));
        }
        let text = self.data[HEADER_LEN..text_len].to_vec();

        let paragraphs = self.parse_paragraph_table(text_len)?;

        let layout_offset = text_len + para_len + free_len;
        let layout = self.parse_layout_table(layout_offset)?;
        let tabs = self.parse_tab_table(layout_offset + LAYOUT_TABLE_LEN, layout.tab_size)?;

        log::debug!(
            "decoded Quill container: {} text bytes, {} paragraph records, {} tab groups",
            text.len(),
            paragraphs.len(),
            tabs.groups.len()
        );

        Ok(Document {
            text,
            paragraphs,
            tabs,
            layout,
        })
    }

    fn parse_paragraph_table(&self, offset: usize) -> Result<Vec<ParagraphRecord>> {
        let size = self.read_u16(offset, "paragraph table")? as usize;
        let used = self.read_u16(offset + 4, "paragraph table")? as usize;

        if size < PARA_RECORD_MIN_LEN {
            return Err(Error::Corrupted(format!(
                "paragraph record size {} is smaller than the {} byte minimum",
                size, PARA_RECORD_MIN_LEN
            )));
        }

        let mut records = Vec::with_capacity(used);
        let mut pos = offset + PARA_TABLE_HEAD_LEN;
        for _ in 0..used {
            let rec = self
                .data
                .get(pos..pos + PARA_RECORD_MIN_LEN)
                .ok_or_else(|| {
                    Error::Corrupted(format!(
                        "paragraph table of {} records extends past end of file",
                        used
                    ))
                })?;
            records.push(ParagraphRecord {
                offset: u32::from_be_bytes([rec[0], rec[1], rec[2], rec[3]]),
                len: u16::from_be_bytes([rec[4], rec[5]]),
                left_margin: rec[7],
                indent_margin: rec[8],
                right_margin: rec[9],
                justification: Justification::from_byte(rec[10]),
                tab_table: rec[11],
            });
            pos += size;
        }

        if records.len() < 3 {
            log::warn!(
                "paragraph table holds only {} records; header/footer entries are missing",
                records.len()
            );
        }

        Ok(records)
    }

    fn parse_layout_table(&self, offset: usize) -> Result<LayoutParameters> {
        let raw = self
            .data
            .get(offset..offset + LAYOUT_TABLE_LEN)
            .ok_or_else(|| {
                Error::Corrupted("layout table extends past end of file".to_string())
            })?;

        Ok(LayoutParameters {
            bottom_margin: raw[0],
            display_mode: raw[1],
            line_gap: raw[2],
            page_length: raw[3],
            start_page: raw[4],
            color: raw[5],
            top_margin: raw[6],
            word_count: u16::from_be_bytes([raw[8], raw[9]]),
            max_tab_size: u16::from_be_bytes([raw[10], raw[11]]),
            tab_size: u16::from_be_bytes([raw[12], raw[13]]),
            header: HeaderJustify::from_byte(raw[14]),
            footer: HeaderJustify::from_byte(raw[15]),
            header_margin: raw[16],
            footer_margin: raw[17],
            header_bold: raw[18] != 0,
            footer_bold: raw[19] != 0,
        })
    }

    fn parse_tab_table(&self, offset: usize, tab_size: u16) -> Result<TabTable> {
        let area = self
            .data
            .get(offset..offset + tab_size as usize)
            .ok_or_else(|| Error::Corrupted("tab area extends past end of file".to_string()))?;

        let mut groups = Vec::new();
        let mut pos = 0;
        // Linked groups: {id, total byte length, entries...}, id 0 ends the
        // chain. A length below the 2-byte group header would never advance.
        while pos + 1 < area.len() {
            let id = area[pos];
            let len = area[pos + 1] as usize;
            if id == 0 {
                break;
            }
            if len < 2 {
                log::warn!("tab group {} declares invalid length {}; stopping scan", id, len);
                break;
            }
            let entry_count = len / 2 - 1;
            let mut entries = Vec::with_capacity(entry_count);
            for i in 0..entry_count {
                let at = pos + 2 + i * 2;
                if at + 1 >= area.len() {
                    break;
                }
                entries.push(TabStop {
                    position: area[at],
                    kind: TabKind::from_byte(area[at + 1]),
                });
            }
            groups.push(TabGroup { id, entries });
            pos += len;
        }

        Ok(TabTable { groups })
    }

    fn read_u16(&self, offset: usize, what: &str) -> Result<u16> {
        self.data
            .get(offset..offset + 2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
            .ok_or_else(|| Error::Corrupted(format!("{} truncated at byte {}", what, offset)))
    }

    fn read_u32(&self, offset: usize, what: &str) -> Result<u32> {
        self.data
            .get(offset..offset + 4)
            .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
            .ok_or_else(|| Error::Corrupted(format!("{} truncated at byte {}", what, offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal hand-assembled container: "Hi" header template, empty
    /// footer, one body paragraph "ab".
    fn sample() -> Vec<u8> {
        let text = b"Hi\x00\x00ab\x00\x0e";
        let text_len = (HEADER_LEN + text.len()) as u32;

        let mut data = Vec::new();
        data.extend_from_slice(&20u16.to_be_bytes());
        data.extend_from_slice(b"vrm1qdf0");
        data.extend_from_slice(&text_len.to_be_bytes());

        // Paragraph table: head + 4 records of 14 bytes.
        let para_len = (PARA_TABLE_HEAD_LEN + 4 * 14) as u16;
        data.extend_from_slice(&para_len.to_be_bytes());
        // Free table: bare 8-byte head.
        data.extend_from_slice(&8u16.to_be_bytes());
        data.extend_from_slice(&0u16.to_be_bytes());
        assert_eq!(data.len(), HEADER_LEN);

        data.extend_from_slice(text);

        // Paragraph table head: size, gran, used, alloc.
        data.extend_from_slice(&14u16.to_be_bytes());
        data.extend_from_slice(&8u16.to_be_bytes());
        data.extend_from_slice(&4u16.to_be_bytes());
        data.extend_from_slice(&4u16.to_be_bytes());
        let mut record = |offset: u32, len: u16, left: u8, right: u8, justif: u8| {
            data.extend_from_slice(&offset.to_be_bytes());
            data.extend_from_slice(&len.to_be_bytes());
            data.push(0); // pad
            data.push(left);
            data.push(left);
            data.push(right);
            data.push(justif);
            data.push(0); // tab table
            data.extend_from_slice(&[0, 0]); // trailing pad
        };
        record(0, 0, 0, 0, 0); // garbage entry
        record(20, 3, 9, 69, 0); // header template
        record(23, 1, 9, 69, 0); // footer template
        record(24, 3, 4, 40, 2); // body paragraph

        // Free table head.
        data.extend_from_slice(&[0u8; 8]);

        // Layout table.
        let mut layout = [0u8; LAYOUT_TABLE_LEN];
        layout[0] = 6; // bottom margin
        layout[3] = 66; // page length
        layout[6] = 6; // top margin
        layout[8..10].copy_from_slice(&2u16.to_be_bytes()); // word count
        layout[12..14].copy_from_slice(&6u16.to_be_bytes()); // tab size
        layout[14] = 2; // header: centered
        layout[18] = 1; // header bold
        data.extend_from_slice(&layout);

        // Tab area: one group, id 1, two stops.
        data.extend_from_slice(&[1, 6, 10, 0, 20, 0]);

        data
    }

    #[test]
    fn test_parse_sample() {
        let doc = QuillParser::from_bytes(&sample()).unwrap().parse().unwrap();

        assert_eq!(doc.text, b"Hi\x00\x00ab\x00\x0e");
        assert_eq!(doc.paragraphs.len(), 4);
        assert_eq!(doc.paragraphs[3].justification, Justification::Right);
        assert_eq!(doc.paragraphs[3].right_margin, 40);

        assert_eq!(doc.layout.page_length, 66);
        assert_eq!(doc.layout.max_lines_per_page(), 54);
        assert_eq!(doc.layout.header, HeaderJustify::Center);
        assert!(doc.layout.header_bold);
        assert_eq!(doc.layout.word_count, 2);

        assert_eq!(doc.tabs.groups.len(), 1);
        assert_eq!(doc.tabs.next_stop(1, 11), Some(20));
    }

    #[test]
    fn test_paragraph_lookup_through_parsed_doc() {
        let doc = QuillParser::from_bytes(&sample()).unwrap().parse().unwrap();
        // Body text "ab" starts at buffer offset 4 (file offset 24).
        let rec = doc.paragraph_at(4).unwrap();
        assert_eq!(rec.left_margin, 4);
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut data = sample();
        data[2] = b'X';
        assert!(matches!(
            QuillParser::from_bytes(&data),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_truncated_text_area() {
        let mut data = sample();
        // Claim a text area far larger than the file.
        data[10..14].copy_from_slice(&10_000u32.to_be_bytes());
        let err = QuillParser::from_bytes(&data).unwrap().parse().unwrap_err();
        assert!(matches!(err, Error::Corrupted(_)));
    }

    #[test]
    fn test_truncated_paragraph_table() {
        let data = sample();
        let cut = HEADER_LEN + 8 + PARA_TABLE_HEAD_LEN + 14; // one record only
        let err = QuillParser::from_bytes(&data[..cut])
            .unwrap()
            .parse()
            .unwrap_err();
        assert!(matches!(err, Error::Corrupted(_)));
    }

    #[test]
    fn test_undersized_record_stride_rejected() {
        let mut data = sample();
        let head = HEADER_LEN + 8;
        data[head..head + 2].copy_from_slice(&4u16.to_be_bytes());
        let err = QuillParser::from_bytes(&data).unwrap().parse().unwrap_err();
        assert!(matches!(err, Error::Corrupted(_)));
    }
}
