//! JSON dump of the parsed document structures.
//!
//! Unlike the text and HTML renderers this bypasses the layout engine
//! and serializes the decoded tables directly, which is what you want
//! when inspecting a container rather than reading its content.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a parsed document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutParameters, TabTable};

    fn doc() -> Document {
        Document {
            text: b"\x00\x00hello\x00\x0e".to_vec(),
            paragraphs: Vec::new(),
            tabs: TabTable::new(),
            layout: LayoutParameters {
                page_length: 66,
                word_count: 1,
                ..LayoutParameters::default()
            },
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&doc(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"page_length\": 66"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&doc(), JsonFormat::Compact).unwrap();
        assert!(json.contains("\"word_count\":1"));
        assert!(!json.contains('\n'));
    }
}
