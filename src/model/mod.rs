//! Data model for decoded Quill documents.

pub mod codes;
mod document;
mod layout;
mod paragraph;
mod tabs;

pub use document::{Document, FILE_HEADER_LEN};
pub use layout::{HeaderJustify, LayoutParameters};
pub use paragraph::{Justification, ParagraphRecord};
pub use tabs::{TabGroup, TabKind, TabStop, TabTable};
