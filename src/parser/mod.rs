//! Quill container parsing.

mod container;

pub use container::QuillParser;
