//! Paragraph layout: word-wrap scanners, the justifier and the page
//! composer.
//!
//! This is the heart of the crate. The scanners consume the raw control-
//! coded byte stream of one paragraph and produce one rendered line at a
//! time; the composer drives them across paragraphs while tracking page
//! position, and hands each finished line to an output sink.

mod compose;
mod justify;
mod scanner;

pub use compose::Composer;
pub use justify::stretch;
pub use scanner::{scan_center, scan_left, scan_right, Scan};
