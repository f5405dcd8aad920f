//! Parser module: segment splitting, comment normalization, tag extraction.

pub mod comment;
pub mod segment;
pub mod tag;

use crate::model::{unit_name, SourceText, SourceUnit};

/// Parse one source text into a unit of ordered segments.
pub fn parse_source(source: &SourceText) -> SourceUnit {
    let segments = segment::split(&source.file_name, &source.text);
    log::debug!(
        "{}: {} segment(s), {} documented",
        source.file_name,
        segments.len(),
        segments.iter().filter(|s| s.comment.is_some()).count()
    );
    SourceUnit {
        name: unit_name(&source.file_name),
        file_name: source.file_name.clone(),
        segments,
    }
}
