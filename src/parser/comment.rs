//! Comment body normalization.
//!
//! Strips the ` * ` decoration from the start of each line, then pulls
//! every line starting with `@word` out of the body into a [`Tag`].

use crate::model::{ProcessedComment, Tag};
use crate::parser::tag;
use regex::Regex;
use std::sync::LazyLock;

static RE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ *\* ?").unwrap());

static RE_TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^@\w+.*").unwrap());

/// Normalize a raw comment body (the text between `/*` and `*/`).
pub fn normalize(raw: &str) -> ProcessedComment {
    // Decoration must go first so tag lines start at column zero
    let stripped = RE_DECORATION.replace_all(raw, "");

    // Drop each matched span in place
    let mut body = String::with_capacity(stripped.len());
    let mut tags: Vec<Tag> = Vec::new();
    let mut last = 0;
    for m in RE_TAG_LINE.find_iter(&stripped) {
        body.push_str(&stripped[last..m.start()]);
        last = m.end();
        tags.push(tag::parse(m.as_str()));
    }
    body.push_str(&stripped[last..]);

    ProcessedComment {
        body: body.trim().to_string(),
        tags,
    }
}
