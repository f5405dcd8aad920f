//! Segment splitter: alternates between code and `/* ... */` comments.
//!
//! Each comment is paired with the code that follows it, up to the next
//! comment. Code before the first comment becomes a segment of its own.
//! Comments opening with `/*!` are private: they still close the current
//! segment but attach no comment to the next one.

use crate::model::{CodeBlock, Segment};
use crate::parser::comment;

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";
const PRIVATE_MARKER: char = '!';

/// Split source text into ordered segments.
///
/// `file_name` is only used to report unterminated comments.
pub fn split(file_name: &str, input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = Segment::default();
    let mut rest = input;

    loop {
        let (code, after) = match rest.split_once(COMMENT_OPEN) {
            Some((code, after)) => (code, Some(after)),
            None => (rest, None),
        };

        if let Some(block) = CodeBlock::new(code) {
            current.code = Some(block);
        }
        if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }

        let Some(after) = after else {
            break;
        };

        let raw = match after.split_once(COMMENT_CLOSE) {
            Some((raw, remainder)) => {
                rest = remainder;
                raw
            }
            None => {
                log::warn!(
                    "{}: unterminated comment at byte {}, treating the rest of the file as its body",
                    file_name,
                    input.len() - after.len() - COMMENT_OPEN.len()
                );
                rest = "";
                after
            }
        };

        if !raw.starts_with(PRIVATE_MARKER) {
            current.comment = Some(comment::normalize(raw));
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn code(seg: &Segment) -> Option<&str> {
        seg.code.as_ref().map(|c| c.as_str())
    }

    fn body(seg: &Segment) -> Option<&str> {
        seg.comment.as_ref().map(|c| c.body.as_str())
    }

    #[test]
    fn empty_input() {
        assert!(split("t.js", "").is_empty());
        assert!(split("t.js", "  \n\t\n").is_empty());
    }

    #[test]
    fn code_without_comments_is_one_segment() {
        let segs = split("t.js", "var a = 1;\nvar b = 2;\n");
        assert_eq!(segs.len(), 1);
        assert_eq!(code(&segs[0]), Some("var a = 1;\nvar b = 2;"));
        assert!(segs[0].comment.is_none());
    }

    #[test]
    fn comment_pairs_with_following_code() {
        let input = "var x = 1;\n/**\n * Adds two numbers\n * @param {Number} a first\n * @return {Number} sum\n */\nfunction add(a,b){return a+b;}";
        let segs = split("t.js", input);
        assert_eq!(segs.len(), 2);

        assert_eq!(code(&segs[0]), Some("var x = 1;"));
        assert!(segs[0].comment.is_none());

        assert_eq!(code(&segs[1]), Some("function add(a,b){return a+b;}"));
        let comment = segs[1].comment.as_ref().unwrap();
        assert_eq!(comment.body, "Adds two numbers");
        assert_eq!(comment.tags.len(), 2);
        assert_eq!(comment.tags[0].name, "param");
        assert_eq!(comment.tags[0].type_name.as_deref(), Some("Number"));
        assert_eq!(comment.tags[0].text, "a first");
        assert_eq!(comment.tags[1].name, "return");
        assert_eq!(comment.tags[1].type_name.as_deref(), Some("Number"));
        assert_eq!(comment.tags[1].text, "sum");
    }

    #[test]
    fn consecutive_comments_are_not_merged() {
        let segs = split("t.js", "/* one */\n\n/* two */\ncode();");
        assert_eq!(segs.len(), 2);
        assert_eq!(body(&segs[0]), Some("one"));
        assert_eq!(code(&segs[0]), None);
        assert_eq!(body(&segs[1]), Some("two"));
        assert_eq!(code(&segs[1]), Some("code();"));
    }

    #[test]
    fn trailing_comment_without_code() {
        let segs = split("t.js", "a();\n/* the end */\n");
        assert_eq!(segs.len(), 2);
        assert_eq!(code(&segs[1]), None);
        assert_eq!(body(&segs[1]), Some("the end"));
    }

    #[test]
    fn private_comment_alone_yields_nothing() {
        assert!(split("t.js", "/*! licence */").is_empty());
        assert!(split("t.js", "\n/*!\n * secret\n */\n").is_empty());
    }

    #[test]
    fn private_comment_keeps_surrounding_code() {
        let segs = split("t.js", "a();\n/*! hidden */\nb();");
        assert_eq!(segs.len(), 2);
        assert_eq!(code(&segs[0]), Some("a();"));
        assert_eq!(code(&segs[1]), Some("b();"));
        assert!(segs.iter().all(|s| s.comment.is_none()));
    }

    #[test]
    fn private_comment_closes_the_previous_comment() {
        let segs = split("t.js", "/* doc */\n/*! hidden */\nb();");
        assert_eq!(segs.len(), 2);
        assert_eq!(body(&segs[0]), Some("doc"));
        assert_eq!(code(&segs[0]), None);
        assert_eq!(body(&segs[1]), None);
        assert_eq!(code(&segs[1]), Some("b();"));
    }

    #[test]
    fn empty_comment_is_documented() {
        let segs = split("t.js", "/**/x();");
        assert_eq!(segs.len(), 1);
        assert_eq!(body(&segs[0]), Some(""));
        assert_eq!(code(&segs[0]), Some("x();"));
    }

    #[test]
    fn unterminated_comment_takes_the_rest() {
        let segs = split("t.js", "a();\n/* dangling\n * @param x\n");
        assert_eq!(segs.len(), 2);
        let comment = segs[1].comment.as_ref().unwrap();
        assert_eq!(comment.body, "dangling");
        assert_eq!(comment.tags[0].name, "param");
        assert_eq!(code(&segs[1]), None);
    }

    #[test]
    fn open_marker_at_end_of_input() {
        let segs = split("t.js", "a();\n/*");
        assert_eq!(segs.len(), 2);
        assert_eq!(code(&segs[0]), Some("a();"));
        assert_eq!(body(&segs[1]), Some(""));
    }

    #[test]
    fn unterminated_private_comment_stays_private() {
        let segs = split("t.js", "a();\n/*! no end");
        assert_eq!(segs.len(), 1);
        assert!(segs[0].comment.is_none());
    }

    #[test]
    fn segments_preserve_source_order() {
        let input = "c0\n/* k1 */\nc1\n/* k2 */\n/* k3 */\nc3\n/*! p */\nc4\n/* k5 */";
        let segs = split("t.js", input);

        let mut spans = Vec::new();
        for seg in &segs {
            if let Some(b) = body(seg) {
                spans.push(b.to_string());
            }
            if let Some(c) = code(seg) {
                spans.push(c.to_string());
            }
        }
        assert_eq!(spans, ["c0", "k1", "c1", "k2", "k3", "c3", "c4", "k5"]);

        let mut last = 0;
        for span in &spans {
            let pos = input[last..].find(span.as_str()).unwrap() + last;
            assert!(pos >= last);
            last = pos + span.len();
        }
    }
}
