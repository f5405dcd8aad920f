//! `@tag` line parsing.
//!
//! `@param {Number} a first value` becomes a [`Tag`] named `param` with
//! type `Number`, text `a first value` and display
//! `<strong>param</strong> <em>Number</em> a first value`.

use crate::model::Tag;
use crate::escape::html_escape;

/// Parse a single tag line. The line is expected to start with `@name`.
pub fn parse(line: &str) -> Tag {
    let mut tokens = line.split_whitespace();

    let name = tokens
        .next()
        .map(|t| t.strip_prefix('@').unwrap_or(t))
        .unwrap_or_default()
        .to_string();

    let mut rest: Vec<&str> = tokens.collect();
    let type_name = match rest.first() {
        Some(tok) if tok.starts_with('{') => {
            let inner = strip_braces(tok).to_string();
            rest.remove(0);
            Some(inner)
        }
        _ => None,
    };
    let text = rest.join(" ");

    let mut parts = vec![format!("<strong>{}</strong>", html_escape(&name))];
    if let Some(ref ty) = type_name {
        parts.push(format!("<em>{}</em>", html_escape(ty)));
    }
    parts.extend(rest.iter().map(|t| html_escape(t)));

    Tag {
        name,
        type_name,
        text,
        display: parts.join(" "),
    }
}

/// Drop the leading `{` and whatever the last character is.
/// The closing brace is not checked.
fn strip_braces(token: &str) -> &str {
    let inner = &token[1..];
    match inner.char_indices().last() {
        Some((i, _)) => &inner[..i],
        None => "",
    }
}
