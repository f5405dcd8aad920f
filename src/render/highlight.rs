//! Code presentation.

use crate::render::html_escape;

/// Turns a plain code string into presentation-ready HTML.
pub trait Highlighter {
    fn highlight(&self, code: &str) -> String;
}

/// Escapes the code and labels it with a `language-*` class so a
/// client-side highlighter can pick it up.
#[derive(Debug, Clone)]
pub struct PlainHighlighter {
    language: String,
}

impl PlainHighlighter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str) -> String {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            html_escape(&self.language),
            html_escape(code)
        )
    }
}
