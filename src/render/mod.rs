//! Renderer module: trait-based format dispatch.

pub mod commonmark;
pub mod highlight;
pub mod html;
pub mod json;
pub mod markdown;

use crate::model::Page;
use anyhow::{anyhow, Result};

pub use crate::escape::html_escape;
pub use highlight::{Highlighter, PlainHighlighter};

/// A support file written next to the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Path relative to the output file's directory
    pub path: &'static str,
    pub contents: &'static str,
}

/// Trait for rendering a Page into a specific output format.
pub trait Renderer {
    fn render(&self, page: &Page) -> Result<String>;

    fn assets(&self) -> Vec<Asset> {
        Vec::new()
    }
}

/// Create a renderer for the given format name.
///
/// `language` labels code blocks for the highlighter.
pub fn create_renderer(format: &str, language: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer::new(Box::new(
            PlainHighlighter::new(language),
        )))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(language))),
        _ => Err(anyhow!(
            "unknown format: {}. Use html, json, or markdown",
            format
        )),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::assemble::{assemble, Layout};
    use crate::model::{Page, SourceText};

    pub const ADD_JS: &str = "var x = 1;\n/**\n * Adds two numbers\n * @param {Number} a first\n * @return {Number} sum\n */\nfunction add(a,b){return a+b;}";

    pub fn flat_page() -> Page {
        Page {
            title: "Math".to_string(),
            description: "Small *helpers*.".to_string(),
            tree: assemble(Layout::Files(vec![SourceText::new("lib/add.js", ADD_JS)])),
        }
    }

    pub fn sectioned_page() -> Page {
        let layout = Layout::new(
            vec!["Core".to_string(), "Extras".to_string()],
            vec![
                vec![SourceText::new("lib/add.js", ADD_JS)],
                vec![SourceText::new("lib/sub.js", "/* Subtracts */\nfunction sub(a,b){}")],
            ],
        )
        .unwrap();
        Page {
            title: "Math".to_string(),
            description: String::new(),
            tree: assemble(layout),
        }
    }
}
