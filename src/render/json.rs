//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the Page model directly. Comment bodies stay markdown and
//! code stays plain so a downstream pipeline can format them itself.

use crate::model::Page;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let mut out = serde_json::to_string_pretty(page).context("failed to serialize page")?;
        out.push('\n');
        Ok(out)
    }
}
