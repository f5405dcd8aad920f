//! Markdown renderer.
//!
//! Comment bodies are already markdown and are written verbatim; tags
//! become a bullet list and code goes into fenced blocks.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer {
    language: String,
}

impl MarkdownRenderer {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    fn render_file(&self, file: &DocumentUnit, level: usize) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("{} {}\n", "#".repeat(level), file.name));
        lines.push(format!("`{}`\n", file.file_name));

        for segment in &file.segments {
            if let Some(ref comment) = segment.comment {
                if !comment.body.is_empty() {
                    lines.push(comment.body.clone());
                    lines.push(String::new());
                }
                for tag in &comment.tags {
                    lines.push(format!("* {}", render_tag(tag)));
                }
                if !comment.tags.is_empty() {
                    lines.push(String::new());
                }
            }
            if let Some(ref code) = segment.code {
                lines.push(format!("```{}", self.language));
                lines.push(code.as_str().to_string());
                lines.push("```\n".to_string());
            }
        }

        lines.join("\n")
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", page.title));
        if !page.description.is_empty() {
            output.push_str(&page.description);
            output.push_str("\n\n");
        }

        let anchors = heading_anchors(page);
        output.push_str("## Index\n\n");

        match page.tree {
            DocumentTree::Files(ref files) => {
                for (file, anchor) in files.iter().zip(&anchors) {
                    output.push_str(&toc::render_toc_item(&file.name, anchor));
                    output.push('\n');
                }
                output.push('\n');
                for file in files {
                    output.push_str(&self.render_file(file, 2));
                    output.push('\n');
                }
            }
            DocumentTree::Sections(ref sections) => {
                for (section, anchor) in sections.iter().zip(&anchors) {
                    output.push_str(&toc::render_toc_item(&section.title, anchor));
                    output.push('\n');
                }
                output.push('\n');
                for section in sections {
                    output.push_str(&format!("## {}\n\n", section.title));
                    for file in &section.files {
                        output.push_str(&self.render_file(file, 3));
                        output.push('\n');
                    }
                }
            }
        }

        Ok(output)
    }
}

/// Anchors for the index entries: file headings in flat mode, section
/// headings otherwise. Slugs are made unique across every heading on the
/// page so repeated names link to their own heading.
fn heading_anchors(page: &Page) -> Vec<String> {
    let mut headings: Vec<&str> = vec![page.title.as_str(), "Index"];
    let mut linked: Vec<usize> = Vec::new();
    match page.tree {
        DocumentTree::Files(ref files) => {
            for file in files {
                linked.push(headings.len());
                headings.push(&file.name);
            }
        }
        DocumentTree::Sections(ref sections) => {
            for section in sections {
                linked.push(headings.len());
                headings.push(&section.title);
                headings.extend(section.files.iter().map(|f| f.name.as_str()));
            }
        }
    }
    let slugs = toc::unique_slugs(headings);
    linked.into_iter().map(|i| slugs[i].clone()).collect()
}

/// `**param** *Number* a first`
fn render_tag(tag: &Tag) -> String {
    let mut parts = vec![format!("**{}**", tag.name)];
    if let Some(ref ty) = tag.type_name {
        parts.push(format!("*{}*", ty));
    }
    if !tag.text.is_empty() {
        parts.push(tag.text.clone());
    }
    parts.join(" ")
}
