//! HTML renderer: standalone page with a file index and one
//! comment/code row per segment.

use crate::model::*;
use crate::render::commonmark::render_markdown;
use crate::render::{html_escape, Asset, Highlighter, Renderer};
use crate::toc;
use anyhow::Result;

const STYLESHEET: &str = "css/oxo.css";

const STYLESHEET_CONTENTS: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
header { padding: 2em 2em 1em; border-bottom: 1px solid #ddd; }
nav { padding: 1em 2em; background: #fafafa; border-bottom: 1px solid #ddd; }
nav h3 { margin: 0.5em 0 0.25em; font-size: 0.9em; text-transform: uppercase; }
nav ul { margin: 0; padding-left: 1.25em; }
.file > h2 { padding: 1em 2em 0; margin: 0; }
.file-name { padding: 0 2em; color: #777; font-size: 0.85em; }
.segment { display: flex; border-bottom: 1px solid #eee; }
.comment { flex: 0 0 40%; padding: 0.5em 2em; box-sizing: border-box; }
.code { flex: 1; min-width: 0; background: #f7f7f7; padding: 0.5em 1em; }
.code pre { margin: 0; overflow-x: auto; }
.tags { list-style: none; padding: 0; font-size: 0.9em; }
.tags strong { color: #8a3b12; }
.tags em { color: #1b5e8a; font-style: normal; }
";

pub struct HtmlRenderer {
    highlighter: Box<dyn Highlighter>,
}

impl HtmlRenderer {
    pub fn new(highlighter: Box<dyn Highlighter>) -> Self {
        Self { highlighter }
    }

    fn render_file(&self, out: &mut String, file: &DocumentUnit, anchor: &str) {
        out.push_str(&format!(
            "<section class=\"file\" id=\"{}\">\n<h2>{}</h2>\n<div class=\"file-name\">{}</div>\n",
            html_escape(anchor),
            html_escape(&file.name),
            html_escape(&file.file_name)
        ));
        for segment in &file.segments {
            self.render_segment(out, segment);
        }
        out.push_str("</section>\n");
    }

    fn render_segment(&self, out: &mut String, segment: &Segment) {
        out.push_str("<div class=\"segment\">\n<div class=\"comment\">\n");
        if let Some(ref comment) = segment.comment {
            out.push_str(&render_markdown(&comment.body));
            if !comment.tags.is_empty() {
                out.push_str("<ul class=\"tags\">\n");
                for tag in &comment.tags {
                    out.push_str(&format!("  <li>{}</li>\n", tag.display));
                }
                out.push_str("</ul>\n");
            }
        }
        out.push_str("</div>\n<div class=\"code\">\n");
        if let Some(ref code) = segment.code {
            out.push_str(&self.highlighter.highlight(code.as_str()));
            out.push('\n');
        }
        out.push_str("</div>\n</div>\n");
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&page.title)));
        out.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", STYLESHEET));
        out.push_str("</head>\n<body>\n");

        // Header
        out.push_str("<header>\n");
        out.push_str(&format!("<h1>{}</h1>\n", html_escape(&page.title)));
        out.push_str(&render_markdown(&page.description));
        out.push_str("</header>\n");

        let files = page.tree.files();
        let anchors = toc::unique_slugs(files.iter().map(|f| f.name.as_str()));

        // Index
        out.push_str("<nav>\n");
        match page.tree {
            DocumentTree::Files(_) => render_index(&mut out, &files, &anchors),
            DocumentTree::Sections(ref sections) => {
                let mut offset = 0;
                for section in sections {
                    let count = section.files.len();
                    out.push_str(&format!("<h3>{}</h3>\n", html_escape(&section.title)));
                    render_index(
                        &mut out,
                        &files[offset..offset + count],
                        &anchors[offset..offset + count],
                    );
                    offset += count;
                }
            }
        }
        out.push_str("</nav>\n");

        // Files
        out.push_str("<main>\n");
        for (file, anchor) in files.iter().zip(&anchors) {
            self.render_file(&mut out, file, anchor);
        }
        out.push_str("</main>\n");

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn assets(&self) -> Vec<Asset> {
        vec![Asset {
            path: STYLESHEET,
            contents: STYLESHEET_CONTENTS,
        }]
    }
}

fn render_index(out: &mut String, files: &[&DocumentUnit], anchors: &[String]) {
    out.push_str("<ul>\n");
    for (file, anchor) in files.iter().zip(anchors) {
        out.push_str(&format!(
            "  <li><a href=\"#{}\">{}</a></li>\n",
            html_escape(anchor),
            html_escape(&file.name)
        ));
    }
    out.push_str("</ul>\n");
}
