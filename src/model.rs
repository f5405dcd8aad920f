//! Data model for parsed documentation: format-agnostic.

use serde::Serialize;
use std::path::Path;

/// Raw input for one source unit, before parsing.
#[derive(Debug, Clone)]
pub struct SourceText {
    /// Path as given on the command line
    pub file_name: String,
    pub text: String,
}

impl SourceText {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }
}

/// One parsed source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceUnit {
    /// File stem, e.g. "math" for "lib/math.js"
    pub name: String,
    pub file_name: String,
    pub segments: Vec<Segment>,
}

/// A comment paired with the code that follows it.
///
/// At least one of the two fields is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Segment {
    pub code: Option<CodeBlock>,
    pub comment: Option<ProcessedComment>,
}

impl Segment {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.comment.is_none()
    }
}

/// Trimmed code slice, ready for a highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodeBlock {
    code: String,
}

impl CodeBlock {
    /// Returns `None` if the slice is whitespace only.
    pub fn new(raw: &str) -> Option<Self> {
        let code = raw.trim();
        if code.is_empty() {
            None
        } else {
            Some(Self {
                code: code.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }
}

/// Comment body with decoration and tag lines removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessedComment {
    /// Markdown text
    pub body: String,
    pub tags: Vec<Tag>,
}

/// A single `@name {Type} text` annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    /// Brace-wrapped second token, braces removed
    pub type_name: Option<String>,
    /// Remaining tokens joined by single spaces
    pub text: String,
    /// HTML display form: `<strong>name</strong> <em>Type</em> text`
    pub display: String,
}

/// A source unit as placed in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentUnit {
    pub name: String,
    pub file_name: String,
    pub segments: Vec<Segment>,
}

impl From<SourceUnit> for DocumentUnit {
    fn from(unit: SourceUnit) -> Self {
        Self {
            name: unit.name,
            file_name: unit.file_name,
            segments: unit.segments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub files: Vec<DocumentUnit>,
}

/// Either a flat list of files or a list of titled sections, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentTree {
    Files(Vec<DocumentUnit>),
    Sections(Vec<Section>),
}

impl DocumentTree {
    /// All files in document order, regardless of grouping.
    pub fn files(&self) -> Vec<&DocumentUnit> {
        match self {
            DocumentTree::Files(files) => files.iter().collect(),
            DocumentTree::Sections(sections) => {
                sections.iter().flat_map(|s| s.files.iter()).collect()
            }
        }
    }
}

/// Everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    /// Markdown text
    pub description: String,
    pub tree: DocumentTree,
}

/// Derive the unit name from a path: "lib/math.js" → "math".
pub fn unit_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string())
}
