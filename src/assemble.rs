//! Document assembly: group parsed units into files or titled sections.

use crate::error::ConfigError;
use crate::model::{DocumentTree, DocumentUnit, Section, SourceText};
use crate::parser::parse_source;

/// Validated grouping of inputs.
///
/// Built before any input is read, so a bad grouping fails the run
/// without doing any work. `T` is whatever identifies an input at the
/// current stage: a path, then a loaded [`SourceText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout<T> {
    Files(Vec<T>),
    Sections(Vec<(String, Vec<T>)>),
}

impl<T> Layout<T> {
    /// Pair section labels with input groups.
    ///
    /// Without labels every group is flattened into a single file list.
    /// With labels there must be exactly one per group.
    pub fn new(labels: Vec<String>, groups: Vec<Vec<T>>) -> Result<Self, ConfigError> {
        if groups.iter().all(Vec::is_empty) {
            return Err(ConfigError::NoInputs);
        }
        if labels.is_empty() {
            return Ok(Layout::Files(groups.into_iter().flatten().collect()));
        }
        if labels.len() != groups.len() {
            return Err(ConfigError::SectionCountMismatch {
                labels: labels.len(),
                groups: groups.len(),
            });
        }
        Ok(Layout::Sections(labels.into_iter().zip(groups).collect()))
    }

    /// Map every input, keeping the grouping. Stops at the first error.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<Layout<U>, E> {
        self.try_flat_map(|item| f(item).map(|u| vec![u]))
    }

    /// Replace every input with zero or more outputs, keeping the grouping.
    pub fn try_flat_map<U, E>(
        self,
        mut f: impl FnMut(T) -> Result<Vec<U>, E>,
    ) -> Result<Layout<U>, E> {
        let mut expand = |items: Vec<T>| -> Result<Vec<U>, E> {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.extend(f(item)?);
            }
            Ok(out)
        };
        Ok(match self {
            Layout::Files(items) => Layout::Files(expand(items)?),
            Layout::Sections(sections) => {
                let mut out = Vec::with_capacity(sections.len());
                for (label, items) in sections {
                    out.push((label, expand(items)?));
                }
                Layout::Sections(out)
            }
        })
    }

    pub fn len(&self) -> usize {
        match self {
            Layout::Files(items) => items.len(),
            Layout::Sections(sections) => sections.iter().map(|(_, items)| items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse every source and compose the document tree.
///
/// Units are parsed independently; segment content is passed through untouched.
pub fn assemble(layout: Layout<SourceText>) -> DocumentTree {
    let unit = |source: SourceText| DocumentUnit::from(parse_source(&source));
    match layout {
        Layout::Files(sources) => DocumentTree::Files(sources.into_iter().map(unit).collect()),
        Layout::Sections(sections) => DocumentTree::Sections(
            sections
                .into_iter()
                .map(|(title, sources)| Section {
                    title,
                    files: sources.into_iter().map(unit).collect(),
                })
                .collect(),
        ),
    }
}
