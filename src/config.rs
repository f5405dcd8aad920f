//! Run configuration, validated before any input is read.

use crate::assemble::Layout;
use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Documentation";
pub const DEFAULT_FORMAT: &str = "html";
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Everything one run needs, built once by the front end.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    /// Markdown text rendered under the title
    pub description: String,
    pub format: String,
    /// Language label handed to the code highlighter
    pub language: String,
    pub outfile: PathBuf,
    /// Input patterns, grouped by section
    pub inputs: Layout<String>,
}

impl Config {
    /// Validate the section grouping and build the configuration.
    pub fn new(
        section_titles: Vec<String>,
        input_groups: Vec<Vec<String>>,
        outfile: PathBuf,
    ) -> Result<Self, ConfigError> {
        let inputs = Layout::new(section_titles, input_groups)?;
        Ok(Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            format: DEFAULT_FORMAT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            outfile,
            inputs,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
