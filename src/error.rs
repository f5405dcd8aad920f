use thiserror::Error;

/// Caller configuration errors. Raised before any input is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{labels} section title(s) given for {groups} input group(s)")]
    SectionCountMismatch { labels: usize, groups: usize },

    #[error("no input files given")]
    NoInputs,
}
