//! oxo: generate documentation from block comments in source files.
//!
//! Source text is split into segments, each pairing a `/* ... */` comment
//! with the code that follows it. Comment bodies are stripped of their
//! leading `*` decoration and `@tag` lines are pulled out into [`model::Tag`]s.
//! The parsed units are assembled into a [`model::DocumentTree`] which a
//! [`render::Renderer`] turns into a page.

pub mod assemble;
pub mod config;
pub mod error;
pub mod escape;
pub mod model;
pub mod parser;
pub mod render;
pub mod toc;

pub use assemble::{assemble, Layout};
pub use config::Config;
pub use error::ConfigError;
pub use model::{DocumentTree, Page, SourceText, SourceUnit};
pub use parser::parse_source;
