//! Frontmatter splitting and syntax-language detection for cheatsheets.
//!
//! A cheatsheet may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! syntax: bash
//! tags: [archive]
//! ---
//! tar -xvf archive.tar
//! ```
//!
//! [`split`] separates that block from the body, and [`classify`] guesses a
//! highlighting language from a file extension when the block names none.

pub mod config;
pub mod constants;
pub mod error;
pub mod language;
pub mod logger;
pub mod models;
pub mod utils;

pub use config::{load_config, Config};
pub use error::FrontmatterError;
pub use language::{classify, LanguageClassifier};
pub use models::{Frontmatter, Sheet};
pub use utils::frontmatter::{
    parse_frontmatter, parse_frontmatter_with, split, split_frontmatter, MetadataDecoder,
    ParsedContent, YamlDecoder,
};
