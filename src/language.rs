//! Syntax-highlighting language detection from file extensions.

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::Config;
use crate::constants::EXTENSION_LANGUAGES;

/// Extension of the final path segment: everything from its last `.`
/// onward, dot included. Empty when the segment has no dot.
///
/// Dotfiles keep their whole name (`.bashrc` yields `.bashrc`).
pub fn extension_of(path: &str) -> &str {
    let file_name = path.rsplit(std::path::is_separator).next().unwrap_or(path);
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx..],
        None => "",
    }
}

/// Language for an extension in the built-in table (case-sensitive).
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    EXTENSION_LANGUAGES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}

/// Best-guess highlighting language for `path`, `None` when unrecognized.
pub fn classify(path: &str) -> Option<&'static str> {
    language_for_extension(extension_of(path))
}

/// Classifier with user-supplied mappings layered over the built-in table.
#[derive(Debug, Clone, Default)]
pub struct LanguageClassifier {
    overrides: BTreeMap<String, String>,
    ignore_case: bool,
}

impl LanguageClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let ignore_case = config.ignore_extension_case.unwrap_or(false);
        let overrides = config
            .extensions
            .iter()
            .flatten()
            .map(|(ext, language)| {
                let ext = if ext.starts_with('.') {
                    ext.clone()
                } else {
                    format!(".{ext}")
                };
                let ext = if ignore_case { ext.to_lowercase() } else { ext };
                (ext, language.clone())
            })
            .collect();

        Self {
            overrides,
            ignore_case,
        }
    }

    pub fn classify(&self, path: &str) -> Option<&str> {
        let extension = extension_of(path);
        if extension.is_empty() {
            return None;
        }

        let extension = if self.ignore_case {
            extension.to_lowercase()
        } else {
            extension.to_string()
        };

        let language = self
            .overrides
            .get(&extension)
            .map(String::as_str)
            .or_else(|| language_for_extension(&extension));

        if language.is_none() {
            debug!(path, extension = %extension, "no language for extension");
        }
        language
    }
}
