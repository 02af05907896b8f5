use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::language::LanguageClassifier;
use crate::utils::frontmatter::split;

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub title: String,
    pub path: PathBuf,
    pub text: String,
    /// Sorted and de-duplicated.
    pub tags: Vec<String>,
    /// Highlighting language, empty when unknown.
    pub syntax: String,
}

impl Sheet {
    /// Builds a sheet from already-loaded content.
    ///
    /// `path_tags` are tags inherited from where the sheet lives; they are
    /// merged with any `tags` in the frontmatter. The frontmatter `syntax`
    /// wins over a guess from the file extension.
    pub fn from_content(
        title: &str,
        path: &Path,
        content: &str,
        path_tags: &[String],
    ) -> Result<Self> {
        Self::from_content_with(title, path, content, path_tags, &LanguageClassifier::new())
    }

    pub fn from_content_with(
        title: &str,
        path: &Path,
        content: &str,
        path_tags: &[String],
        classifier: &LanguageClassifier,
    ) -> Result<Self> {
        let (frontmatter, body) = split(content)
            .into_result()
            .inspect_err(|err| warn!(path = %path.display(), error = %err, "unusable frontmatter"))
            .with_context(|| format!("Failed to parse frontmatter in '{}'", path.display()))?;

        let mut tags: Vec<String> = path_tags
            .iter()
            .chain(frontmatter.tags.iter())
            .filter(|tag| !tag.is_empty())
            .cloned()
            .collect();
        tags.sort();
        tags.dedup();

        let syntax = match frontmatter.syntax.filter(|syntax| !syntax.is_empty()) {
            Some(syntax) => syntax,
            None => {
                let guessed = classifier
                    .classify(&path.to_string_lossy())
                    .unwrap_or_default()
                    .to_string();
                debug!(path = %path.display(), syntax = %guessed, "syntax guessed from extension");
                guessed
            }
        };

        Ok(Sheet {
            title: title.to_string(),
            path: path.to_path_buf(),
            text: body.to_string(),
            tags,
            syntax,
        })
    }

    /// Title derived from the file name, without its final extension.
    pub fn title_from_path(path: &Path) -> Option<String> {
        path.file_stem()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
    }

    pub fn tagged(&self, needle: &str) -> bool {
        self.tags.binary_search_by(|tag| tag.as_str().cmp(needle)).is_ok()
    }
}
