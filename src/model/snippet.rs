//! Snippet - one labeled source file and its rendered form

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One labeled source file inside a snippet tuple.
///
/// Created during tuple discovery with only path and category populated;
/// content fields are filled by the loading phase and never mutated after.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snippet {
    category: String,
    source_path: PathBuf,
    language: Option<String>,
    raw_content: Option<String>,
    rendered_content: Option<String>,
}

impl Snippet {
    /// Create a snippet with only its identity populated.
    #[must_use]
    pub fn new(category: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            category: category.into(),
            source_path: source_path.into(),
            language: None,
            raw_content: None,
            rendered_content: None,
        }
    }

    /// Category label, derived from the file's base name with the
    /// extension stripped.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Original file location.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Snippet-level language override, the highest-priority hint.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Set the snippet-level language override.
    ///
    /// Nothing in the on-disk corpus format populates this today; embedders
    /// constructing graphs programmatically may.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = Some(language.into());
    }

    /// Raw file contents, absent until the loading phase runs.
    #[must_use]
    pub fn raw_content(&self) -> Option<&str> {
        self.raw_content.as_deref()
    }

    /// Highlighted markup, absent until the loading phase runs.
    #[must_use]
    pub fn rendered_content(&self) -> Option<&str> {
        self.rendered_content.as_deref()
    }

    /// Whether the loading phase has run for this snippet.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.rendered_content.is_some()
    }

    pub(crate) fn attach_content(&mut self, raw: String, rendered: String) {
        self.raw_content = Some(raw);
        self.rendered_content = Some(rendered);
    }
}
