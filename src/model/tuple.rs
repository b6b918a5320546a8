//! Snippet tuple - one subdirectory's worth of parallel snippets

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Snippet;

/// One subdirectory holding one snippet per declared category, representing
/// parallel variants of the same underlying example.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnippetTuple {
    source_path: PathBuf,
    language: Option<String>,
    snippets: Vec<Snippet>,
}

impl SnippetTuple {
    /// Create a tuple rooted at `source_path` with an optional tuple-level
    /// language override.
    #[must_use]
    pub fn new(source_path: impl Into<PathBuf>, language: Option<String>) -> Self {
        Self {
            source_path: source_path.into(),
            language: normalize_hint(language),
            snippets: Vec::new(),
        }
    }

    /// Subdirectory location; the tuple's identity.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Tuple-level language override, applies to every snippet in the tuple.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Snippets in the order the directory listing produced them.
    #[must_use]
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Derived category labels, one per snippet, in listing order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.snippets.iter().map(Snippet::category).collect()
    }

    pub(crate) fn push_snippet(&mut self, snippet: Snippet) {
        self.snippets.push(snippet);
    }

    pub(crate) fn snippets_mut(&mut self) -> &mut [Snippet] {
        &mut self.snippets
    }
}

fn normalize_hint(hint: Option<String>) -> Option<String> {
    hint.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_categories_in_listing_order() {
        let mut tuple = SnippetTuple::new("exp/t1", None);
        tuple.push_snippet(Snippet::new("b", "exp/t1/b.py"));
        tuple.push_snippet(Snippet::new("a", "exp/t1/a.py"));
        assert_eq!(tuple.categories(), vec!["b", "a"]);
    }

    #[test]
    fn test_blank_language_hint_is_dropped() {
        let tuple = SnippetTuple::new("exp/t1", Some("   ".to_string()));
        assert!(tuple.language().is_none());
    }
}
