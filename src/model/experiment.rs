//! Experiment - root entity of one import run

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

use super::SnippetTuple;

/// The top-level configuration and accumulated result of one import run.
///
/// Built once per run from the experiment descriptor; tuples are appended
/// during the scan and the whole graph is handed to storage as one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experiment {
    categories: Vec<String>,
    default_language: Option<String>,
    tuples: Vec<SnippetTuple>,
    imported_at: DateTime<Utc>,
}

impl Experiment {
    /// Create an experiment from its declared schema.
    ///
    /// Category order is preserved as declared; comparison against tuples is
    /// always set-based.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewCategories`] for fewer than two categories and
    /// [`Error::DuplicateCategory`] when a label repeats. `descriptor_path`
    /// only feeds the duplicate-category diagnostic.
    pub fn new(
        categories: Vec<String>,
        default_language: Option<String>,
        descriptor_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        if categories.len() < 2 {
            return Err(Error::TooFewCategories {
                found: categories.len(),
            });
        }
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].contains(category) {
                return Err(Error::DuplicateCategory {
                    dir: descriptor_path.into(),
                    category: category.clone(),
                });
            }
        }
        Ok(Self {
            categories,
            default_language: default_language.filter(|s| !s.trim().is_empty()),
            tuples: Vec::new(),
            imported_at: Utc::now(),
        })
    }

    /// Declared category labels, in descriptor order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Experiment-wide default language, the lowest-priority hint.
    #[must_use]
    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Discovered tuples, in scan order; empty until scanning completes.
    #[must_use]
    pub fn tuples(&self) -> &[SnippetTuple] {
        &self.tuples
    }

    /// When this import run started.
    #[must_use]
    pub const fn imported_at(&self) -> DateTime<Utc> {
        self.imported_at
    }

    /// Total snippet count across all tuples.
    #[must_use]
    pub fn snippet_count(&self) -> usize {
        self.tuples.iter().map(|t| t.snippets().len()).sum()
    }

    pub(crate) fn push_tuple(&mut self, tuple: SnippetTuple) {
        self.tuples.push(tuple);
    }

    pub(crate) fn tuples_mut(&mut self) -> &mut [SnippetTuple] {
        &mut self.tuples
    }
}
