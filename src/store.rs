//! Storage collaborator
//!
//! The pipeline only needs two things from a store: whether it already holds
//! committed data, and the ability to accept one finished experiment graph
//! as a single unit. [`MemoryStore`] backs tests and embedders;
//! [`JsonFileStore`] persists the graph as one JSON document with an atomic
//! write-then-rename commit.

use std::path::{Path, PathBuf};

use crate::model::Experiment;
use crate::{Error, Result};

/// Durable destination for a finished experiment graph.
///
/// Commit is all-or-nothing; there is no partial-commit API and the pipeline
/// performs no rollback of its own.
pub trait ExperimentStore {
    /// Whether at least one previously committed experiment exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn has_existing_data(&self) -> Result<bool>;

    /// Accept a fully validated, fully rendered experiment graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommitFailed`] when the graph cannot be persisted;
    /// on failure nothing is retained.
    fn commit(&mut self, experiment: Experiment) -> Result<()>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    experiments: Vec<Experiment>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already reports data present.
    ///
    /// Useful for exercising the one-shot import guard.
    #[must_use]
    pub fn with_committed(experiment: Experiment) -> Self {
        Self {
            experiments: vec![experiment],
        }
    }

    /// Whether the store holds no experiments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Number of committed experiments.
    #[must_use]
    pub fn experiment_count(&self) -> usize {
        self.experiments.len()
    }

    /// Committed experiments, in commit order.
    #[must_use]
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }
}

impl ExperimentStore for MemoryStore {
    fn has_existing_data(&self) -> Result<bool> {
        Ok(!self.experiments.is_empty())
    }

    fn commit(&mut self, experiment: Experiment) -> Result<()> {
        self.experiments.push(experiment);
        Ok(())
    }
}

/// File-backed store writing the graph as one JSON document.
///
/// "Already has data" means the target file exists. Commit serializes the
/// whole graph, writes it to a temporary file in the target's directory and
/// renames it into place, so a failed commit never leaves a partial file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store targeting `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExperimentStore for JsonFileStore {
    fn has_existing_data(&self) -> Result<bool> {
        Ok(self.path.exists())
    }

    fn commit(&mut self, experiment: Experiment) -> Result<()> {
        let json =
            serde_json::to_vec_pretty(&experiment).map_err(|e| Error::CommitFailed {
                reason: format!("serialization failed: {e}"),
            })?;

        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
            .map_err(|e| Error::CommitFailed {
                reason: format!("cannot create temporary file: {e}"),
            })?;
        std::io::Write::write_all(&mut tmp, &json).map_err(|e| Error::CommitFailed {
            reason: format!("cannot write temporary file: {e}"),
        })?;
        tmp.persist(&self.path).map_err(|e| Error::CommitFailed {
            reason: format!("cannot move graph into place: {e}"),
        })?;
        Ok(())
    }
}
