//! Import orchestration
//!
//! Runs the phases in order: one-shot guard, scan + validate, load + render,
//! commit. The guard runs before any filesystem work so a doomed run wastes
//! nothing; the guard check and the final commit form the consistency
//! boundary: nothing else may write through the same store during a run.

use std::path::Path;

use tracing::info;

use crate::config::ImportConfig;
use crate::fs::CorpusFs;
use crate::model::Experiment;
use crate::render::{ContentLoader, Highlighter};
use crate::scanner::CorpusScanner;
use crate::store::ExperimentStore;
use crate::{Error, Result};

/// Summary of a completed import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of snippet tuples committed
    pub tuples: usize,
    /// Total number of snippets committed
    pub snippets: usize,
}

/// The whole import pipeline behind one entry point.
pub struct ImportPipeline<F, H> {
    fs: F,
    highlighter: H,
    config: ImportConfig,
}

impl<F: CorpusFs, H: Highlighter> ImportPipeline<F, H> {
    /// Assemble a pipeline from its collaborators.
    #[must_use]
    pub fn new(fs: F, highlighter: H, config: ImportConfig) -> Self {
        Self {
            fs,
            highlighter,
            config,
        }
    }

    /// Import the experiment rooted at `root` into `store`.
    ///
    /// Either the store receives one fully validated, fully rendered graph
    /// or it receives nothing; there are no partial writes.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyImported`] when the store reports existing data
    /// (checked before any filesystem access), plus every scanner, loader and
    /// store failure mode, all fatal to the run.
    pub fn run<S: ExperimentStore>(&self, root: &Path, store: &mut S) -> Result<ImportReport> {
        if store.has_existing_data()? {
            return Err(Error::AlreadyImported);
        }

        info!(root = %root.display(), "importing experiment");
        let mut experiment = self.scan(root)?;
        info!(
            tuples = experiment.tuples().len(),
            snippets = experiment.snippet_count(),
            "corpus scanned, loading contents"
        );

        ContentLoader::new(&self.fs, &self.highlighter).load(&mut experiment)?;

        let report = ImportReport {
            tuples: experiment.tuples().len(),
            snippets: experiment.snippet_count(),
        };
        store.commit(experiment)?;
        info!(
            tuples = report.tuples,
            snippets = report.snippets,
            "experiment imported"
        );
        Ok(report)
    }

    /// Scan and validate without loading contents or touching the store.
    ///
    /// Exposed for embedders that want the validated graph itself.
    ///
    /// # Errors
    ///
    /// Same failure modes as the scan phase of [`Self::run`].
    pub fn scan(&self, root: &Path) -> Result<Experiment> {
        CorpusScanner::new(&self.fs, &self.config).scan(root)
    }
}
