//! Error types for the snippet-corpus import pipeline
//!
//! Every error is fatal to the current run: there is no local recovery or
//! retry. The pipeline is safe to re-run from scratch once the underlying
//! cause is fixed; the `AlreadyImported` guard makes storage-side re-runs
//! explicit instead of silently duplicating data.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Import pipeline error types
#[derive(Error, Debug)]
pub enum Error {
    /// Descriptor file does not exist
    #[error("descriptor file not found: {}", path.display())]
    ConfigNotFound {
        /// Path that was expected to hold the descriptor
        path: PathBuf,
    },

    /// Descriptor path resolves to a directory
    #[error("descriptor path is a directory, expected a file: {}", path.display())]
    ConfigIsDirectory {
        /// Offending path
        path: PathBuf,
    },

    /// Descriptor file exists but cannot be deserialized
    #[error("malformed descriptor file {}: {reason}", path.display())]
    ConfigMalformed {
        /// Descriptor path
        path: PathBuf,
        /// Deserialization failure detail
        reason: String,
    },

    /// Experiment declares fewer than two categories
    #[error("experiment must declare at least 2 categories, found {found}")]
    TooFewCategories {
        /// Number of categories actually declared
        found: usize,
    },

    /// Two files in one tuple reduce to the same category
    #[error("duplicate category \"{category}\" in {}", dir.display())]
    DuplicateCategory {
        /// Tuple directory (or descriptor path, for experiment-level duplicates)
        dir: PathBuf,
        /// The repeated category label
        category: String,
    },

    /// Tuple's derived category set differs from the experiment's declared set
    #[error(
        "categories in {} don't match the experiment (missing: [{}], unexpected: [{}])",
        dir.display(),
        missing.join(", "),
        unexpected.join(", ")
    )]
    CategoryMismatch {
        /// Tuple directory
        dir: PathBuf,
        /// Declared categories with no snippet file in the tuple (sorted)
        missing: Vec<String>,
        /// Snippet categories not declared by the experiment (sorted)
        unexpected: Vec<String>,
    },

    /// Experiment root path does not exist
    #[error("experiment root does not exist: {}", path.display())]
    RootNotFound {
        /// Missing root path
        path: PathBuf,
    },

    /// Experiment root path is not a directory
    #[error("experiment root is not a directory: {}", path.display())]
    RootNotADirectory {
        /// Offending path
        path: PathBuf,
    },

    /// A directory could not be listed
    #[error("cannot list directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// Directory path
        path: PathBuf,
        /// Underlying IO failure
        source: std::io::Error,
    },

    /// A snippet source file could not be read
    #[error("cannot read snippet file {}: {source}", path.display())]
    SourceUnreadable {
        /// Snippet file path
        path: PathBuf,
        /// Underlying IO failure
        source: std::io::Error,
    },

    /// The highlighting collaborator rejected a snippet
    #[error("highlighting failed for {}: {reason}", path.display())]
    RenderFailed {
        /// Snippet file path
        path: PathBuf,
        /// Highlighter failure detail
        reason: String,
    },

    /// The store already holds a committed experiment
    #[error("store already contains imported data; refusing to import again")]
    AlreadyImported,

    /// The store rejected the finished graph
    #[error("commit failed: {reason}")]
    CommitFailed {
        /// Store failure detail
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
