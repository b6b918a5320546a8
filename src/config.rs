//! Pipeline configuration
//!
//! Descriptor filenames used to be hardcoded constants scattered through the
//! import code; they are now carried in one explicit struct handed to the
//! pipeline's entry point.

/// Configuration for one import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Filename of the experiment descriptor inside the experiment root
    pub experiment_descriptor: String,
    /// Filename of the tuple descriptor inside each snippet subdirectory
    pub tuple_descriptor: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            experiment_descriptor: "experiment.yaml".to_string(),
            tuple_descriptor: "snippets.yaml".to_string(),
        }
    }
}
