//! Import graph entities
//!
//! One import run produces one self-contained tree:
//!
//! ```text
//! Experiment (1) ──< SnippetTuple (N) ──< Snippet (one per category)
//! ```
//!
//! `Experiment` exclusively owns its tuples and each tuple its snippets;
//! nothing in the tree is shared or referenced from outside it. The graph is
//! immutable once the loading phase finishes and is committed to storage
//! whole or not at all.

mod experiment;
mod snippet;
mod tuple;

pub use experiment::Experiment;
pub use snippet::Snippet;
pub use tuple::SnippetTuple;
