//! Language resolution
//!
//! The effective highlighting language for a snippet comes from a fixed
//! precedence cascade, first non-blank hint wins:
//!
//! 1. Snippet-level override
//! 2. Tuple-level override
//! 3. Experiment-level default
//! 4. `""`, meaning no hint; the highlighter must accept this
//!
//! Pure and total: no I/O, exactly one outcome per input combination.

/// Resolve the effective language from the three hint levels.
///
/// Hints are trimmed of surrounding whitespace; a whitespace-only hint
/// counts as absent. Returns the trimmed winning hint, or `""` when every
/// level is absent or blank.
#[must_use]
pub fn resolve_language(
    snippet_hint: Option<&str>,
    tuple_hint: Option<&str>,
    experiment_hint: Option<&str>,
) -> String {
    [snippet_hint, tuple_hint, experiment_hint]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|hint| !hint.is_empty())
        .unwrap_or_default()
        .to_string()
}
