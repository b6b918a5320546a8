//! Content loading and rendering
//!
//! Reads each snippet's raw bytes and runs them through the highlighting
//! collaborator, attaching both forms to the snippet. The highlighter is a
//! pure `(text, language) -> markup` function behind the [`Highlighter`]
//! trait; [`HtmlHighlighter`] is the built-in implementation. Any single
//! failure aborts the whole run; an import produces a fully rendered graph
//! or none at all.

#[cfg(feature = "parallel")]
use std::path::PathBuf;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::fs::CorpusFs;
use crate::language::resolve_language;
use crate::model::{Experiment, SnippetTuple};
use crate::{Error, Result};

/// Failure reported by a highlighting collaborator.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct HighlightError(pub String);

/// Syntax-highlighting collaborator.
///
/// Implementations must be pure and must accept the empty language (meaning
/// "no hint") without failing.
pub trait Highlighter: Send + Sync {
    /// Produce highlighted markup for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError`] on unsupported or invalid input.
    fn highlight(&self, source: &str, language: &str)
        -> std::result::Result<String, HighlightError>;
}

/// Escaping HTML renderer.
///
/// Wraps the escaped source in `<pre><code class="language-{lang}">`,
/// dropping the class attribute for the empty language. Total: it never
/// fails, which also covers the no-hint degenerate case.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlHighlighter;

impl Highlighter for HtmlHighlighter {
    fn highlight(
        &self,
        source: &str,
        language: &str,
    ) -> std::result::Result<String, HighlightError> {
        let escaped = escape_html(source);
        let markup = if language.is_empty() {
            format!("<pre><code>{escaped}</code></pre>")
        } else {
            format!("<pre><code class=\"language-{language}\">{escaped}</code></pre>")
        };
        Ok(markup)
    }
}

fn escape_html(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len());
    for ch in source.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Loads raw snippet bytes and attaches rendered markup.
pub struct ContentLoader<'a, F, H> {
    fs: &'a F,
    highlighter: &'a H,
}

impl<'a, F: CorpusFs, H: Highlighter> ContentLoader<'a, F, H> {
    /// Create a loader over the given filesystem and highlighter.
    #[must_use]
    pub fn new(fs: &'a F, highlighter: &'a H) -> Self {
        Self { fs, highlighter }
    }

    /// Load and render every snippet of every tuple in the experiment.
    ///
    /// Tuples are independent once validated, so with the `parallel` feature
    /// they load concurrently; the first failure by lexicographic tuple path
    /// is reported regardless of which worker hit it first.
    ///
    /// # Errors
    ///
    /// [`Error::SourceUnreadable`] when a snippet file cannot be read,
    /// [`Error::RenderFailed`] when the highlighter rejects a snippet.
    pub fn load(&self, experiment: &mut Experiment) -> Result<()> {
        let default_language = experiment.default_language().map(ToString::to_string);
        let experiment_hint = default_language.as_deref();

        #[cfg(feature = "parallel")]
        {
            let mut failures: Vec<(PathBuf, Error)> = experiment
                .tuples_mut()
                .par_iter_mut()
                .filter_map(|tuple| {
                    let path = tuple.source_path().to_path_buf();
                    self.load_tuple(tuple, experiment_hint)
                        .err()
                        .map(|e| (path, e))
                })
                .collect();
            failures.sort_by(|a, b| a.0.cmp(&b.0));
            if let Some((_, err)) = failures.into_iter().next() {
                return Err(err);
            }
        }

        #[cfg(not(feature = "parallel"))]
        for tuple in experiment.tuples_mut() {
            self.load_tuple(tuple, experiment_hint)?;
        }

        Ok(())
    }

    fn load_tuple(&self, tuple: &mut SnippetTuple, experiment_hint: Option<&str>) -> Result<()> {
        let tuple_hint = tuple.language().map(ToString::to_string);
        for snippet in tuple.snippets_mut() {
            let bytes =
                self.fs
                    .read(snippet.source_path())
                    .map_err(|e| Error::SourceUnreadable {
                        path: snippet.source_path().to_path_buf(),
                        source: e,
                    })?;
            // Go's byte-preserving string cast has no Rust equivalent;
            // non-UTF-8 snippet bytes are replaced lossily
            let raw = String::from_utf8_lossy(&bytes).into_owned();

            let language = resolve_language(
                snippet.language(),
                tuple_hint.as_deref(),
                experiment_hint,
            );
            let rendered = self
                .highlighter
                .highlight(&raw, &language)
                .map_err(|e| Error::RenderFailed {
                    path: snippet.source_path().to_path_buf(),
                    reason: e.to_string(),
                })?;

            debug!(
                path = %snippet.source_path().display(),
                language = %language,
                "rendered snippet"
            );
            snippet.attach_content(raw, rendered);
        }
        Ok(())
    }
}
