//! Corpus scanning
//!
//! Walks the experiment root's immediate children and builds the in-memory
//! snippet graph. A child directory is part of the corpus only when it holds
//! the tuple descriptor file; anything else (files directly under the root,
//! directories without a descriptor) is skipped without error, so auxiliary
//! directories can live next to the corpus. The first unrecoverable error
//! aborts the scan; a partial experiment is never returned.

use std::path::Path;

use tracing::debug;

use crate::config::ImportConfig;
use crate::descriptor::{parse_experiment_descriptor, parse_tuple_descriptor};
use crate::fs::{CorpusFs, PathKind};
use crate::model::{Experiment, Snippet, SnippetTuple};
use crate::validate::check_tuple_categories;
use crate::{Error, Result};

/// Discovers snippet tuples and assembles the experiment graph.
pub struct CorpusScanner<'a, F> {
    fs: &'a F,
    config: &'a ImportConfig,
}

impl<'a, F: CorpusFs> CorpusScanner<'a, F> {
    /// Create a scanner over the given filesystem and configuration.
    #[must_use]
    pub fn new(fs: &'a F, config: &'a ImportConfig) -> Self {
        Self { fs, config }
    }

    /// Scan the experiment rooted at `root`.
    ///
    /// Parses the experiment descriptor, discovers tuple subdirectories and
    /// validates each tuple's categories as it is built. Content fields stay
    /// empty; loading is a separate phase.
    ///
    /// # Errors
    ///
    /// Root problems ([`Error::RootNotFound`], [`Error::RootNotADirectory`],
    /// [`Error::DirectoryUnreadable`]), descriptor parser failures, and
    /// category validation failures all abort the scan.
    pub fn scan(&self, root: &Path) -> Result<Experiment> {
        match self.fs.kind(root)? {
            None => {
                return Err(Error::RootNotFound {
                    path: root.to_path_buf(),
                })
            }
            Some(PathKind::File) => {
                return Err(Error::RootNotADirectory {
                    path: root.to_path_buf(),
                })
            }
            Some(PathKind::Directory) => {}
        }

        let descriptor_path = root.join(&self.config.experiment_descriptor);
        let descriptor = parse_experiment_descriptor(self.fs, &descriptor_path)?;
        let mut experiment =
            Experiment::new(descriptor.categories, descriptor.language, &descriptor_path)?;

        let entries = self
            .fs
            .read_dir(root)
            .map_err(|e| Error::DirectoryUnreadable {
                path: root.to_path_buf(),
                source: e,
            })?;

        for entry in entries {
            if entry.kind != PathKind::Directory {
                // files directly under the root are not snippets
                continue;
            }
            let dir = root.join(&entry.name);
            if let Some(tuple) = self.scan_tuple(&dir, experiment.categories())? {
                debug!(
                    dir = %dir.display(),
                    snippets = tuple.snippets().len(),
                    "discovered snippet tuple"
                );
                experiment.push_tuple(tuple);
            }
        }

        Ok(experiment)
    }

    /// Scan one candidate subdirectory.
    ///
    /// Returns `Ok(None)` when the directory holds no tuple descriptor and
    /// is therefore not part of the corpus.
    fn scan_tuple(&self, dir: &Path, declared: &[String]) -> Result<Option<SnippetTuple>> {
        let descriptor_path = dir.join(&self.config.tuple_descriptor);
        match self.fs.kind(&descriptor_path)? {
            None => return Ok(None),
            Some(PathKind::Directory) => {
                return Err(Error::ConfigIsDirectory {
                    path: descriptor_path,
                })
            }
            Some(PathKind::File) => {}
        }

        let descriptor = parse_tuple_descriptor(self.fs, &descriptor_path)?;
        let mut tuple = SnippetTuple::new(dir, descriptor.language);

        // one single listing per tuple; every snippet comes from it
        let entries = self
            .fs
            .read_dir(dir)
            .map_err(|e| Error::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source: e,
            })?;

        for entry in entries {
            if entry.name == self.config.tuple_descriptor || entry.kind == PathKind::Directory {
                continue;
            }
            let category = file_stem(&entry.name);
            tuple.push_snippet(Snippet::new(category, dir.join(&entry.name)));
        }

        let found: Vec<String> = tuple
            .categories()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        check_tuple_categories(declared, &found, dir)?;

        Ok(Some(tuple))
    }
}

/// Strip the final extension from a file name.
fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map_or_else(|| name.to_string(), |stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    const EXPERIMENT: &[u8] = b"categories: [a, b]\nlanguage: python\n";

    fn scan(fs: &MemoryFs) -> Result<Experiment> {
        let config = ImportConfig::default();
        CorpusScanner::new(fs, &config).scan(Path::new("exp"))
    }

    #[test]
    fn test_scan_builds_tuples_from_descriptor_dirs() {
        let fs = MemoryFs::new()
            .with_file("exp/experiment.yaml", EXPERIMENT)
            .with_file("exp/t1/snippets.yaml", b"")
            .with_file("exp/t1/a.py", b"1")
            .with_file("exp/t1/b.py", b"2");

        let experiment = scan(&fs).unwrap();
        assert_eq!(experiment.tuples().len(), 1);
        let tuple = &experiment.tuples()[0];
        assert_eq!(tuple.source_path(), Path::new("exp/t1"));
        assert_eq!(tuple.categories(), vec!["a", "b"]);
        assert!(!tuple.snippets()[0].is_loaded());
    }

    #[test]
    fn test_scan_skips_dirs_without_descriptor() {
        let fs = MemoryFs::new()
            .with_file("exp/experiment.yaml", EXPERIMENT)
            .with_file("exp/notes/README.md", b"aux material")
            .with_file("exp/t1/snippets.yaml", b"")
            .with_file("exp/t1/a.py", b"1")
            .with_file("exp/t1/b.py", b"2");

        let experiment = scan(&fs).unwrap();
        assert_eq!(experiment.tuples().len(), 1);
    }

    #[test]
    fn test_scan_ignores_loose_files_under_root() {
        let fs = MemoryFs::new()
            .with_file("exp/experiment.yaml", EXPERIMENT)
            .with_file("exp/stray.txt", b"not a snippet");

        let experiment = scan(&fs).unwrap();
        assert!(experiment.tuples().is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let fs = MemoryFs::new();
        let err = scan(&fs).unwrap_err();
        assert!(matches!(err, Error::RootNotFound { .. }));
    }

    #[test]
    fn test_scan_root_is_a_file() {
        let fs = MemoryFs::new().with_file("exp", b"not a dir");
        let err = scan(&fs).unwrap_err();
        assert!(matches!(err, Error::RootNotADirectory { .. }));
    }

    #[test]
    fn test_scan_rejects_category_mismatch() {
        let fs = MemoryFs::new()
            .with_file("exp/experiment.yaml", EXPERIMENT)
            .with_file("exp/t1/snippets.yaml", b"")
            .with_file("exp/t1/a.py", b"1")
            .with_file("exp/t1/c.py", b"3");

        let err = scan(&fs).unwrap_err();
        match err {
            Error::CategoryMismatch { dir, missing, unexpected } => {
                assert_eq!(dir, Path::new("exp/t1"));
                assert_eq!(missing, vec!["b"]);
                assert_eq!(unexpected, vec!["c"]);
            }
            other => panic!("expected CategoryMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_rejects_duplicate_stems() {
        let fs = MemoryFs::new()
            .with_file("exp/experiment.yaml", EXPERIMENT)
            .with_file("exp/t1/snippets.yaml", b"")
            .with_file("exp/t1/a.py", b"1")
            .with_file("exp/t1/a.txt", b"2");

        let err = scan(&fs).unwrap_err();
        assert!(matches!(err, Error::DuplicateCategory { .. }));
    }

    #[test]
    fn test_scan_tuple_descriptor_is_directory() {
        let fs = MemoryFs::new()
            .with_file("exp/experiment.yaml", EXPERIMENT)
            .with_dir("exp/t1/snippets.yaml");

        let err = scan(&fs).unwrap_err();
        assert!(matches!(err, Error::ConfigIsDirectory { .. }));
    }

    #[test]
    fn test_scan_nested_directories_are_not_snippets() {
        let fs = MemoryFs::new()
            .with_file("exp/experiment.yaml", EXPERIMENT)
            .with_file("exp/t1/snippets.yaml", b"")
            .with_file("exp/t1/a.py", b"1")
            .with_file("exp/t1/b.py", b"2")
            .with_file("exp/t1/extra/ignored.py", b"3");

        let experiment = scan(&fs).unwrap();
        assert_eq!(experiment.tuples()[0].snippets().len(), 2);
    }

    #[test]
    fn test_scan_tuple_language_override() {
        let fs = MemoryFs::new()
            .with_file("exp/experiment.yaml", EXPERIMENT)
            .with_file("exp/t1/snippets.yaml", b"language: go\n")
            .with_file("exp/t1/a.py", b"1")
            .with_file("exp/t1/b.py", b"2");

        let experiment = scan(&fs).unwrap();
        assert_eq!(experiment.tuples()[0].language(), Some("go"));
    }

    #[test]
    fn test_file_stem_strips_one_extension() {
        assert_eq!(file_stem("a.py"), "a");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
        assert_eq!(file_stem("no_ext"), "no_ext");
    }
}
