//! Descriptor file parsing
//!
//! Two YAML documents mark the corpus structure: the experiment descriptor
//! at the root (`categories`, optional `language`) and a tuple descriptor in
//! each snippet subdirectory (optional `language`; its mere presence marks
//! the directory as a tuple). Parsing here is a pure read; cross-file
//! validation belongs to the category validator.

use std::path::Path;

use serde::Deserialize;

use crate::fs::{CorpusFs, PathKind};
use crate::{Error, Result};

/// Deserialized experiment descriptor.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExperimentDescriptor {
    /// Declared category labels
    pub categories: Vec<String>,
    /// Experiment-wide default language
    #[serde(default)]
    pub language: Option<String>,
}

/// Deserialized tuple descriptor.
///
/// An empty file is valid; presence alone marks the directory as a tuple.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TupleDescriptor {
    /// Tuple-level language override
    #[serde(default)]
    pub language: Option<String>,
}

/// Parse the experiment descriptor at `path`.
///
/// # Errors
///
/// [`Error::ConfigNotFound`] if the path is absent,
/// [`Error::ConfigIsDirectory`] if it is a directory,
/// [`Error::ConfigMalformed`] if the contents fail to deserialize.
pub fn parse_experiment_descriptor<F: CorpusFs>(
    fs: &F,
    path: &Path,
) -> Result<ExperimentDescriptor> {
    read_descriptor(fs, path)
}

/// Parse the tuple descriptor at `path`.
///
/// # Errors
///
/// Same failure modes as [`parse_experiment_descriptor`].
pub fn parse_tuple_descriptor<F: CorpusFs>(fs: &F, path: &Path) -> Result<TupleDescriptor> {
    // serde_yaml maps a fully empty document to an error for struct targets,
    // so an empty descriptor is special-cased to the default
    let text = read_descriptor_text(fs, path)?;
    if text.trim().is_empty() {
        return Ok(TupleDescriptor::default());
    }
    serde_yaml::from_str(&text).map_err(|e| Error::ConfigMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn read_descriptor<T: for<'de> Deserialize<'de>, F: CorpusFs>(fs: &F, path: &Path) -> Result<T> {
    let text = read_descriptor_text(fs, path)?;
    serde_yaml::from_str(&text).map_err(|e| Error::ConfigMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn read_descriptor_text<F: CorpusFs>(fs: &F, path: &Path) -> Result<String> {
    match fs.kind(path)? {
        None => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(PathKind::Directory) => {
            return Err(Error::ConfigIsDirectory {
                path: path.to_path_buf(),
            })
        }
        Some(PathKind::File) => {}
    }

    let bytes = fs.read(path).map_err(|e| Error::SourceUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    String::from_utf8(bytes).map_err(|e| Error::ConfigMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[test]
    fn test_parse_experiment_descriptor() {
        let fs = MemoryFs::new().with_file(
            "exp/experiment.yaml",
            b"categories:\n  - readable\n  - obfuscated\nlanguage: python\n",
        );

        let desc = parse_experiment_descriptor(&fs, Path::new("exp/experiment.yaml")).unwrap();
        assert_eq!(desc.categories, vec!["readable", "obfuscated"]);
        assert_eq!(desc.language.as_deref(), Some("python"));
    }

    #[test]
    fn test_parse_experiment_descriptor_without_language() {
        let fs = MemoryFs::new().with_file("exp/experiment.yaml", b"categories: [a, b]\n");

        let desc = parse_experiment_descriptor(&fs, Path::new("exp/experiment.yaml")).unwrap();
        assert!(desc.language.is_none());
    }

    #[test]
    fn test_missing_descriptor() {
        let fs = MemoryFs::new().with_dir("exp");
        let err =
            parse_experiment_descriptor(&fs, Path::new("exp/experiment.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_descriptor_path_is_directory() {
        let fs = MemoryFs::new().with_dir("exp/experiment.yaml");
        let err =
            parse_experiment_descriptor(&fs, Path::new("exp/experiment.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigIsDirectory { .. }));
    }

    #[test]
    fn test_malformed_descriptor() {
        let fs = MemoryFs::new().with_file("exp/experiment.yaml", b"categories: {not a list\n");
        let err =
            parse_experiment_descriptor(&fs, Path::new("exp/experiment.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigMalformed { .. }));
    }

    #[test]
    fn test_empty_tuple_descriptor_is_valid() {
        let fs = MemoryFs::new().with_file("exp/t1/snippets.yaml", b"");
        let desc = parse_tuple_descriptor(&fs, Path::new("exp/t1/snippets.yaml")).unwrap();
        assert!(desc.language.is_none());
    }

    #[test]
    fn test_tuple_descriptor_with_language() {
        let fs = MemoryFs::new().with_file("exp/t1/snippets.yaml", b"language: go\n");
        let desc = parse_tuple_descriptor(&fs, Path::new("exp/t1/snippets.yaml")).unwrap();
        assert_eq!(desc.language.as_deref(), Some("go"));
    }
}
