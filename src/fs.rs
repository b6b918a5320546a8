//! Filesystem boundary for the import pipeline
//!
//! The scanner and content loader never touch `std::fs` directly; they go
//! through the [`CorpusFs`] trait so the whole pipeline can run against an
//! in-memory directory tree in tests. [`OsFs`] is the production backend,
//! [`MemoryFs`] the deterministic test backend.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// What a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file
    File,
    /// A directory
    Directory,
}

/// One entry of a single directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    /// Entry name (no path components)
    pub name: String,
    /// Whether the entry is a file or a directory
    pub kind: PathKind,
}

/// Read-only filesystem access used by the pipeline.
///
/// Methods return raw `io::Result`s; callers wrap failures into domain
/// errors with path context attached.
pub trait CorpusFs: Send + Sync {
    /// Resolve what `path` points at, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error for IO failures other than "not found".
    fn kind(&self, path: &Path) -> io::Result<Option<PathKind>>;

    /// List a directory's immediate entries, in the backend's own order.
    ///
    /// The order does not need to be stable across runs, but one call
    /// returns one consistent listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<FsEntry>>;

    /// Read a file's full contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Production filesystem backend.
///
/// Symlinks are followed (`std::fs::metadata` semantics): a symlink to a
/// directory counts as a directory, a dangling symlink as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl CorpusFs for OsFs {
    fn kind(&self, path: &Path) -> io::Result<Option<PathKind>> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(PathKind::Directory)),
            Ok(_) => Ok(Some(PathKind::File)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let kind = if entry.metadata()?.is_dir() {
                PathKind::Directory
            } else {
                PathKind::File
            };
            entries.push(FsEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// In-memory directory tree for deterministic tests.
///
/// Directory listings preserve insertion order, which lets tests exercise
/// the "internally consistent but arbitrary enumeration order" contract.
///
/// # Example
///
/// ```rust
/// use snippet_corpus::fs::{CorpusFs, MemoryFs, PathKind};
/// use std::path::Path;
///
/// let fs = MemoryFs::new()
///     .with_file("exp/experiment.yaml", b"categories: [a, b]")
///     .with_file("exp/t1/a.py", b"print('a')");
///
/// assert_eq!(
///     fs.kind(Path::new("exp/t1")).unwrap(),
///     Some(PathKind::Directory)
/// );
/// ```
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: BTreeMap<PathBuf, Vec<u8>>,
    // insertion-ordered child names per directory
    listings: BTreeMap<PathBuf, Vec<FsEntry>>,
}

impl MemoryFs {
    /// Create an empty in-memory tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating parent directories implicitly.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: &[u8]) -> Self {
        self.insert_file(path.as_ref(), contents.to_vec());
        self
    }

    /// Add an empty directory.
    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.ensure_dir(path.as_ref());
        self
    }

    fn insert_file(&mut self, path: &Path, contents: Vec<u8>) {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent);
        }
        self.record_child(path, PathKind::File);
        self.files.insert(path.to_path_buf(), contents);
    }

    fn ensure_dir(&mut self, path: &Path) {
        if path.as_os_str().is_empty() || self.listings.contains_key(path) {
            return;
        }
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent);
        }
        self.record_child(path, PathKind::Directory);
        self.listings.insert(path.to_path_buf(), Vec::new());
    }

    fn record_child(&mut self, path: &Path, kind: PathKind) {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        if parent.as_os_str().is_empty() {
            return;
        }
        let name = name.to_string_lossy().into_owned();
        let listing = self.listings.entry(parent.to_path_buf()).or_default();
        if !listing.iter().any(|e| e.name == name) {
            listing.push(FsEntry { name, kind });
        }
    }
}

impl CorpusFs for MemoryFs {
    fn kind(&self, path: &Path) -> io::Result<Option<PathKind>> {
        if self.files.contains_key(path) {
            Ok(Some(PathKind::File))
        } else if self.listings.contains_key(path) {
            Ok(Some(PathKind::Directory))
        } else {
            Ok(None)
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<FsEntry>> {
        self.listings.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no such directory")
        })
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no such file")
        })
    }
}
