//! # snippet-corpus: labeled snippet corpus import pipeline
//!
//! Ingests a directory-organized corpus of labeled source-code examples,
//! validates its structure against a declared experiment schema, and prepares
//! a normalized, highlighted representation for durable storage.
//!
//! A corpus on disk looks like:
//!
//! ```text
//! experiment-root/
//!   experiment.yaml        categories + optional default language
//!   tuple-1/
//!     snippets.yaml        marks the directory as a tuple; optional language
//!     readable.py          one snippet per declared category
//!     obfuscated.py
//!   tuple-2/
//!     ...
//! ```
//!
//! ## Example
//!
//! ```rust
//! use snippet_corpus::config::ImportConfig;
//! use snippet_corpus::fs::MemoryFs;
//! use snippet_corpus::pipeline::ImportPipeline;
//! use snippet_corpus::render::HtmlHighlighter;
//! use snippet_corpus::store::MemoryStore;
//! use std::path::Path;
//!
//! let fs = MemoryFs::new()
//!     .with_file("exp/experiment.yaml", b"categories: [readable, obfuscated]\n")
//!     .with_file("exp/t1/snippets.yaml", b"language: python\n")
//!     .with_file("exp/t1/readable.py", b"total = sum(values)\n")
//!     .with_file("exp/t1/obfuscated.py", b"t=sum(v)\n");
//!
//! let pipeline = ImportPipeline::new(fs, HtmlHighlighter, ImportConfig::default());
//! let mut store = MemoryStore::new();
//! let report = pipeline.run(Path::new("exp"), &mut store)?;
//! assert_eq!(report.tuples, 1);
//! assert_eq!(report.snippets, 2);
//! # Ok::<(), snippet_corpus::Error>(())
//! ```
//!
//! Imports are one-shot by design: a store that already holds data makes the
//! run fail with [`Error::AlreadyImported`] before any filesystem access.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod descriptor;
pub mod error;
pub mod fs;
pub mod language;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod scanner;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
