//! corpus-import - import one experiment corpus from disk
//!
//! Takes an experiment root directory, runs the full pipeline and commits
//! the rendered graph to a JSON file store. Exits non-zero on any pipeline
//! error with a human-readable message.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use snippet_corpus::config::ImportConfig;
use snippet_corpus::fs::OsFs;
use snippet_corpus::pipeline::ImportPipeline;
use snippet_corpus::render::HtmlHighlighter;
use snippet_corpus::store::JsonFileStore;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for corpus-import
#[derive(Parser, Debug)]
#[command(name = "corpus-import")]
#[command(about = "Import a labeled snippet corpus into a store")]
#[command(version)]
struct Args {
    /// Experiment root directory
    root: PathBuf,

    /// Where to write the committed experiment graph
    #[arg(short, long, default_value = "experiment.json")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snippet_corpus=info,corpus_import=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    match import(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn import(args: &Args) -> anyhow::Result<()> {
    let pipeline = ImportPipeline::new(OsFs, HtmlHighlighter, ImportConfig::default());
    let mut store = JsonFileStore::new(&args.output);

    let report = pipeline
        .run(&args.root, &mut store)
        .with_context(|| format!("importing experiment at {}", args.root.display()))?;

    println!(
        "Imported {} tuples ({} snippets) into {}",
        report.tuples,
        report.snippets,
        args.output.display()
    );
    Ok(())
}
