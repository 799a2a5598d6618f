//! lognotice-rewrite CLI
//!
//! Rewrites `LogNotice.m(a, b, c[, d])` into `LogMsg.m(ab, c[, d])` in place.
//!
//! # Usage
//!
//! ```bash
//! lognotice-rewrite /code/java/src com.acme.service
//! lognotice-rewrite /code/java/src com.acme --config rewrite.yaml --report report.json
//! RUST_LOG=debug lognotice-rewrite /code/java/src com.acme
//! ```
//!
//! Note: this overwrites the files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use lognotice_rewrite::{rewrite_corpus, RewriteConfig, RewriteError};

#[derive(Parser)]
#[command(name = "lognotice-rewrite")]
#[command(about = "Rewrite LogNotice call sites into LogMsg calls, in place", long_about = None)]
struct Cli {
    /// Base source folder, e.g. /code/java/src
    corpus_root: Option<PathBuf>,

    /// Package to start from, e.g. com.acme.service
    start_package: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the run report as JSON to this path
    #[arg(short, long)]
    report: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stdout)
        .init();
}

fn run(cli: Cli, corpus_root: PathBuf, start_package: String) -> Result<(), RewriteError> {
    let config = match &cli.config {
        Some(path) => RewriteConfig::from_yaml(path)?,
        None => RewriteConfig::default(),
    };

    let report = rewrite_corpus(&corpus_root, &start_package, &config)?;

    if let Some(path) = &cli.report {
        let json = report.to_json().map_err(|e| {
            RewriteError::io(path, std::io::Error::new(std::io::ErrorKind::Other, e))
        })?;
        std::fs::write(path, json).map_err(|e| RewriteError::io(path, e))?;
    }

    println!(
        "Done: {} rewrites in {} files ({} discovered, {} skipped)",
        report.rewrite_count(),
        report.files_rewritten().len(),
        report.files_discovered,
        report.files_skipped.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();

    let (Some(corpus_root), Some(start_package)) = (cli.corpus_root.take(), cli.start_package.take())
    else {
        println!("Need at least two args:  codeSourceFolder startPackageName");
        println!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    };

    init_tracing();

    match run(cli, corpus_root, start_package) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
