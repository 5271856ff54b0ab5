//! Command line tool that turns a search document into a request for the
//! query execution service, in protobuf text format.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use query_engine_translation::translation::request::{build_request, SearchRequest};

/// Render a search document as a query execution service request.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the search document (JSON).
    query_file: PathBuf,

    /// Partition URL to scan. May be given multiple times.
    #[arg(long = "arrow-url")]
    arrow_urls: Vec<String>,

    /// Write the rendered request here instead of standard output.
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let document = std::fs::read_to_string(&cli.query_file)
        .with_context(|| format!("failed to read {}", cli.query_file.display()))?;
    let search: SearchRequest = serde_json::from_str(&document)
        .with_context(|| format!("failed to parse {}", cli.query_file.display()))?;

    let request = build_request(&search, cli.arrow_urls.clone())?;
    let text = request.text();

    match &cli.output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}
