// src/main.rs

use anyhow::Result;
use casrn_search::{config::validate_paths, logging, search_file, SearchConfig, SrsClient};
use clap::Parser;
use std::path::PathBuf;
use tokio::time::Instant;
use tracing::info;

/// Search the EPA Substance Registry Service (SRS) for matching substances
/// based on CAS RN.
#[derive(Parser, Debug)]
#[command(name = "casrn_search", version, about)]
struct Args {
    /// CSV containing a list of CAS Registry Numbers to search.
    /// CAS Registry Numbers must be in the first column.
    input_file: PathBuf,

    /// Name of the output CSV file.
    output_file: PathBuf,

    /// Include chemical synonyms.
    #[arg(short, long)]
    synonyms: bool,

    /// Control the amount of information to display.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    validate_paths(&args.input_file, &args.output_file)?;
    logging::init(args.verbose);
    info!("casrn_search, {}", env!("CARGO_PKG_VERSION"));

    let cfg = SearchConfig::default().with_synonyms(args.synonyms);
    let client = SrsClient::new(&cfg)?;

    let start = Instant::now();
    let summary = search_file(&client, &cfg, &args.input_file, &args.output_file).await?;
    info!(
        rows = summary.rows_written,
        matched = summary.matched,
        unmatched = summary.unmatched,
        failed = summary.failed,
        elapsed = ?start.elapsed(),
        "done"
    );
    Ok(())
}
