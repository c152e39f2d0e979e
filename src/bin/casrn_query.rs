// src/bin/casrn_query.rs

use anyhow::Result;
use casrn_search::{
    config::QUERY_OUTPUT_FILE, logging, search_ids, IdsOutput, SearchConfig, SrsClient,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Search the EPA Substance Registry Service (SRS) for one or more CAS RN
/// and print the matches as a table.
#[derive(Parser, Debug)]
#[command(name = "casrn_query", version, about)]
struct Args {
    /// CAS Registry Numbers to search.
    #[arg(required = true, value_name = "CAS_RN")]
    casrn: Vec<String>,

    /// Include chemical synonyms.
    #[arg(short, long)]
    synonyms: bool,

    /// Write results to casrn_search.csv instead of the terminal.
    #[arg(short, long)]
    file: bool,

    /// Control the amount of information to display.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn output(&self) -> IdsOutput {
        if self.file {
            IdsOutput::File(PathBuf::from(QUERY_OUTPUT_FILE))
        } else {
            IdsOutput::Terminal
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    info!("casrn_query, {}", env!("CARGO_PKG_VERSION"));

    let cfg = SearchConfig::default().with_synonyms(args.synonyms);
    let client = SrsClient::new(&cfg)?;

    let (table, summary) = search_ids(&client, &cfg, &args.casrn).await?;
    args.output().emit(&table, &mut std::io::stdout().lock())?;
    info!(
        rows = summary.rows_written,
        matched = summary.matched,
        failed = summary.failed,
        "done"
    );
    Ok(())
}
