// src/search/mod.rs
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{info, instrument, warn};

use crate::{
    config::{FailurePolicy, SearchConfig},
    fetch::{sanitize, Substance, SubstanceLookup},
    table::{count_rows, read_csv, write_csv, Cell, Table, WriteMode},
};

/// Columns appended to every row, in order.
pub const ENRICHMENT_COLUMNS: [&str; 3] = ["systematicName", "epaName", "currentCasNumber"];
pub const SYNONYMS_COLUMN: &str = "synonyms";
/// Identifier column of the direct-query table.
pub const QUERY_ID_COLUMN: &str = "casrn";

/// Counts for one run. `rows_written` excludes the header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub rows_written: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub failed: usize,
}

/// Enrichment column names for this run.
pub fn enrichment_header(include_synonyms: bool) -> Vec<String> {
    let mut cols: Vec<String> = ENRICHMENT_COLUMNS.iter().map(|c| c.to_string()).collect();
    if include_synonyms {
        cols.push(SYNONYMS_COLUMN.to_string());
    }
    cols
}

/// Enrichment cells for a lookup result; `None` yields one null per column.
pub fn enrich(found: Option<&Substance>, include_synonyms: bool) -> Vec<Cell> {
    match found {
        None => vec![None; enrichment_header(include_synonyms).len()],
        Some(s) => {
            let mut cells = vec![
                s.systematic_name.clone(),
                s.epa_name.clone(),
                s.current_cas_number.clone(),
            ];
            if include_synonyms {
                cells.push(Some(s.joined_synonyms()));
            }
            cells
        }
    }
}

/// Look up one identifier and turn the outcome into enrichment cells.
///
/// Only the first returned record is used.
async fn resolve<L: SubstanceLookup>(
    lookup: &L,
    cfg: &SearchConfig,
    casrn: &str,
    summary: &mut SearchSummary,
) -> Result<Vec<Cell>> {
    match lookup.lookup(casrn).await {
        Ok(found) => {
            if found.len() > 1 {
                info!(casrn, matches = found.len(), "multiple matches, using the first");
            }
            match found.first() {
                Some(_) => summary.matched += 1,
                None => summary.unmatched += 1,
            }
            Ok(enrich(found.first(), cfg.include_synonyms))
        }
        Err(err) => {
            summary.failed += 1;
            match cfg.failure_policy {
                FailurePolicy::Continue => {
                    warn!(casrn, error = %err, "no result");
                    Ok(enrich(None, cfg.include_synonyms))
                }
                FailurePolicy::Abort => {
                    Err(err).with_context(|| format!("looking up {}", casrn))
                }
            }
        }
    }
}

fn progress_width(total: usize) -> usize {
    total.to_string().len()
}

/// Enrich every data row of `input` and write the result to `output`.
///
/// The first row of `input` is the header; it is written first, extended
/// with the enrichment columns. The identifier is taken from column one of
/// each data row. Data rows are cut or padded to the header's width so every
/// output row has the same number of fields. Rows are written one at a time,
/// so a failed run leaves every row resolved so far on disk.
#[instrument(level = "info", skip(lookup, cfg, input, output), fields(input = %input.display(), output = %output.display()))]
pub async fn search_file<L: SubstanceLookup>(
    lookup: &L,
    cfg: &SearchConfig,
    input: &Path,
    output: &Path,
) -> Result<SearchSummary> {
    let total = count_rows(input)?.saturating_sub(1);
    let width = progress_width(total);
    let extra = enrichment_header(cfg.include_synonyms);
    let mut summary = SearchSummary::default();
    let mut header_width = 0;

    info!("Querying CAS Registry Numbers:");
    for (idx, row) in read_csv(input)?.enumerate() {
        let mut row = row?;
        if idx == 0 {
            header_width = row.len();
            row.extend(extra.iter().cloned());
            write_csv(output, &row, WriteMode::Truncate)?;
            continue;
        }

        row.resize(header_width, String::new());
        let casrn = sanitize(row.first().map(String::as_str).unwrap_or(""));
        info!("{:0width$}/{} - {}", idx, total, casrn, width = width);

        let cells = resolve(lookup, cfg, &casrn, &mut summary).await?;
        row.extend(cells.into_iter().map(Option::unwrap_or_default));
        write_csv(output, &row, WriteMode::Append)?;
        summary.rows_written += 1;
    }

    if header_width == 0 {
        // No header row to truncate with; still start from an empty file.
        File::create(output).with_context(|| format!("creating {}", output.display()))?;
        warn!(input = %input.display(), "input has no rows");
    }
    Ok(summary)
}

/// Look up each identifier and collect a table sorted by
/// (`currentCasNumber`, identifier), nulls last.
#[instrument(level = "info", skip(lookup, cfg, ids), fields(count = ids.len()))]
pub async fn search_ids<L: SubstanceLookup, S: AsRef<str>>(
    lookup: &L,
    cfg: &SearchConfig,
    ids: &[S],
) -> Result<(Table, SearchSummary)> {
    let mut header = vec![QUERY_ID_COLUMN.to_string()];
    header.extend(enrichment_header(cfg.include_synonyms));
    let mut table = Table::new(header);
    let mut summary = SearchSummary::default();

    let total = ids.len();
    let width = progress_width(total);
    info!("Querying CAS Registry Numbers:");
    for (idx, raw) in ids.iter().enumerate() {
        let raw = raw.as_ref();
        let casrn = sanitize(raw);
        info!("{:0width$}/{} - {}", idx + 1, total, casrn, width = width);

        let mut row: Vec<Cell> = vec![Some(raw.to_string())];
        row.extend(resolve(lookup, cfg, &casrn, &mut summary).await?);
        table.push(row);
        summary.rows_written += 1;
    }

    table.sort_by_columns(&["currentCasNumber", QUERY_ID_COLUMN])?;
    Ok((table, summary))
}

/// Where the direct-query table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdsOutput {
    /// Markdown table on the given writer (stdout in the binary).
    Terminal,
    File(PathBuf),
}

impl IdsOutput {
    pub fn emit<W: Write>(&self, table: &Table, term: &mut W) -> Result<()> {
        match self {
            IdsOutput::Terminal => {
                term.write_all(table.to_markdown()?.as_bytes())
                    .context("writing table to terminal")?;
                term.flush().context("flushing terminal")?;
            }
            IdsOutput::File(path) => {
                table.write_csv(path)?;
                info!(path = %path.display(), rows = table.len(), "results written");
            }
        }
        Ok(())
    }
}
