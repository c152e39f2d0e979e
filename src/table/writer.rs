// src/table/writer.rs

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

/// How [`write_csv`] opens the target file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or empty the file first. Used for the header row.
    Truncate,
    Append,
}

fn open(path: &Path, mode: WriteMode) -> Result<File> {
    let mut opts = OpenOptions::new();
    match mode {
        WriteMode::Truncate => opts.write(true).create(true).truncate(true),
        WriteMode::Append => opts.append(true).create(true),
    };
    opts.open(path)
        .with_context(|| format!("opening {} ({:?})", path.display(), mode))
}

/// CSV writer with minimal quoting and no fixed record width.
pub(crate) fn csv_writer<W: Write>(w: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(w)
}

/// Write a single record to `path`. The file is opened and closed per call.
pub fn write_csv<P, S>(path: P, row: &[S], mode: WriteMode) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut wtr = csv_writer(open(path, mode)?);
    wtr.write_record(row.iter().map(|f| f.as_ref()))
        .with_context(|| format!("writing row to {}", path.display()))?;
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
