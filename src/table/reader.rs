// src/table/reader.rs

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

const BOM: char = '\u{feff}';

/// Lazily read every row of a CSV file, header included.
///
/// Ragged rows are accepted as-is. A leading UTF-8 BOM is dropped from the
/// first field. Call again to restart from the top.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<impl Iterator<Item = Result<Vec<String>>>> {
    let path = path.as_ref();
    let rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote(b'"')
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let name = path.display().to_string();

    Ok(rdr.into_records().enumerate().map(move |(idx, rec)| {
        let rec = rec.with_context(|| format!("CSV parse error in {} at record {}", name, idx))?;
        let mut row: Vec<String> = rec.iter().map(str::to_string).collect();
        if idx == 0 {
            if let Some(first) = row.first_mut() {
                if first.starts_with(BOM) {
                    *first = first.trim_start_matches(BOM).to_string();
                }
            }
        }
        Ok(row)
    }))
}

/// Number of records in the file, header included.
pub fn count_rows<P: AsRef<Path>>(path: P) -> Result<usize> {
    let mut n = 0;
    for row in read_csv(path)? {
        row?;
        n += 1;
    }
    Ok(n)
}
