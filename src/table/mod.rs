// src/table/mod.rs
use anyhow::{bail, Context, Result};
use std::{cmp::Ordering, path::Path};
use tracing::debug;

pub mod markdown;
pub mod reader;
pub mod writer;

pub use reader::{count_rows, read_csv};
pub use writer::{write_csv, WriteMode};

/// A table cell; `None` is a null (no value from the registry).
pub type Cell = Option<String>;

/// In-memory result table, rendered once the run is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

/// Ascending, with nulls after every value.
fn cmp_nulls_last(a: &Cell, b: &Cell) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Stable sort by the named columns in order, nulls last.
    pub fn sort_by_columns(&mut self, columns: &[&str]) -> Result<()> {
        let mut idx = Vec::with_capacity(columns.len());
        for col in columns {
            match self.column_index(col) {
                Some(i) => idx.push(i),
                None => bail!("no column named {:?} to sort by", col),
            }
        }
        self.rows.sort_by(|a, b| {
            idx.iter()
                .map(|&i| cmp_nulls_last(&a.get(i).cloned().flatten(), &b.get(i).cloned().flatten()))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        Ok(())
    }

    /// Replace `path` with the header and every row, nulls as empty fields.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        let mut wtr = writer::csv_writer(file);
        wtr.write_record(&self.header)
            .with_context(|| format!("writing header to {}", path.display()))?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))
                .with_context(|| format!("writing row to {}", path.display()))?;
        }
        wtr.flush()
            .with_context(|| format!("flushing {}", path.display()))?;
        debug!(rows = self.rows.len(), path = %path.display(), "table written");
        Ok(())
    }

    pub fn to_markdown(&self) -> Result<String> {
        markdown::render(&self.header, &self.rows)
    }
}
