// src/table/markdown.rs

use anyhow::{Context, Result};
use prettytable::{format, Row};

use super::Cell;

/// Pipe-delimited layout with a dashed title rule, i.e. a GFM table.
fn gfm_format() -> format::TableFormat {
    format::FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(
            format::LinePosition::Title,
            format::LineSeparator::new('-', '|', '|', '|'),
        )
        .padding(1, 1)
        .build()
}

// Pipes would split the cell, newlines would split the row.
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn row<'a>(cells: impl Iterator<Item = &'a str>) -> Row {
    Row::new(cells.map(|c| prettytable::Cell::new(&escape(c))).collect())
}

/// Render a GitHub-flavored markdown table. Null cells render empty.
pub fn render(header: &[String], rows: &[Vec<Cell>]) -> Result<String> {
    let mut table = prettytable::Table::new();
    table.set_format(gfm_format());
    table.set_titles(row(header.iter().map(String::as_str)));
    for r in rows {
        table.add_row(row((0..header.len()).map(|i| {
            r.get(i).and_then(|c| c.as_deref()).unwrap_or("")
        })));
    }

    let mut buf = Vec::new();
    table.print(&mut buf).context("rendering markdown table")?;
    String::from_utf8(buf).context("markdown table is not UTF-8")
}
