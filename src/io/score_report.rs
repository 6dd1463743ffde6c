//! Delimited text output for score tables.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::table::Table;

/// Header used for the row label column.
pub const INDEX_LABEL: &str = "index";

/// Write `table` as delimited text: a header row, then one record per row.
/// When the table has row labels they are written as the first column.
pub fn write_table<W: Write>(table: &Table, writer: W, delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    let index = table.index();

    let mut header: Vec<&str> = Vec::with_capacity(table.ncols() + 1);
    if index.is_some() {
        header.push(INDEX_LABEL);
    }
    header.extend(table.columns().iter().map(String::as_str));
    wtr.write_record(&header)
        .context("Failed to write score table header")?;

    for (row_idx, row) in table.values().outer_iter().enumerate() {
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        if let Some(labels) = index {
            record.push(labels[row_idx].clone());
        }
        record.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&record)
            .with_context(|| format!("Failed to write score table row {}", row_idx))?;
    }

    wtr.flush().context("Failed to flush score table writer")?;
    Ok(())
}

/// Write `table` to a tab-separated file at `path`.
pub fn write_table_tsv<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create score report: {}", path.display()))?;
    write_table(table, file, b'\t')
        .with_context(|| format!("Failed to write score report: {}", path.display()))?;
    log::info!(
        "Wrote {} feature scores to {}",
        table.nrows(),
        path.display()
    );
    Ok(())
}
