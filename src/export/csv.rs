//! CSV Export functionality
//!
//! A summary export has the header `category,income,expense,net` (joined with
//! the chosen delimiter), one row per category and a trailing `TOTAL` row.
//! Values use the same two-decimal formatting as the terminal table, with no
//! currency symbol.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::error::{FinError, FinResult};
use crate::services::summary::{format_amount, Summary};

/// Column names of a summary export
pub const SUMMARY_HEADER: [&str; 4] = ["category", "income", "expense", "net"];

/// Write a summary to any writer
pub fn write_summary_csv<W: Write>(summary: &Summary, writer: W, delimiter: u8) -> FinResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer.write_record(SUMMARY_HEADER)?;
    for row in summary.all_rows() {
        csv_writer.write_record([
            row.category.clone(),
            format_amount(row.income),
            format_amount(row.expense),
            format_amount(row.net()),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinError::Export(e.to_string()))?;

    Ok(())
}

/// Write a summary to a file, replacing it if present
pub fn export_summary_file(summary: &Summary, path: &Path, delimiter: u8) -> FinResult<()> {
    let file = File::create(path)
        .map_err(|e| FinError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write_summary_csv(summary, BufWriter::new(file), delimiter)
}
