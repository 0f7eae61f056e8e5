//! CSV persistence
//!
//! `save_to_table` is the boundary where write failures stop: it logs them
//! and reports `false` instead of returning an error.

use crate::output::record::{Record, TableRow};
use crate::ScrapeError;
use std::path::Path;

/// Writes `records` to `path` with a header built from `field_order`
///
/// The file is created or truncated. Each row renders its fields in
/// `field_order`; a field the row does not carry becomes an empty cell.
///
/// # Returns
///
/// `true` once the file is fully written, `false` on any I/O or CSV error.
///
/// # Example
///
/// ```no_run
/// use quote_scraper::output::{save_to_table, Record};
/// use std::path::Path;
///
/// let rows = vec![Record::new().with("text", "hi").with("author", "me").with("tags", "")];
/// assert!(save_to_table(&rows, Path::new("quotes.csv"), &["text", "author", "tags"]));
/// ```
pub fn save_to_table<R: TableRow>(records: &[R], path: &Path, field_order: &[&str]) -> bool {
    match write_table(records, path, field_order) {
        Ok(()) => {
            tracing::info!("Saved {} rows to: {}", records.len(), path.display());
            true
        }
        Err(e) => {
            tracing::error!("Failed to save CSV to {}: {}", path.display(), e);
            false
        }
    }
}

/// Fallible core of [`save_to_table`]
pub fn write_table<R: TableRow>(
    records: &[R],
    path: &Path,
    field_order: &[&str],
) -> Result<(), ScrapeError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(field_order)?;
    for record in records {
        writer.write_record(
            field_order
                .iter()
                .map(|name| record.field(name).unwrap_or("")),
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads a file written by [`save_to_table`] back into header and records
pub fn read_table(path: &Path) -> Result<(Vec<String>, Vec<Record>), ScrapeError> {
    let mut reader = csv::Reader::from_path(path)?;
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record = header
            .iter()
            .zip(row.iter())
            .fold(Record::new(), |record, (name, value)| record.with(name.as_str(), value));
        records.push(record);
    }

    Ok((header, records))
}
