//! Reference list ingestion from CSV.
//!
//! The matching core never parses files; this module is the collaborating
//! data-loading layer. It reads a headered CSV, treats every column as
//! text, and checks that the required columns exist before a match is
//! attempted.

use screenx_core::{Error, ReferenceRecord, Result};
use std::collections::HashMap;
use std::path::Path;

/// Load a reference dataset from a headered CSV file.
///
/// Every column becomes a text field on the record; row indices follow
/// the file order, starting at 0 for the first data row.
///
/// # Errors
///
/// Returns [`Error::Csv`] when the file cannot be read or a row is
/// malformed.
pub fn load_reference_csv(path: &Path) -> Result<Vec<ReferenceRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| Error::Csv(format!("{}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::Csv(format!("{}: {e}", path.display())))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| Error::Csv(format!("{}: {e}", path.display())))?;
        let fields: HashMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        records.push(ReferenceRecord::new(index, fields));
    }
    Ok(records)
}

/// Check that every required column exists in the dataset.
///
/// Mirrors the schema guard run before matching: screening on "name" and
/// "address" requires both columns to be present. Checks the first record
/// only; [`load_reference_csv`] gives every row the same columns.
///
/// # Errors
///
/// Returns [`Error::MissingColumn`] naming the first absent column, or
/// [`Error::EmptyReference`] when there are no rows to check.
pub fn require_columns<'a>(
    records: &[ReferenceRecord],
    columns: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let first = records.first().ok_or(Error::EmptyReference)?;
    for column in columns {
        if first.get(column).is_none() {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}
