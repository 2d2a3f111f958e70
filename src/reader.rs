//! CSV import of raw homeowner entries.
//
// The header row is passed through untouched; the parser knows to skip it.

use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("No record has a column {column}")]
    ColumnNotFound { column: usize },
}

/// Read the raw entries held in `column` of a CSV file
pub fn read_entries(path: &Path, column: usize) -> Result<Vec<String>, ReaderError> {
    debug!("Reading homeowner entries from {}", path.display());
    let file = File::open(path)
        .map_err(|source| ReaderError::Io { path: path.to_path_buf(), source })?;
    read_entries_from(file, column)
}

/// Read the raw entries held in `column` of CSV data.
///
/// Records too short to have the column are skipped. An input with records
/// but none that reach the column is an error.
pub fn read_entries_from<R: Read>(reader: R, column: usize) -> Result<Vec<String>, ReaderError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut records = 0usize;

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        records += 1;
        match record.get(column) {
            Some(field) => entries.push(field.to_string()),
            None => warn!("Record {} has no column {}, skipping", line + 1, column),
        }
    }

    if records > 0 && entries.is_empty() {
        return Err(ReaderError::ColumnNotFound { column });
    }

    debug!("Read {} entries from {} records", entries.len(), records);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_first_column() {
        let data = "homeowner\nMr John Smith\n\"Mr & Mrs Smith\"\n";
        let entries = read_entries_from(data.as_bytes(), 0).unwrap();
        assert_eq!(entries, vec!["homeowner", "Mr John Smith", "Mr & Mrs Smith"]);
    }

    #[test]
    fn test_quoted_comma_stays_in_field() {
        let data = "homeowner\n\"Mr Smith, Jr\"\n";
        let entries = read_entries_from(data.as_bytes(), 0).unwrap();
        assert_eq!(entries, vec!["homeowner", "Mr Smith, Jr"]);
    }

    #[test]
    fn test_selects_column_and_skips_short_records() {
        let data = "id,homeowner\n1,Mr John Smith\n2\n3,Dr P Gunn\n";
        let entries = read_entries_from(data.as_bytes(), 1).unwrap();
        assert_eq!(entries, vec!["homeowner", "Mr John Smith", "Dr P Gunn"]);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let data = "homeowner\nMr John Smith\n";
        let err = read_entries_from(data.as_bytes(), 3).unwrap_err();
        assert!(matches!(err, ReaderError::ColumnNotFound { column: 3 }));
    }

    #[test]
    fn test_empty_input_yields_no_entries() {
        let entries = read_entries_from("".as_bytes(), 0).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_read_entries_from_file() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "homeowner")?;
        writeln!(file, "Mrs Jane McMaster")?;

        let entries = read_entries(file.path(), 0)?;
        assert_eq!(entries, vec!["homeowner", "Mrs Jane McMaster"]);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_entries(Path::new("/nonexistent/homeowners.csv"), 0).unwrap_err();
        assert!(matches!(err, ReaderError::Io { .. }));
        assert!(err.to_string().contains("homeowners.csv"));
    }
}
