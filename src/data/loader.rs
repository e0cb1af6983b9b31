// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Reads a delimited text file (comma by default) whose first
// row is the header, and materialises every data row as raw
// strings.
//
// Loading only materialises the table; indexing (pass one) is
// a separate step over the finished Table, see indexer.rs.
//
// The csv reader is put in flexible mode on purpose: a row of
// the wrong width must surface as our SchemaError (with the
// data-row number), not as the csv crate's own length error.
//
// Any malformed row aborts the whole load; there is no partial
// result.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::{fs::File, io::Read, path::PathBuf};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use thiserror::Error;

use crate::domain::{error::SchemaError, table::Table, traits::TableSource};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no header row")]
    MissingHeader,
}

/// Read header and rows from `reader`.
pub fn read_table<R: Read>(reader: R, delimiter: u8) -> Result<Table, IngestError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if header.is_empty() {
        return Err(IngestError::MissingHeader);
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() != header.len() {
            return Err(SchemaError {
                row:      rows.len(),
                expected: header.len(),
                actual:   record.len(),
            }
            .into());
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::info!("Read {} rows × {} columns", rows.len(), header.len());
    Ok(Table::new(header, rows))
}

/// Loads a CSV file from disk.
/// Implements the TableSource trait from Layer 3.
pub struct CsvLoader {
    path:      PathBuf,
    delimiter: u8,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl TableSource for CsvLoader {
    fn load(&self) -> Result<Table> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?;

        tracing::info!("Reading '{}'", self.path.display());
        read_table(file, self.delimiter)
            .with_context(|| format!("Cannot ingest '{}'", self.path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HOUSES: &str = "Id,Zone,Price\n1,RL,100\n2,NA,150\n3,RL,200\n";

    #[test]
    fn test_reads_header_and_rows() {
        let table = read_table(HOUSES.as_bytes(), b',').unwrap();
        assert_eq!(table.header, vec!["Id", "Zone", "Price"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[1], vec!["2", "NA", "150"]);
    }

    #[test]
    fn test_ragged_row_reports_row_number() {
        let data = "a,b,c\n1,2,3\n4,5\n";
        match read_table(data.as_bytes(), b',') {
            Err(IngestError::Schema(e)) => {
                assert_eq!(e, SchemaError { row: 1, expected: 3, actual: 2 });
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_quoted_fields_keep_delimiters() {
        let data = "Id,Zone\n1,\"C (all), x\"\n";
        let table = read_table(data.as_bytes(), b',').unwrap();
        assert_eq!(table.rows[0][1], "C (all), x");
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(matches!(read_table("".as_bytes(), b','), Err(IngestError::MissingHeader)));
    }

    #[test]
    fn test_custom_delimiter() {
        let table = read_table("a;b\n1;2\n".as_bytes(), b';').unwrap();
        assert_eq!(table.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn test_csv_loader_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HOUSES.as_bytes()).unwrap();

        let loader = CsvLoader::new(file.path());
        let table = loader.load().unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = CsvLoader::new("does/not/exist.csv");
        assert!(loader.load().is_err());
    }
}
