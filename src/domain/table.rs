// ============================================================
// Layer 3 — Table Domain Type
// ============================================================
// A fully materialised CSV dataset: the header row and every
// data row as raw string cells.
//
// Invariant: every row has exactly `header.len()` cells.
// The loader enforces this while reading; a Table built by hand
// can be checked with `validate()`.
//
// The Table is read once at the start of a run and is held
// read-only afterwards — indexing and encoding only borrow it.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};

use crate::domain::error::SchemaError;

/// Header plus raw rows of a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Ordered column names; defines column identity downstream
    pub header: Vec<String>,

    /// Ordered data rows, each an ordered list of raw cells
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a Table from a header and rows without checking widths.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Convenience constructor used heavily in tests:
    ///   Table::from_str_rows(&["Id", "Zone"], &[&["1", "RL"]])
    pub fn from_str_rows(header: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, as defined by the header
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Position of a column by name, if present
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Check that every row is exactly as wide as the header.
    /// Reports the first offending row (0-based, header excluded).
    pub fn validate(&self) -> Result<(), SchemaError> {
        let expected = self.column_count();
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(SchemaError { row, expected, actual: cells.len() });
            }
        }
        Ok(())
    }
}
