// ============================================================
// Layer 4 — Column Indexer
// ============================================================
// Pass one of the two-pass pipeline. Scans every row once and
// builds, per column, a map from each distinct raw value to the
// row positions where it occurs:
//
//   column "Zone":  "RL" → [0, 2]
//                   "NA" → [1]
//
// The map is insertion-ordered (IndexMap): values iterate in the
// order they were first seen. Every later tie-break (mode,
// category order) is defined in terms of that order, so nothing
// depends on hash iteration.
//
// Two-phase protocol:
//   ColumnIndexer::push_row(..)  — build phase, mutable
//   ColumnIndexer::finish()      — freeze into Vec<ColumnIndex>
// After finish() the indices are never mutated again.
//
// Reference: indexmap crate documentation
//            Rust Book §8 (Hash Maps)

use indexmap::IndexMap;

use crate::domain::{error::SchemaError, table::Table};

/// Distinct value → ascending row positions, for one column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnIndex {
    positions: IndexMap<String, Vec<usize>>,
}

impl ColumnIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `value` occurs at `row`.
    fn record(&mut self, value: &str, row: usize) {
        match self.positions.get_mut(value) {
            Some(rows) => rows.push(row),
            None => {
                self.positions.insert(value.to_string(), vec![row]);
            }
        }
    }

    /// Number of distinct values (the column's cardinality)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rows holding `value`, in ascending order
    pub fn positions(&self, value: &str) -> Option<&[usize]> {
        self.positions.get(value).map(Vec::as_slice)
    }

    /// Distinct values in first-seen order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    /// (value, rows) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.positions.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Build-phase state for the per-column indices.
#[derive(Debug)]
pub struct ColumnIndexer {
    columns: Vec<ColumnIndex>,
    rows_seen: usize,
}

impl ColumnIndexer {
    /// Start an empty index for a table with `column_count` columns
    pub fn new(column_count: usize) -> Self {
        Self {
            columns:   vec![ColumnIndex::new(); column_count],
            rows_seen: 0,
        }
    }

    /// Index the next data row.
    ///
    /// Fails with SchemaError if the row is not exactly as wide as
    /// the header; the failing row is not recorded.
    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) -> Result<(), SchemaError> {
        if row.len() != self.columns.len() {
            return Err(SchemaError {
                row:      self.rows_seen,
                expected: self.columns.len(),
                actual:   row.len(),
            });
        }

        for (index, cell) in self.columns.iter_mut().zip(row) {
            index.record(cell.as_ref(), self.rows_seen);
        }
        self.rows_seen += 1;
        Ok(())
    }

    pub fn rows_seen(&self) -> usize {
        self.rows_seen
    }

    /// Freeze the indices. Consumes the builder.
    pub fn finish(self) -> Vec<ColumnIndex> {
        self.columns
    }
}

/// Run pass one over an already materialised table.
pub fn index_table(table: &Table) -> Result<Vec<ColumnIndex>, SchemaError> {
    let mut indexer = ColumnIndexer::new(table.column_count());
    for row in &table.rows {
        indexer.push_row(row.as_slice())?;
    }

    tracing::debug!(
        "Indexed {} rows across {} columns",
        indexer.rows_seen(),
        table.column_count()
    );
    Ok(indexer.finish())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn zone_table() -> Table {
        Table::from_str_rows(
            &["Id", "Zone", "Price"],
            &[&["1", "RL", "100"], &["2", "NA", "150"], &["3", "RL", "200"]],
        )
    }

    #[test]
    fn test_positions_follow_row_order() {
        let idx = index_table(&zone_table()).unwrap();
        assert_eq!(idx[1].positions("RL"), Some(&[0, 2][..]));
        assert_eq!(idx[1].positions("NA"), Some(&[1][..]));
        assert_eq!(idx[1].positions("RM"), None);
    }

    #[test]
    fn test_values_iterate_in_first_seen_order() {
        let idx = index_table(&zone_table()).unwrap();
        let zones: Vec<&str> = idx[1].values().collect();
        assert_eq!(zones, vec!["RL", "NA"]);
    }

    #[test]
    fn test_cardinality_matches_distinct_values() {
        let idx = index_table(&zone_table()).unwrap();
        assert_eq!(idx[0].len(), 3);
        assert_eq!(idx[1].len(), 2);
        assert_eq!(idx[2].len(), 3);
    }

    #[test]
    fn test_every_row_is_recorded_once() {
        let idx = index_table(&zone_table()).unwrap();
        for column in &idx {
            let total: usize = column.iter().map(|(_, rows)| rows.len()).sum();
            assert_eq!(total, 3);
        }
    }

    #[test]
    fn test_ragged_row_is_schema_error() {
        let mut indexer = ColumnIndexer::new(3);
        indexer.push_row(&["1", "RL", "100"]).unwrap();
        let err = indexer.push_row(&["2", "RL"]).unwrap_err();
        assert_eq!(err, SchemaError { row: 1, expected: 3, actual: 2 });
        assert_eq!(indexer.rows_seen(), 1);
    }

    #[test]
    fn test_empty_cells_are_values_too() {
        let t = Table::from_str_rows(&["a"], &[&[""], &["x"], &[""]]);
        let idx = index_table(&t).unwrap();
        assert_eq!(idx[0].positions(""), Some(&[0, 2][..]));
    }
}
