// ============================================================
// Layer 4 — Column Statistics
// ============================================================
// Pure functions over the frozen column indices:
//
//   cardinality — number of distinct values per column
//   mode        — most frequent value per column
//
// Mode tie-break rule:
//   Walk the index in first-seen order, keeping a running
//   maximum that only moves on a STRICT increase. The value seen
//   first therefore wins any tie:
//
//     "RL" ×2, "RM" ×2, "FV" ×1   →  mode = "RL"
//
// A column with no rows has the empty string as its mode.
//
// infer_hints() is used when the caller does not say which
// columns are categorical: any non-missing value that does not
// parse as a float makes the whole column categorical.
//
// Reference: Rust Book §13 (Iterators)

use serde::{Deserialize, Serialize};

use crate::data::indexer::ColumnIndex;

/// Summary of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub cardinality: usize,
    pub mode:        String,
}

/// Distinct-value count of every column
pub fn cardinality(indices: &[ColumnIndex]) -> Vec<usize> {
    indices.iter().map(ColumnIndex::len).collect()
}

/// Most frequent value of one column (first-seen wins ties)
pub fn mode_of(index: &ColumnIndex) -> String {
    let mut best = "";
    let mut max = 0usize;

    for (value, rows) in index.iter() {
        if rows.len() > max {
            max = rows.len();
            best = value;
        }
    }

    best.to_string()
}

/// Most frequent value of every column
pub fn modes(indices: &[ColumnIndex]) -> Vec<String> {
    indices.iter().map(mode_of).collect()
}

/// Cardinality and mode of every column
pub fn column_stats(indices: &[ColumnIndex]) -> Vec<ColumnStats> {
    indices
        .iter()
        .map(|index| ColumnStats {
            cardinality: index.len(),
            mode:        mode_of(index),
        })
        .collect()
}

/// Guess categorical hints from the data itself.
pub fn infer_hints(indices: &[ColumnIndex], missing_token: &str) -> Vec<bool> {
    indices
        .iter()
        .map(|index| {
            index
                .values()
                .filter(|v| !v.is_empty() && *v != missing_token)
                .any(|v| v.trim().parse::<f64>().is_err())
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::indexer::index_table;
    use crate::domain::table::Table;

    fn indices(header: &[&str], rows: &[&[&str]]) -> Vec<ColumnIndex> {
        index_table(&Table::from_str_rows(header, rows)).unwrap()
    }

    #[test]
    fn test_cardinality_per_column() {
        let idx = indices(
            &["Id", "Zone"],
            &[&["1", "RL"], &["2", "NA"], &["3", "RL"]],
        );
        assert_eq!(cardinality(&idx), vec![3, 2]);
    }

    #[test]
    fn test_mode_is_most_frequent() {
        let idx = indices(&["Zone"], &[&["RM"], &["RL"], &["RL"]]);
        assert_eq!(modes(&idx), vec!["RL".to_string()]);
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        let idx = indices(&["Zone"], &[&["RM"], &["RL"], &["RL"], &["RM"], &["FV"]]);
        assert_eq!(mode_of(&idx[0]), "RM");
    }

    #[test]
    fn test_mode_of_empty_column_is_empty_string() {
        let idx = vec![ColumnIndex::new()];
        assert_eq!(modes(&idx), vec![String::new()]);
    }

    #[test]
    fn test_column_stats_combines_both() {
        let idx = indices(&["Zone"], &[&["RL"], &["NA"], &["RL"]]);
        assert_eq!(
            column_stats(&idx),
            vec![ColumnStats { cardinality: 2, mode: "RL".into() }]
        );
    }

    #[test]
    fn test_infer_hints_ignores_missing_values() {
        let idx = indices(
            &["LotArea", "Zone", "Frontage"],
            &[&["8450", "RL", "65"], &["9600", "RM", "NA"], &["11250", "RL", ""]],
        );
        assert_eq!(infer_hints(&idx, "NA"), vec![false, true, false]);
    }
}
