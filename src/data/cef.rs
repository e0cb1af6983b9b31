// ============================================================
// Layer 4 — Conditional Expectation per Category
// ============================================================
// For a categorical column, the mean target value of the rows
// holding each category:
//
//   E[SalePrice | Zone = "RL"] = mean(SalePrice[rows of "RL"])
//
// The column index already stores the rows of every value, so
// this is a single pass over it. Categories come back in the
// index's first-seen order.
//
// Reference: Rust Book §13 (Iterators)

use indexmap::IndexMap;

use crate::data::indexer::ColumnIndex;

/// Mean of `targets` over the rows of each category.
/// Rows past the end of `targets` are not counted.
pub fn conditional_expectation(targets: &[f64], index: &ColumnIndex) -> IndexMap<String, f64> {
    index
        .iter()
        .map(|(value, rows)| {
            let ys: Vec<f64> = rows.iter().filter_map(|&r| targets.get(r).copied()).collect();
            let mean = if ys.is_empty() {
                0.0
            } else {
                ys.iter().sum::<f64>() / ys.len() as f64
            };
            (value.to_string(), mean)
        })
        .collect()
}
