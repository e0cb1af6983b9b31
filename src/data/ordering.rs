// ============================================================
// Layer 4 — Category Orderer
// ============================================================
// Assigns a deterministic total order to a column's distinct
// values. The order decides which one-hot slot a value gets and
// how the resulting features are named, so it must never depend
// on hash iteration.
//
// Two branches:
//
//   numeric-categorical — every value is the missing token or an
//     integer. Sort by integer value (spelling breaks ties, so
//     "01" comes before "1"):
//         ["10", "2", "NA", "1"]  →  ["NA", "1", "2", "10"]
//
//   string-categorical — anything else. Sort by code point:
//         ["RM", "FV", "RL"]      →  ["FV", "RL", "RM"]
//
// In BOTH branches the missing token, when present, is moved to
// position 0 and the other values keep their sorted order.
// Position 0 is the implicit default of the modified one-hot
// encoding, so "missing" is always the all-zeros vector.
//
// Reference: Rust Book §8 (Vectors), std::cmp::Ordering

use std::cmp::Ordering;

use crate::data::indexer::ColumnIndex;

/// The canonical category list of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    values:  Vec<String>,
    numeric: bool,
}

impl CategoryOrder {
    /// Order the distinct values of `index`.
    pub fn from_index(index: &ColumnIndex, missing_token: &str) -> Self {
        Self::from_values(index.values(), missing_token)
    }

    /// Order an arbitrary set of distinct values.
    pub fn from_values<'a, I>(values: I, missing_token: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut has_missing = false;
        let mut others: Vec<&str> = Vec::new();
        for v in values {
            if v == missing_token {
                has_missing = true;
            } else {
                others.push(v);
            }
        }

        // Every non-missing value must be an integer for the numeric branch
        let parsed: Option<Vec<(i64, &str)>> = others
            .iter()
            .map(|v| v.parse::<i64>().ok().map(|n| (n, *v)))
            .collect();

        let numeric = parsed.is_some();
        let sorted: Vec<String> = match parsed {
            Some(mut ints) => {
                ints.sort_by(|a, b| match a.0.cmp(&b.0) {
                    Ordering::Equal => a.1.cmp(b.1),
                    other => other,
                });
                ints.into_iter().map(|(_, v)| v.to_string()).collect()
            }
            None => {
                others.sort_unstable();
                others.into_iter().map(str::to_string).collect()
            }
        };

        let mut ordered = Vec::with_capacity(sorted.len() + 1);
        if has_missing {
            ordered.push(missing_token.to_string());
        }
        ordered.extend(sorted);

        Self { values: ordered, numeric }
    }

    /// Categories in canonical order; position 0 is the default
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// True if the column was ordered as integers
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Canonical position of a value, if it is a known category
    pub fn position(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Categories that get their own one-hot slot (positions 1..N-1)
    pub fn encoded(&self) -> &[String] {
        self.values.get(1..).unwrap_or(&[])
    }
}
