// ============================================================
// Layer 4 — Categorical Imputer
// ============================================================
// Replaces a missing categorical cell with its column's mode,
// but only for an explicit allow-list of column names.
//
// A cell is "missing" when it equals the missing token ("NA")
// or is the empty string. For columns outside the allow-list a
// missing cell passes through untouched and is encoded as a
// category of its own.
//
// The allow-list is injected configuration; the house-prices
// defaults live in DEFAULT_IMPUTED_COLUMNS.
//
// Reference: Rust Book §8 (Hash Sets)

use std::collections::HashSet;

/// Columns imputed by default (house-prices dataset conventions)
pub const DEFAULT_IMPUTED_COLUMNS: [&str; 10] = [
    "MSZoning",
    "BsmtFullBath",
    "BsmtHalfBath",
    "Utilities",
    "Functional",
    "Electrical",
    "KitchenQual",
    "SaleType",
    "Exterior1st",
    "Exterior2nd",
];

/// Sentinel for a missing value
pub const DEFAULT_MISSING_TOKEN: &str = "NA";

#[derive(Debug, Clone)]
pub struct Imputer {
    columns:       HashSet<String>,
    missing_token: String,
}

impl Imputer {
    pub fn new<I, S>(columns: I, missing_token: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns:       columns.into_iter().map(Into::into).collect(),
            missing_token: missing_token.into(),
        }
    }

    /// True for the missing token and for empty cells
    pub fn is_missing(&self, raw: &str) -> bool {
        raw.is_empty() || raw == self.missing_token
    }

    /// True if `column` is on the allow-list
    pub fn applies_to(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    /// Return `mode` for a missing cell of an allow-listed column,
    /// otherwise `raw` unchanged.
    pub fn impute<'a>(&self, raw: &'a str, column: &str, mode: &'a str) -> &'a str {
        if self.is_missing(raw) && self.applies_to(column) {
            mode
        } else {
            raw
        }
    }
}

impl Default for Imputer {
    fn default() -> Self {
        Self::new(DEFAULT_IMPUTED_COLUMNS, DEFAULT_MISSING_TOKEN)
    }
}
