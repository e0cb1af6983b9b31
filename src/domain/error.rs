// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Typed errors for the encoding core. The application and CLI
// layers wrap these in anyhow::Error with extra context, but
// the core keeps them typed so callers can match on them.
//
//   SchemaError      — a data row's width disagrees with the
//                      header. Always fatal at ingestion.
//   NumericCellError — a cell that should be a number is not.
//                      Fatal only under ParsePolicy::Strict,
//                      otherwise recorded as a zero fallback.
//   EncodeError      — everything that can stop the assembler.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A data row whose cell count differs from the header's.
/// `row` is the 0-based data-row number (the header is not counted).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("expected columns: {expected}. Got {actual} columns in row {row}")]
pub struct SchemaError {
    pub row:      usize,
    pub expected: usize,
    pub actual:   usize,
}

/// A numeric or target cell that failed to parse as f64.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("cannot parse {raw:?} in column '{column}' (row {row}) as a number")]
pub struct NumericCellError {
    pub row:    usize,
    pub column: String,
    pub raw:    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The categorical hints are not aligned with the header
    #[error("expected {expected} categorical hints (one per column), got {actual}")]
    HintCount { expected: usize, actual: usize },

    /// A numeric cell failed to parse and the policy is Strict
    #[error(transparent)]
    Numeric(#[from] NumericCellError),
}
