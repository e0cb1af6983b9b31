// ============================================================
// Layer 4 — Feature Encoder
// ============================================================
// Converts one raw cell into zero or more f64 features.
//
// Numeric columns → one feature, named after the column:
//     "8450"  →  [8450.0]                 names: ["LotArea"]
//
// Categorical columns → "modified one-hot":
//   Plain one-hot spends one slot per category. Because a row
//   with every slot at 0.0 is otherwise unused, we let it stand
//   for the category at position 0 of the canonical order and
//   drop that slot, saving one dimension per column.
//
//     order = ["NA", "FV", "RL", "RM"]
//     names = ["Zone_FV", "Zone_RL", "Zone_RM"]
//     "RL"  →  [0.0, 1.0, 0.0]
//     "NA"  →  [0.0, 0.0, 0.0]           (the default category)
//
// The width and names of an encoder are fixed when it is built,
// so every row of a column produces identically shaped output.
//
// Numeric parse failures are returned as errors; whether they
// abort the run or become 0.0 is the assembler's decision.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            Rust Book §9 (Recoverable Errors with Result)

use std::num::ParseFloatError;

use crate::data::{indexer::ColumnIndex, ordering::CategoryOrder};
use crate::domain::feature::FeatureVector;

/// Parse a numeric cell. Surrounding whitespace is ignored.
pub fn parse_numeric(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().parse::<f64>()
}

/// How a column turns into features
#[derive(Debug, Clone, PartialEq)]
pub enum Encoding {
    Numeric,
    Categorical(CategoryOrder),
}

/// A ready-to-use encoder for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnEncoder {
    column:   String,
    encoding: Encoding,
    names:    Vec<String>,
}

impl ColumnEncoder {
    /// Single-feature encoder for a numeric column
    pub fn numeric(column: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            names:    vec![column.clone()],
            column,
            encoding: Encoding::Numeric,
        }
    }

    /// Modified one-hot encoder over a canonical category order
    pub fn categorical(column: impl Into<String>, order: CategoryOrder) -> Self {
        let column = column.into();
        let names = order
            .encoded()
            .iter()
            .map(|category| format!("{column}_{category}"))
            .collect();
        Self {
            column,
            encoding: Encoding::Categorical(order),
            names,
        }
    }

    /// Pick the variant from the caller's hint
    pub fn for_column(
        column:        &str,
        categorical:   bool,
        index:         &ColumnIndex,
        missing_token: &str,
    ) -> Self {
        if categorical {
            Self::categorical(column, CategoryOrder::from_index(index, missing_token))
        } else {
            Self::numeric(column)
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self.encoding, Encoding::Categorical(_))
    }

    /// Number of features this column contributes to every row
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// Feature names in slot order
    pub fn feature_names(&self) -> &[String] {
        &self.names
    }

    /// Append the encoding of `raw` to `out`.
    ///
    /// On a numeric parse error nothing is appended.
    pub fn encode_into(&self, raw: &str, out: &mut Vec<f64>) -> Result<(), ParseFloatError> {
        match &self.encoding {
            Encoding::Numeric => {
                out.push(parse_numeric(raw)?);
            }
            Encoding::Categorical(order) => {
                let start = out.len();
                out.resize(start + self.width(), 0.0);

                // Position 0 (and unknown values) stay all zeros
                if let Some(pos) = order.position(raw).filter(|&p| p > 0) {
                    out[start + pos - 1] = 1.0;
                }
            }
        }
        Ok(())
    }

    /// Encode one cell into a standalone FeatureVector
    pub fn encode(&self, raw: &str) -> Result<FeatureVector, ParseFloatError> {
        let mut values = Vec::with_capacity(self.width());
        self.encode_into(raw, &mut values)?;
        Ok(FeatureVector {
            values,
            names: self.names.clone(),
        })
    }
}
