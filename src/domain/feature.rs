// ============================================================
// Layer 3 — Encoded Feature Types
// ============================================================
// FeatureVector is one column's contribution to one row.
// FeatureMatrix is the whole encoded dataset, flattened
// row-major so an external tensor type can adopt the backing
// Vec directly:
//
//   features = [r0_f0, r0_f1, ..., r0_fC, r1_f0, ..., rR_fC]
//   targets  = [y0, y1, ..., yR]
//
// Reference: Rust Book §8 (Vectors), §5 (Structs)

use serde::{Deserialize, Serialize};

use crate::domain::error::NumericCellError;

/// Values and names produced by encoding one cell.
/// `values.len() == names.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: Vec<f64>,
    pub names:  Vec<String>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The assembled output of one encoding run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    /// Number of data rows
    pub rows: usize,

    /// Number of features per row, fixed by the first row
    pub cols: usize,

    /// Row-major feature values, `rows * cols` long
    pub features: Vec<f64>,

    /// One target value per row (zeros if the target column is absent)
    pub targets: Vec<f64>,

    /// Feature names, `cols` long, in feature order
    pub names: Vec<String>,

    /// Whether each feature came from a categorical column
    pub hints: Vec<bool>,

    /// Numeric cells that failed to parse and were encoded as 0.0
    pub fallbacks: Vec<NumericCellError>,
}

impl FeatureMatrix {
    /// Feature values of one row, or None past the end
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        self.features.get(start..start + self.cols)
    }

    /// Column index of a feature by name
    pub fn feature_position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// All values of one feature, top to bottom
    pub fn feature_column(&self, index: usize) -> Vec<f64> {
        (0..self.rows)
            .filter_map(|r| self.features.get(r * self.cols + index).copied())
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureMatrix {
        FeatureMatrix {
            rows:      2,
            cols:      3,
            features:  vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            targets:   vec![10.0, 20.0],
            names:     vec!["a".into(), "b".into(), "c".into()],
            hints:     vec![false, true, true],
            fallbacks: Vec::new(),
        }
    }

    #[test]
    fn test_row_slices_are_row_major() {
        let m = sample();
        assert_eq!(m.row(0), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(m.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn test_feature_column() {
        let m = sample();
        let b = m.feature_position("b").unwrap();
        assert_eq!(m.feature_column(b), vec![2.0, 5.0]);
    }

    #[test]
    fn test_zero_width_rows_are_empty_slices() {
        let m = FeatureMatrix { rows: 2, targets: vec![0.0, 0.0], ..Default::default() };
        assert_eq!(m.row(1), Some(&[][..]));
    }
}
