// ============================================================
// Layer 4 — Matrix Assembler
// ============================================================
// Pass two of the pipeline. Drives the column encoders over
// every row and flattens the result into a FeatureMatrix.
//
// Each column gets exactly one role, decided once up front:
//
//   Skip    — the row-identifier column, or an ignored column
//   Target  — parsed as a number and routed to the target vector
//   Feature — encoded (numeric or modified one-hot) into the row
//
// Per row, columns are visited in header order. Categorical
// cells go through the imputer before encoding. Feature names
// and per-feature hints are collected while processing row 0,
// and row 0's width becomes the column count of the matrix.
//
// If the target column never appears, the target vector is all
// zeros (one per row).
//
// Reference: Rust Book §13 (Iterators)
//            Rust Book §9 (Error Handling)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data::{
    encoder::{parse_numeric, ColumnEncoder},
    imputer::Imputer,
    indexer::ColumnIndex,
    stats,
};
use crate::domain::{
    error::{EncodeError, NumericCellError},
    feature::FeatureMatrix,
};

/// What to do with a numeric cell that does not parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Encode as 0.0, record the cell in `FeatureMatrix::fallbacks`
    #[default]
    ZeroFill,
    /// Abort the run with EncodeError::Numeric
    Strict,
}

/// Caller-supplied column roles
#[derive(Debug, Clone)]
pub struct AssemblyOptions {
    pub id_column:     String,
    pub target_column: String,
    pub ignored:       HashSet<String>,
    pub missing_token: String,
    pub parse_policy:  ParsePolicy,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            id_column:     "Id".to_string(),
            target_column: "SalePrice".to_string(),
            ignored:       HashSet::new(),
            missing_token: "NA".to_string(),
            parse_policy:  ParsePolicy::ZeroFill,
        }
    }
}

#[derive(Debug, Clone)]
enum ColumnRole {
    Skip,
    Target,
    Feature {
        encoder: ColumnEncoder,
        mode:    String,
    },
}

/// Encoding plan for one table, built from the frozen indices.
#[derive(Debug, Clone)]
pub struct MatrixAssembler {
    header:  Vec<String>,
    roles:   Vec<ColumnRole>,
    hints:   Vec<bool>,
    imputer: Imputer,
    policy:  ParsePolicy,
}

impl MatrixAssembler {
    /// Plan every column. `hints` must have one entry per header column.
    pub fn new(
        header:  &[String],
        indices: &[ColumnIndex],
        hints:   &[bool],
        options: &AssemblyOptions,
        imputer: Imputer,
    ) -> Result<Self, EncodeError> {
        if hints.len() != header.len() {
            return Err(EncodeError::HintCount {
                expected: header.len(),
                actual:   hints.len(),
            });
        }

        let modes = stats::modes(indices);
        let empty = ColumnIndex::new();

        let roles = header
            .iter()
            .enumerate()
            .map(|(j, name)| {
                if *name == options.id_column {
                    ColumnRole::Skip
                } else if *name == options.target_column {
                    ColumnRole::Target
                } else if options.ignored.contains(name) {
                    ColumnRole::Skip
                } else {
                    let index = indices.get(j).unwrap_or(&empty);
                    let encoder =
                        ColumnEncoder::for_column(name, hints[j], index, &options.missing_token);
                    tracing::debug!(
                        "Column '{}': {} feature(s){}",
                        name,
                        encoder.width(),
                        if encoder.is_categorical() { " (categorical)" } else { "" }
                    );
                    ColumnRole::Feature {
                        encoder,
                        mode: modes.get(j).cloned().unwrap_or_default(),
                    }
                }
            })
            .collect();

        Ok(Self {
            header: header.to_vec(),
            roles,
            hints: hints.to_vec(),
            imputer,
            policy: options.parse_policy,
        })
    }

    /// Names of the columns that will produce features
    pub fn feature_columns(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().filter_map(|role| match role {
            ColumnRole::Feature { encoder, .. } => Some(encoder.column()),
            _ => None,
        })
    }

    /// True if some header column is the target
    pub fn has_target(&self) -> bool {
        self.roles.iter().any(|r| matches!(r, ColumnRole::Target))
    }

    /// Encode every row.
    pub fn assemble<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Result<FeatureMatrix, EncodeError> {
        let mut matrix = FeatureMatrix::default();

        for (i, row) in rows.iter().enumerate() {
            let row_start = matrix.features.len();

            for (j, raw) in row.iter().enumerate() {
                let raw = raw.as_ref();
                let Some(role) = self.roles.get(j) else {
                    continue;
                };

                match role {
                    ColumnRole::Skip => {}
                    ColumnRole::Target => {
                        let y = self.numeric_or_fallback(parse_numeric(raw), i, j, raw, &mut matrix)?;
                        matrix.targets.push(y);
                    }
                    ColumnRole::Feature { encoder, mode } => {
                        let hint = self.hints[j];
                        let raw = if hint {
                            self.imputer.impute(raw, encoder.column(), mode)
                        } else {
                            raw
                        };

                        let before = matrix.features.len();
                        if let Err(e) = encoder.encode_into(raw, &mut matrix.features) {
                            let x = self.numeric_or_fallback(Err(e), i, j, raw, &mut matrix)?;
                            matrix.features.push(x);
                        }

                        if i == 0 {
                            let width = matrix.features.len() - before;
                            matrix.names.extend(encoder.feature_names().iter().cloned());
                            matrix.hints.extend(std::iter::repeat(hint).take(width));
                        }
                    }
                }
            }

            // End of a row: row 0 fixes the column count
            if i == 0 {
                matrix.cols = matrix.features.len() - row_start;
            }
        }

        matrix.rows = rows.len();
        if matrix.targets.is_empty() {
            matrix.targets = vec![0.0; matrix.rows];
        }

        if !matrix.fallbacks.is_empty() {
            tracing::warn!(
                "{} numeric cell(s) could not be parsed and were encoded as 0.0",
                matrix.fallbacks.len()
            );
        }
        tracing::info!(
            "Encoded {} rows into {} features",
            matrix.rows,
            matrix.cols
        );
        Ok(matrix)
    }

    fn numeric_or_fallback(
        &self,
        parsed: Result<f64, std::num::ParseFloatError>,
        row:    usize,
        col:    usize,
        raw:    &str,
        matrix: &mut FeatureMatrix,
    ) -> Result<f64, EncodeError> {
        match parsed {
            Ok(v) => Ok(v),
            Err(_) => {
                let cell = NumericCellError {
                    row,
                    column: self.header[col].clone(),
                    raw:    raw.to_string(),
                };
                match self.policy {
                    ParsePolicy::Strict => Err(cell.into()),
                    ParsePolicy::ZeroFill => {
                        tracing::debug!("{cell}; using 0.0");
                        matrix.fallbacks.push(cell);
                        Ok(0.0)
                    }
                }
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::indexer::index_table;
    use crate::domain::table::Table;

    fn options(target: &str, ignored: &[&str]) -> AssemblyOptions {
        AssemblyOptions {
            target_column: target.to_string(),
            ignored: ignored.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn run(table: &Table, hints: &[bool], opts: &AssemblyOptions, imputer: Imputer) -> FeatureMatrix {
        let idx = index_table(table).unwrap();
        MatrixAssembler::new(&table.header, &idx, hints, opts, imputer)
            .unwrap()
            .assemble(&table.rows)
            .unwrap()
    }

    fn zone_table() -> Table {
        Table::from_str_rows(
            &["Id", "Zone", "Price"],
            &[&["1", "RL", "100"], &["2", "NA", "150"], &["3", "RL", "200"]],
        )
    }

    #[test]
    fn test_zone_scenario() {
        // Zone is not allow-listed, so NA stays NA and becomes position 0
        let m = run(&zone_table(), &[false, true, false], &options("Price", &[]), Imputer::default());

        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 1);
        assert_eq!(m.names, vec!["Zone_RL".to_string()]);
        assert_eq!(m.features, vec![1.0, 0.0, 1.0]);
        assert_eq!(m.targets, vec![100.0, 150.0, 200.0]);
        assert_eq!(m.hints, vec![true]);
    }

    #[test]
    fn test_allow_listed_column_is_imputed_with_mode() {
        let imputer = Imputer::new(["Zone"], "NA");
        let m = run(&zone_table(), &[false, true, false], &options("Price", &[]), imputer);

        // NA row now encodes as the mode RL
        assert_eq!(m.features, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_missing_target_gives_zero_vector() {
        let m = run(&zone_table(), &[false, true, false], &options("SalePrice", &[]), Imputer::default());
        assert_eq!(m.targets, vec![0.0; 3]);
        // Price is now an ordinary numeric feature
        assert_eq!(m.names, vec!["Zone_RL".to_string(), "Price".to_string()]);
        assert_eq!(m.cols, 2);
    }

    #[test]
    fn test_ignored_columns_do_not_change_row_count() {
        let m = run(&zone_table(), &[false, true, false], &options("Price", &["Zone"]), Imputer::default());
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 0);
        assert!(m.features.is_empty());
        assert_eq!(m.targets.len(), 3);
    }

    #[test]
    fn test_target_ignores_categorical_hint() {
        let m = run(&zone_table(), &[false, true, true], &options("Price", &[]), Imputer::default());
        assert_eq!(m.targets, vec![100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_bad_numeric_cell_falls_back_to_zero() {
        let t = Table::from_str_rows(
            &["Id", "LotArea", "SalePrice"],
            &[&["1", "8450", "208500"], &["2", "abc", "181500"]],
        );
        let m = run(&t, &[false, false, false], &AssemblyOptions::default(), Imputer::default());

        assert_eq!(m.features, vec![8450.0, 0.0]);
        assert_eq!(m.fallbacks.len(), 1);
        assert_eq!(m.fallbacks[0].row, 1);
        assert_eq!(m.fallbacks[0].column, "LotArea");
        assert_eq!(m.fallbacks[0].raw, "abc");
    }

    #[test]
    fn test_strict_policy_aborts_on_bad_cell() {
        let t = Table::from_str_rows(&["Id", "LotArea"], &[&["1", "abc"]]);
        let idx = index_table(&t).unwrap();
        let opts = AssemblyOptions { parse_policy: ParsePolicy::Strict, ..Default::default() };
        let asm = MatrixAssembler::new(&t.header, &idx, &[false, false], &opts, Imputer::default()).unwrap();

        match asm.assemble(&t.rows) {
            Err(EncodeError::Numeric(cell)) => assert_eq!(cell.column, "LotArea"),
            other => panic!("expected numeric error, got {other:?}"),
        }
    }

    #[test]
    fn test_names_match_first_row_and_shape_is_consistent() {
        let t = Table::from_str_rows(
            &["Id", "MSZoning", "LotArea", "Street", "SalePrice"],
            &[
                &["1", "RL", "8450", "Pave", "208500"],
                &["2", "RM", "9600", "Grvl", "181500"],
                &["3", "NA", "11250", "Pave", "223500"],
                &["4", "FV", "9550", "Pave", "140000"],
            ],
        );
        let m = run(&t, &[false, true, false, true, false], &AssemblyOptions::default(), Imputer::default());

        // NA stays in the index, so it still takes the default slot
        assert_eq!(
            m.names,
            vec!["MSZoning_FV", "MSZoning_RL", "MSZoning_RM", "LotArea", "Street_Pave"]
        );
        assert_eq!(m.names.len(), m.cols);
        assert_eq!(m.hints, vec![true, true, true, false, true]);
        assert_eq!(m.features.len(), m.rows * m.cols);
        assert_eq!(m.targets.len(), m.rows);

        assert_eq!(m.row(1).unwrap(), &[0.0, 0.0, 1.0, 9600.0, 0.0]);
        // Row 2 had MSZoning NA → imputed to the mode RL (first seen of a four-way tie)
        assert_eq!(m.row(2).unwrap(), &[0.0, 1.0, 0.0, 11250.0, 1.0]);
        assert_eq!(m.row(3).unwrap(), &[1.0, 0.0, 0.0, 9550.0, 1.0]);
    }

    #[test]
    fn test_hint_count_mismatch_is_rejected() {
        let t = zone_table();
        let idx = index_table(&t).unwrap();
        let err = MatrixAssembler::new(&t.header, &idx, &[true], &AssemblyOptions::default(), Imputer::default())
            .unwrap_err();
        assert_eq!(err, EncodeError::HintCount { expected: 3, actual: 1 });
    }

    #[test]
    fn test_no_rows_gives_empty_matrix() {
        let t = Table::from_str_rows(&["Id", "Zone"], &[]);
        let m = run(&t, &[false, true], &AssemblyOptions::default(), Imputer::default());
        assert_eq!(m.rows, 0);
        assert_eq!(m.cols, 0);
        assert!(m.targets.is_empty());
    }

    #[test]
    fn test_feature_columns_and_target_detection() {
        let t = zone_table();
        let idx = index_table(&t).unwrap();
        let asm = MatrixAssembler::new(&t.header, &idx, &[false, true, false], &options("Price", &[]), Imputer::default())
            .unwrap();
        assert_eq!(asm.feature_columns().collect::<Vec<_>>(), vec!["Zone"]);
        assert!(asm.has_target());
    }
}
