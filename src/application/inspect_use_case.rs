// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// A quick look at a dataset before encoding it:
//
//   - cardinality and mode of every column
//   - whether each column looks categorical
//   - optionally, the mean target per category of one column
//     (the conditional expectation E[target | column = value])
//
// Only pass one of the pipeline runs here; nothing is encoded.

use anyhow::{bail, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::{
    cef::conditional_expectation,
    encoder::parse_numeric,
    indexer::{index_table, ColumnIndex},
    loader::CsvLoader,
    stats,
};
use crate::domain::{table::Table, traits::TableSource};
use crate::infra::report::ColumnReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    pub input:         String,
    pub target_column: String,
    pub cef_column:    Option<String>,
    pub missing_token: String,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            input:         "data/train.csv".to_string(),
            target_column: "SalePrice".to_string(),
            cef_column:    None,
            missing_token: "NA".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InspectReport {
    pub rows:    usize,
    pub columns: Vec<ColumnReport>,
    /// (column name, mean target per category) when requested
    pub cef:     Option<(String, IndexMap<String, f64>)>,
}

pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<InspectReport> {
        let table = CsvLoader::new(&self.config.input).load()?;
        let indices = index_table(&table)?;
        self.inspect(&table, &indices)
    }

    pub fn inspect(&self, table: &Table, indices: &[ColumnIndex]) -> Result<InspectReport> {
        let cfg = &self.config;
        let hints = stats::infer_hints(indices, &cfg.missing_token);

        let columns = table
            .header
            .iter()
            .zip(stats::column_stats(indices))
            .zip(hints)
            .map(|((name, s), categorical)| ColumnReport {
                name: name.clone(),
                cardinality: s.cardinality,
                mode: s.mode,
                categorical,
            })
            .collect();

        let cef = match &cfg.cef_column {
            None => None,
            Some(column) => {
                let Some(col) = table.column_position(column) else {
                    bail!("Column '{}' not found in header", column);
                };
                let Some(target) = table.column_position(&cfg.target_column) else {
                    bail!("Target column '{}' not found in header", cfg.target_column);
                };

                let ys: Vec<f64> = table
                    .rows
                    .iter()
                    .map(|row| parse_numeric(&row[target]).unwrap_or(0.0))
                    .collect();
                Some((column.clone(), conditional_expectation(&ys, &indices[col])))
            }
        };

        Ok(InspectReport {
            rows: table.row_count(),
            columns,
            cef,
        })
    }
}
