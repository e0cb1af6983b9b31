// ============================================================
// Layer 2 — EncodeUseCase
// ============================================================
// Orchestrates one encoding run in order:
//
//   Step 1: Read CSV + build column indices  (Layer 4 - data, pass one)
//   Step 2: Column statistics                (Layer 4 - data)
//   Step 3: Resolve categorical hints        (config or inferred)
//   Step 4: Plan and assemble the matrix     (Layer 4 - data, pass two)
//   Step 5: Build tensors                    (Layer 5 - ml)
//   Step 6: Save config and reports          (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::data::{
    assembler::{AssemblyOptions, MatrixAssembler, ParsePolicy},
    dataset::{FeatureDataset, FeatureRow},
    imputer::{Imputer, DEFAULT_IMPUTED_COLUMNS, DEFAULT_MISSING_TOKEN},
    indexer::{index_table, ColumnIndex},
    loader::CsvLoader,
    stats::{self, ColumnStats},
};
use crate::domain::{feature::FeatureMatrix, table::Table, traits::TableSource};
use crate::infra::{
    config_store::ConfigStore,
    report::{ColumnReport, EncodeReport, ReportWriter},
};
use crate::ml::tensor::{CpuBackend, FeatureTensors};

// ─── Encode Configuration ────────────────────────────────────────────────────
// Every knob of an encoding run. Serialisable so a run can be
// described in a JSON file and reproduced later; any field left
// out of the JSON takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    pub input:           String,
    pub output_dir:      String,
    pub delimiter:       char,
    pub id_column:       String,
    pub target_column:   String,
    pub ignored:         Vec<String>,
    /// Explicit categorical columns; None = infer from the data
    pub categorical:     Option<Vec<String>>,
    pub imputed_columns: Vec<String>,
    pub missing_token:   String,
    pub parse_policy:    ParsePolicy,
    pub preview_rows:    usize,
    pub write_outputs:   bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            input:           "data/train.csv".to_string(),
            output_dir:      "output".to_string(),
            delimiter:       ',',
            id_column:       "Id".to_string(),
            target_column:   "SalePrice".to_string(),
            ignored:         Vec::new(),
            categorical:     None,
            imputed_columns: DEFAULT_IMPUTED_COLUMNS.iter().map(|s| s.to_string()).collect(),
            missing_token:   DEFAULT_MISSING_TOKEN.to_string(),
            parse_policy:    ParsePolicy::ZeroFill,
            preview_rows:    0,
            write_outputs:   true,
        }
    }
}

impl EncodeConfig {
    /// One hint per header column
    pub fn resolve_hints(&self, header: &[String], indices: &[ColumnIndex]) -> Vec<bool> {
        match &self.categorical {
            Some(names) => {
                let names: HashSet<&str> = names.iter().map(String::as_str).collect();
                header.iter().map(|h| names.contains(h.as_str())).collect()
            }
            None => stats::infer_hints(indices, &self.missing_token),
        }
    }

    pub fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            id_column:     self.id_column.clone(),
            target_column: self.target_column.clone(),
            ignored:       self.ignored.iter().cloned().collect(),
            missing_token: self.missing_token.clone(),
            parse_policy:  self.parse_policy,
        }
    }

    pub fn imputer(&self) -> Imputer {
        Imputer::new(self.imputed_columns.iter().cloned(), self.missing_token.clone())
    }

    fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .map_err(|_| anyhow::anyhow!("Delimiter {:?} is not a single-byte character", self.delimiter))
    }
}

/// What an encode run produced
#[derive(Debug, Clone)]
pub struct EncodeOutcome {
    pub matrix:        FeatureMatrix,
    pub report:        EncodeReport,
    pub tensor_shapes: ([usize; 2], [usize; 2]),
    pub preview:       Vec<FeatureRow>,
}

// ─── EncodeUseCase ────────────────────────────────────────────────────────────
pub struct EncodeUseCase {
    config: EncodeConfig,
}

impl EncodeUseCase {
    pub fn new(config: EncodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    /// Read the configured CSV and run the whole pipeline
    pub fn execute(&self) -> Result<EncodeOutcome> {
        let cfg = &self.config;

        let loader = CsvLoader::new(&cfg.input).with_delimiter(cfg.delimiter_byte()?);
        let outcome = self.encode_source(&loader)?;

        // ── Step 6: Persist config and reports ────────────────────────────────
        if cfg.write_outputs {
            ConfigStore::new(&cfg.output_dir).save(cfg)?;

            let writer = ReportWriter::new(&cfg.output_dir)?;
            writer.write_features(&outcome.matrix, &cfg.target_column)?;
            writer.write_report(&outcome.report)?;
            tracing::info!("Wrote outputs to '{}'", cfg.output_dir);
        }

        Ok(outcome)
    }

    /// Load from any TableSource, index, and encode
    pub fn encode_source(&self, source: &dyn TableSource) -> Result<EncodeOutcome> {
        // ── Step 1: Materialise the table and index every column (pass one) ──
        let table = source.load()?;
        let indices = index_table(&table)?;
        self.encode_table(&table, &indices)
    }

    /// Steps 2–5 over an already indexed table
    pub fn encode_table(&self, table: &Table, indices: &[ColumnIndex]) -> Result<EncodeOutcome> {
        let cfg = &self.config;

        // ── Step 2: Column statistics ─────────────────────────────────────────
        let column_stats = stats::column_stats(indices);
        for (name, s) in table.header.iter().zip(&column_stats) {
            tracing::debug!("{}: cardinality={}, mode={:?}", name, s.cardinality, s.mode);
        }

        // ── Step 3: Categorical hints ─────────────────────────────────────────
        let hints = cfg.resolve_hints(&table.header, indices);
        tracing::info!(
            "{} of {} columns treated as categorical",
            hints.iter().filter(|&&h| h).count(),
            hints.len()
        );

        // ── Step 4: Plan + assemble (pass two) ────────────────────────────────
        let assembler = MatrixAssembler::new(
            &table.header,
            indices,
            &hints,
            &cfg.assembly_options(),
            cfg.imputer(),
        )?;
        if !assembler.has_target() {
            tracing::warn!(
                "Target column '{}' not found; target vector will be all zeros",
                cfg.target_column
            );
        }
        let matrix = assembler
            .assemble(&table.rows)
            .context("Encoding failed")?;

        // ── Step 5: Tensors ───────────────────────────────────────────────────
        let device = Default::default();
        let tensors = FeatureTensors::<CpuBackend>::from_matrix(&matrix, &device);
        let tensor_shapes = tensors.shapes();
        tracing::info!("xs: {:?}, ys: {:?}", tensor_shapes.0, tensor_shapes.1);

        let report = build_report(cfg, &table.header, &column_stats, &hints, &matrix);

        let dataset = FeatureDataset::new(matrix);
        let preview = (0..cfg.preview_rows)
            .map_while(|i| burn::data::dataset::Dataset::get(&dataset, i))
            .collect();

        Ok(EncodeOutcome {
            matrix: dataset.into_inner(),
            report,
            tensor_shapes,
            preview,
        })
    }
}

fn build_report(
    cfg:          &EncodeConfig,
    header:       &[String],
    column_stats: &[ColumnStats],
    hints:        &[bool],
    matrix:       &FeatureMatrix,
) -> EncodeReport {
    let columns = header
        .iter()
        .zip(column_stats)
        .zip(hints)
        .map(|((name, s), &categorical)| ColumnReport {
            name:        name.clone(),
            cardinality: s.cardinality,
            mode:        s.mode.clone(),
            categorical,
        })
        .collect();

    EncodeReport {
        rows:          matrix.rows,
        cols:          matrix.cols,
        target_column: cfg.target_column.clone(),
        feature_names: matrix.names.clone(),
        feature_hints: matrix.hints.clone(),
        columns,
        fallbacks:     matrix.fallbacks.clone(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HOUSES: &str = "\
Id,MSZoning,LotArea,Street,SalePrice
1,RL,8450,Pave,208500
2,RL,9600,Pave,181500
3,NA,11250,Pave,223500
4,RM,abc,Grvl,140000
";

    #[test]
    fn test_end_to_end_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("train.csv");
        fs::write(&input, HOUSES).unwrap();
        let out = dir.path().join("out");

        let cfg = EncodeConfig {
            input:        input.display().to_string(),
            output_dir:   out.display().to_string(),
            categorical:  Some(vec!["MSZoning".into(), "Street".into()]),
            preview_rows: 2,
            ..Default::default()
        };
        let outcome = EncodeUseCase::new(cfg).execute().unwrap();
        let m = &outcome.matrix;

        assert_eq!(m.names, vec!["MSZoning_RL", "MSZoning_RM", "LotArea", "Street_Pave"]);
        assert_eq!(m.rows, 4);
        assert_eq!(m.targets, vec![208500.0, 181500.0, 223500.0, 140000.0]);

        // Row 2: MSZoning NA is allow-listed → imputed to mode RL
        assert_eq!(m.row(2).unwrap(), &[1.0, 0.0, 11250.0, 1.0]);
        // Row 3: "abc" fell back to 0.0 and was recorded
        assert_eq!(m.row(3).unwrap(), &[0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m.fallbacks.len(), 1);

        assert_eq!(outcome.tensor_shapes, ([4, 4], [4, 1]));
        assert_eq!(outcome.preview.len(), 2);
        assert_eq!(outcome.preview[0].target, 208500.0);

        assert!(out.join("features.csv").exists());
        assert!(out.join("report.json").exists());
        assert!(out.join("encode_config.json").exists());
    }

    #[test]
    fn test_explicit_categorical_list_and_strict_policy() {
        let table = Table::from_str_rows(
            &["Id", "MSSubClass", "SalePrice"],
            &[&["1", "60", "10"], &["2", "20", "20"], &["3", "60", "30"]],
        );
        let indices = index_table(&table).unwrap();

        let cfg = EncodeConfig {
            categorical:   Some(vec!["MSSubClass".into()]),
            parse_policy:  ParsePolicy::Strict,
            write_outputs: false,
            ..Default::default()
        };
        let outcome = EncodeUseCase::new(cfg).encode_table(&table, &indices).unwrap();

        // Integer categories sort numerically: 20 is the default slot
        assert_eq!(outcome.matrix.names, vec!["MSSubClass_60"]);
        assert_eq!(outcome.matrix.features, vec![1.0, 0.0, 1.0]);
        assert_eq!(outcome.report.columns[1].cardinality, 2);
    }

    #[test]
    fn test_strict_policy_surfaces_bad_cells() {
        let table = Table::from_str_rows(&["LotArea"], &[&["abc"]]);
        let cfg = EncodeConfig {
            categorical:   Some(Vec::new()),
            parse_policy:  ParsePolicy::Strict,
            write_outputs: false,
            ..Default::default()
        };
        assert!(EncodeUseCase::new(cfg).encode_source(&table).is_err());
    }

    #[test]
    fn test_inferred_hints_from_in_memory_source() {
        let table = Table::from_str_rows(
            &["Id", "Zone", "Price"],
            &[&["1", "RL", "100"], &["2", "NA", "150"], &["3", "RL", "200"]],
        );
        let cfg = EncodeConfig {
            target_column: "Price".into(),
            write_outputs: false,
            ..Default::default()
        };
        let m = EncodeUseCase::new(cfg).encode_source(&table).unwrap().matrix;

        // Zone is not allow-listed: NA keeps the default slot
        assert_eq!(m.names, vec!["Zone_RL"]);
        assert_eq!(m.features, vec![1.0, 0.0, 1.0]);
        assert_eq!(m.targets, vec![100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_multibyte_delimiter_is_rejected() {
        let cfg = EncodeConfig { delimiter: '→', ..Default::default() };
        assert!(cfg.delimiter_byte().is_err());
    }
}
