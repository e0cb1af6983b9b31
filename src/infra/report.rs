// ============================================================
// Layer 6 — Report Writer
// ============================================================
// Persists the result of an encode run for later analysis and
// plotting (plotting itself happens outside this tool).
//
// Files written into the output directory:
//
//   features.csv — one line per data row, the feature values
//                  followed by the target:
//                    MSZoning_FV,MSZoning_RL,LotArea,SalePrice
//                    0,1,8450,208500
//                    ...
//
//   report.json  — shape, feature names and hints, per-column
//                  cardinality/mode, and every numeric cell
//                  that fell back to 0.0
//
// Reference: csv crate documentation
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::domain::{error::NumericCellError, feature::FeatureMatrix};

pub const FEATURES_FILE: &str = "features.csv";
pub const REPORT_FILE: &str = "report.json";

/// Per source column summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name:        String,
    pub cardinality: usize,
    pub mode:        String,
    pub categorical: bool,
}

/// Everything report.json records about one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeReport {
    pub rows:          usize,
    pub cols:          usize,
    pub target_column: String,
    pub feature_names: Vec<String>,
    pub feature_hints: Vec<bool>,
    pub columns:       Vec<ColumnReport>,
    pub fallbacks:     Vec<NumericCellError>,
}

/// Writes run outputs into one directory.
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Create the writer, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn features_path(&self) -> PathBuf {
        self.dir.join(FEATURES_FILE)
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.join(REPORT_FILE)
    }

    /// Write the feature matrix plus target as CSV
    pub fn write_features(&self, matrix: &FeatureMatrix, target_column: &str) -> Result<()> {
        let path = self.features_path();
        let mut wtr = csv::Writer::from_path(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        let mut header: Vec<&str> = matrix.names.iter().map(String::as_str).collect();
        header.push(target_column);
        wtr.write_record(&header)?;

        for (r, target) in matrix.targets.iter().enumerate().take(matrix.rows) {
            let mut line: Vec<String> = matrix
                .row(r)
                .unwrap_or(&[])
                .iter()
                .map(|v| v.to_string())
                .collect();
            line.push(target.to_string());
            wtr.write_record(&line)?;
        }
        wtr.flush()?;

        tracing::debug!("Wrote {} feature rows to '{}'", matrix.rows, path.display());
        Ok(())
    }

    /// Write report.json
    pub fn write_report(&self, report: &EncodeReport) -> Result<()> {
        let path = self.report_path();
        fs::write(&path, serde_json::to_string_pretty(report)?)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

        tracing::debug!("Wrote report to '{}'", path.display());
        Ok(())
    }
}
