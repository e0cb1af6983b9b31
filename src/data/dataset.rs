use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::feature::FeatureMatrix;

/// One encoded row: its feature values and its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub features: Vec<f64>,
    pub target:   f64,
}

/// Row-wise view of a FeatureMatrix for Burn's data tooling.
pub struct FeatureDataset {
    matrix: FeatureMatrix,
}

impl FeatureDataset {
    pub fn new(matrix: FeatureMatrix) -> Self { Self { matrix } }

    pub fn feature_names(&self) -> &[String] { &self.matrix.names }

    pub fn into_inner(self) -> FeatureMatrix { self.matrix }
}

impl Dataset<FeatureRow> for FeatureDataset {
    fn get(&self, index: usize) -> Option<FeatureRow> {
        let features = self.matrix.row(index)?.to_vec();
        let target   = *self.matrix.targets.get(index)?;
        Some(FeatureRow { features, target })
    }

    fn len(&self) -> usize {
        self.matrix.rows
    }
}
