// ============================================================
// Layer 5 — Feature Tensors
// ============================================================
// Hands the flat FeatureMatrix buffers to Burn as tensors:
//
//   features [rows * cols]  →  xs: Tensor<B, 2>  shape [rows, cols]
//   targets  [rows]         →  ys: Tensor<B, 2>  shape [rows, 1]
//
// The matrix is already row-major, so this is a copy plus a
// shape — no reordering. Values are narrowed to f32, the
// default float element of Burn's CPU backend.
//
// Reference: Burn Book §2 (Tensor)

use burn::prelude::*;
use burn::tensor::TensorData;

use crate::domain::feature::FeatureMatrix;

/// CPU backend used by the CLI
pub type CpuBackend = burn::backend::NdArray;

/// Feature and target tensors of one encoded dataset.
#[derive(Debug, Clone)]
pub struct FeatureTensors<B: Backend> {
    /// Shape [rows, cols]
    pub xs: Tensor<B, 2>,
    /// Shape [rows, 1]
    pub ys: Tensor<B, 2>,
}

impl<B: Backend> FeatureTensors<B> {
    pub fn from_matrix(matrix: &FeatureMatrix, device: &B::Device) -> Self {
        let xs_flat: Vec<f32> = matrix.features.iter().map(|&v| v as f32).collect();
        let ys_flat: Vec<f32> = matrix.targets.iter().map(|&v| v as f32).collect();

        let xs = Tensor::<B, 2>::from_data(
            TensorData::new(xs_flat, [matrix.rows, matrix.cols]),
            device,
        );
        let ys = Tensor::<B, 2>::from_data(
            TensorData::new(ys_flat, [matrix.rows, 1]),
            device,
        );

        Self { xs, ys }
    }

    /// ([rows, cols], [rows, 1])
    pub fn shapes(&self) -> ([usize; 2], [usize; 2]) {
        (self.xs.dims(), self.ys.dims())
    }
}
