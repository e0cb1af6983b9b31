// ============================================================
// Layer 5 — ML / Tensor Layer (Burn)
// ============================================================
// The encoded matrix is meant for downstream modeling; this
// layer turns it into Burn tensors so a model can consume it
// directly.
//
//   tensor.rs — FeatureMatrix → xs [rows, cols], ys [rows, 1]
//
// Reference: Burn Book §2 (Tensor), §4 (Datasets)

/// Feature matrix → Burn tensors
pub mod tensor;
