// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a CSV file to a flat numeric feature matrix.
//
// The pipeline runs in two passes:
//
//   .csv file
//       │
//       ▼
//   CsvLoader           → header + raw string rows (Table)
//       │
//       ▼
//   ColumnIndexer       → value → row positions, per column   ┐
//       │                                                     │ pass one
//       ▼                                                     │ (needs every
//   stats               → cardinality + mode, per column      │  row first)
//       │                                                     │
//       ▼                                                     │
//   CategoryOrder       → canonical category list             ┘
//       │
//       ▼
//   Imputer             → NA / empty → mode (allow-list only) ┐
//       │                                                     │ pass two
//       ▼                                                     │ (row by row)
//   ColumnEncoder       → number or modified one-hot          │
//       │                                                     │
//       ▼                                                     │
//   MatrixAssembler     → FeatureMatrix + target vector       ┘
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §13 (Iterators and Closures)

/// Reads CSV files into a Table, indexing as it goes
pub mod loader;

/// Per-column value → row positions index
pub mod indexer;

/// Cardinality, mode and categorical-hint inference
pub mod stats;

/// Deterministic category ordering
pub mod ordering;

/// Mode imputation for allow-listed columns
pub mod imputer;

/// Numeric and modified one-hot cell encoders
pub mod encoder;

/// Drives the encoders over every row
pub mod assembler;

/// Mean target value per category
pub mod cef;

/// Implements Burn's Dataset trait over encoded rows
pub mod dataset;
