// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, error types and traits that define the
// core concepts of the encoder.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or CSV parsing
//   - Only plain Rust structs, enums, and traits
//
// The vocabulary defined here:
//   Table         — header + raw string rows, as read from disk
//   FeatureVector — one column's numeric contribution to one row
//   FeatureMatrix — the flattened, row-major encoding of a Table
//   SchemaError   — a row whose width disagrees with the header
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Raw tabular data: header and string cells
pub mod table;

// Encoded output: feature vectors and the assembled matrix
pub mod feature;

// Error taxonomy shared by every layer
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
