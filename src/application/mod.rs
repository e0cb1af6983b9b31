// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal.
//
// Rules for this layer:
//   - No encoding logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and configuration
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The CSV → feature matrix workflow
pub mod encode_use_case;

// Column statistics and per-category target means
pub mod inspect_use_case;
