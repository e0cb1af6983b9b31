// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting file output that doesn't belong in any
// specific business layer:
//
//   config_store.rs — EncodeConfig persistence
//                     Loads a run config from JSON and saves
//                     the config actually used next to the
//                     outputs, so a run can be reproduced.
//
//   report.rs       — Run outputs
//                     Writes the encoded matrix as CSV and a
//                     JSON report (names, hints, column stats,
//                     parse fallbacks).
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Encode config saving and loading
pub mod config_store;

/// Feature CSV and JSON report writer
pub mod report;
