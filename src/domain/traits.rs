// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only depends on these traits, so the
// concrete source of a Table (a CSV file today, an in-memory
// fixture in tests) can be swapped without touching the
// encoding workflow.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::table::Table;

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Any component that can produce a fully materialised Table.
///
/// Implementations:
///   - CsvLoader → reads a comma-separated file with a header row
///   - Table     → an already-loaded table is its own source
pub trait TableSource {
    /// Load the whole table. Ragged rows are an error.
    fn load(&self) -> Result<Table>;
}

impl TableSource for Table {
    fn load(&self) -> Result<Table> {
        self.validate()?;
        Ok(self.clone())
    }
}
