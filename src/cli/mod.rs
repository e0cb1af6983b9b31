// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, using `clap`.
// All work is delegated to Layer 2 (application); this layer
// only routes and prints.
//
// Two commands are supported:
//   1. `encode`  — CSV → feature matrix (+ reports)
//   2. `inspect` — per-column cardinality / mode, optional CEF
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EncodeArgs, InspectArgs};

use crate::application::encode_use_case::EncodeConfig;
use crate::infra::config_store::ConfigStore;

#[derive(Parser, Debug)]
#[command(
    name = "tabular-encoder",
    version,
    about = "Encode a CSV dataset into a numeric feature matrix (modified one-hot for categories)."
)]
pub struct Cli {
    /// The subcommand to run (encode or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Encode(args)  => run_encode(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

/// Handles the `encode` subcommand.
fn run_encode(args: EncodeArgs) -> Result<()> {
    use crate::application::encode_use_case::EncodeUseCase;

    // --config gives the base, flags override it
    let base = match &args.config {
        Some(path) => ConfigStore::load_from(path)?,
        None => EncodeConfig::default(),
    };
    let cfg = args.apply_to(base);
    tracing::info!("Encoding '{}'", cfg.input);

    let outcome = EncodeUseCase::new(cfg).execute()?;
    let m = &outcome.matrix;

    println!("rows: {}, features: {}", m.rows, m.cols);
    println!("xs: {:?}, ys: {:?}", outcome.tensor_shapes.0, outcome.tensor_shapes.1);
    if !m.fallbacks.is_empty() {
        println!("{} numeric cell(s) encoded as 0.0 (see report.json)", m.fallbacks.len());
    }

    for (i, row) in outcome.preview.iter().enumerate() {
        let cells: Vec<String> = row.features.iter().map(|v| format!("{v:.1}")).collect();
        println!("[{i}] [{}] → {:.1}", cells.join(" "), row.target);
    }
    Ok(())
}

/// Handles the `inspect` subcommand.
fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let report = InspectUseCase::new(args.into()).execute()?;

    println!("{} rows", report.rows);
    for c in &report.columns {
        println!(
            "{}: {} (mode {:?}){}",
            c.name,
            c.cardinality,
            c.mode,
            if c.categorical { " [categorical]" } else { "" }
        );
    }

    if let Some((column, cef)) = &report.cef {
        println!("\nMean target by {column}:");
        for (value, mean) in cef {
            println!("  {value}: {mean:.2}");
        }
    }
    Ok(())
}
