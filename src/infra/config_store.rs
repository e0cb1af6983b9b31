// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and restores EncodeConfig as pretty-printed JSON.
//
// Two uses:
//   1. `encode --config my_run.json` reads a config file that
//      was written by hand (or by an earlier run).
//   2. Every encode run writes the exact config it used into
//      the output directory, so the feature matrix can always
//      be regenerated:
//
//        output/
//          encode_config.json   ← this file
//          features.csv
//          report.json
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::encode_use_case::EncodeConfig;

pub const CONFIG_FILE: &str = "encode_config.json";

/// Reads and writes the run configuration inside one directory.
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the stored config
    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Write the config, creating the directory if needed
    pub fn save(&self, cfg: &EncodeConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.path();
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved encode config to '{}'", path.display());
        Ok(())
    }

    /// Read the config stored in this directory
    pub fn load(&self) -> Result<EncodeConfig> {
        Self::load_from(self.path())
    }

    /// Read a config from an arbitrary JSON file.
    /// Missing fields take their default values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<EncodeConfig> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config JSON in '{}'", path.display()))
    }
}
