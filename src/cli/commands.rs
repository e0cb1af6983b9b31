// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `encode` and `inspect`
// and all their configurable flags.
//
// List-valued flags take comma-separated names:
//   --ignore Alley,PoolQC --categorical MSZoning,Street
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::{encode_use_case::EncodeConfig, inspect_use_case::InspectConfig};
use crate::data::assembler::ParsePolicy;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a CSV file into a numeric feature matrix
    Encode(EncodeArgs),

    /// Print cardinality and mode per column (and optionally a CEF)
    Inspect(InspectArgs),
}

/// All arguments for the `encode` command.
/// Flags left unset keep the value from --config (or the default).
#[derive(Args, Debug, Default)]
pub struct EncodeArgs {
    /// CSV file with a header row
    #[arg(long)]
    pub input: Option<String>,

    /// JSON file with an EncodeConfig; flags override its fields
    #[arg(long)]
    pub config: Option<String>,

    /// Directory for features.csv, report.json and the config used
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Field delimiter
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Row-identifier column, skipped entirely
    #[arg(long)]
    pub id: Option<String>,

    /// Target column, routed to the target vector
    #[arg(long)]
    pub target: Option<String>,

    /// Further columns to skip
    #[arg(long, value_delimiter = ',')]
    pub ignore: Option<Vec<String>>,

    /// Categorical columns; when absent, non-numeric columns are categorical
    #[arg(long, value_delimiter = ',')]
    pub categorical: Option<Vec<String>>,

    /// Columns whose missing values are replaced by the mode
    #[arg(long, value_delimiter = ',')]
    pub impute: Option<Vec<String>>,

    /// Token that marks a missing value
    #[arg(long)]
    pub missing_token: Option<String>,

    /// Abort on unparseable numeric cells instead of using 0.0
    #[arg(long)]
    pub strict: bool,

    /// Print the first N encoded rows
    #[arg(long)]
    pub preview: Option<usize>,

    /// Do not write any files
    #[arg(long)]
    pub no_output: bool,
}

impl EncodeArgs {
    /// Lay the flags that were given over a base config.
    pub fn apply_to(self, mut cfg: EncodeConfig) -> EncodeConfig {
        if let Some(v) = self.input         { cfg.input = v; }
        if let Some(v) = self.output_dir    { cfg.output_dir = v; }
        if let Some(v) = self.delimiter     { cfg.delimiter = v; }
        if let Some(v) = self.id            { cfg.id_column = v; }
        if let Some(v) = self.target        { cfg.target_column = v; }
        if let Some(v) = self.ignore        { cfg.ignored = v; }
        if let Some(v) = self.categorical   { cfg.categorical = Some(v); }
        if let Some(v) = self.impute        { cfg.imputed_columns = v; }
        if let Some(v) = self.missing_token { cfg.missing_token = v; }
        if let Some(v) = self.preview       { cfg.preview_rows = v; }
        if self.strict    { cfg.parse_policy = ParsePolicy::Strict; }
        if self.no_output { cfg.write_outputs = false; }
        cfg
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CSV file with a header row
    #[arg(long, default_value = "data/train.csv")]
    pub input: String,

    /// Target column used for --cef
    #[arg(long, default_value = "SalePrice")]
    pub target: String,

    /// Print the mean target per category of this column
    #[arg(long)]
    pub cef: Option<String>,

    /// Token that marks a missing value
    #[arg(long, default_value = "NA")]
    pub missing_token: String,
}

/// Convert CLI InspectArgs into the application-layer InspectConfig.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            input:         a.input,
            target_column: a.target,
            cef_column:    a.cef,
            missing_token: a.missing_token,
        }
    }
}
