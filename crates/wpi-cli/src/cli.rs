//! CLI argument definitions for the place import wizard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wpi_import::DEFAULT_BATCH_SIZE;

#[derive(Parser)]
#[command(
    name = "waypoint-import",
    version,
    about = "Waypoint place importer - map, validate and import place listings",
    long_about = "Import place listings from CSV, TSV or spreadsheet exports.\n\n\
                  Columns are mapped onto the fixed place schema, rows are coerced\n\
                  and validated, near-duplicates are flagged against the existing\n\
                  store, and clean rows are written in resilient batches. Rows that\n\
                  fail land in an error report shaped for fix-and-resubmit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full import wizard against a place store.
    Run(RunArgs),

    /// Validate and preview a file without writing anything.
    Check(CheckArgs),

    /// Show the suggested column mapping for a file.
    Map(MapArgs),

    /// List the target field catalog.
    Fields,

    /// Manage saved mapping presets.
    Preset(PresetArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the CSV, TSV or spreadsheet file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSONL place store receiving the imported records.
    #[arg(long = "store", value_name = "PATH")]
    pub store: PathBuf,

    /// Override one field mapping (repeatable). An empty column clears it.
    #[arg(long = "set", value_name = "FIELD=COLUMN")]
    pub set: Vec<String>,

    /// Apply a saved preset by name before --set overrides.
    #[arg(long = "preset", value_name = "NAME")]
    pub preset: Option<String>,

    /// Rows per store write.
    #[arg(long = "batch-size", value_name = "N", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Import rows flagged as duplicates instead of skipping them.
    #[arg(long = "include-duplicates", conflicts_with = "skip_duplicates")]
    pub include_duplicates: bool,

    /// Skip rows flagged as duplicates (the default).
    #[arg(long = "skip-duplicates")]
    pub skip_duplicates: bool,

    /// Where to write the error report (default: <stem>-errors.csv next to FILE).
    #[arg(long = "error-file", value_name = "PATH")]
    pub error_file: Option<PathBuf>,

    /// Directory holding saved presets.
    #[arg(long = "presets-dir", value_name = "DIR")]
    pub presets_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the CSV, TSV or spreadsheet file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSONL place store to check duplicates against (optional; without it
    /// duplicate detection runs against an empty snapshot).
    #[arg(long = "store", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Override one field mapping (repeatable). An empty column clears it.
    #[arg(long = "set", value_name = "FIELD=COLUMN")]
    pub set: Vec<String>,

    /// Apply a saved preset by name before --set overrides.
    #[arg(long = "preset", value_name = "NAME")]
    pub preset: Option<String>,

    /// Directory holding saved presets.
    #[arg(long = "presets-dir", value_name = "DIR")]
    pub presets_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the CSV, TSV or spreadsheet file to map.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Override one field mapping (repeatable). An empty column clears it.
    #[arg(long = "set", value_name = "FIELD=COLUMN")]
    pub set: Vec<String>,

    /// Save the resulting mapping as a named preset.
    #[arg(long = "save-preset", value_name = "NAME")]
    pub save_preset: Option<String>,

    /// Directory holding saved presets.
    #[arg(long = "presets-dir", value_name = "DIR")]
    pub presets_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PresetArgs {
    #[command(subcommand)]
    pub command: PresetCommand,

    /// Directory holding saved presets.
    #[arg(long = "presets-dir", value_name = "DIR", global = true)]
    pub presets_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum PresetCommand {
    /// List saved presets.
    List,

    /// Delete a preset by id.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
