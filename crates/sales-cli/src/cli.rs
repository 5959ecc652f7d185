//! CLI argument definitions for the sales cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default location of the raw export.
pub const DEFAULT_INPUT: &str = "data/raw/sales_data_raw.csv";

/// Default location of the cleaned output.
pub const DEFAULT_OUTPUT: &str = "data/processed/sales_data_clean.csv";

#[derive(Parser)]
#[command(
    name = "sales-clean",
    version,
    about = "Clean a messy sales CSV into a normalized, validated table",
    long_about = "Load a loosely-structured sales CSV, normalize column names and text,\n\
                  drop rows with missing, non-numeric or negative price/quantity,\n\
                  and write the result as a clean CSV."
)]
pub struct Cli {
    /// Raw sales CSV to clean.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the cleaned CSV (parent directories are created).
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of cleaned rows to preview on stdout.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 5)]
    pub preview_rows: usize,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
