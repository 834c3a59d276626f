//! CLI argument definitions for tabmap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabmap",
    version,
    about = "Rewrite CSV columns through explicit lookup mappings",
    long_about = "Rewrite CSV columns through explicit lookup mappings.\n\n\
                  A JSON configuration lists mapping steps. Per-column steps rewrite each\n\
                  source column in place; cross-column steps rewrite one adjust column from\n\
                  several source columns, applied in the order given."
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
    /// Apply a mapping configuration to a CSV file.
    Apply(ApplyArgs),

    /// Validate a mapping configuration without reading any data.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// CSV file to transform.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON mapping configuration.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: PathBuf,

    /// Where to write the transformed CSV (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Infer column dtypes instead of reading every column as text.
    ///
    /// Value map keys written as JSON object keys are strings, so they only
    /// match text columns. Use `[key, value]` pairs for typed keys.
    #[arg(long = "infer-schema")]
    pub infer_schema: bool,

    /// Number of output rows to show in the summary preview.
    #[arg(long = "preview", value_name = "N", default_value_t = 10)]
    pub preview: usize,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// JSON mapping configuration.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
