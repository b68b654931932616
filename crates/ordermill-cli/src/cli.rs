//! CLI argument definitions for the transaction pipeline.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ordermill",
    version,
    about = "Ordermill - batch transaction analytics pipeline",
    long_about = "Flatten per-order JSON transaction documents into a table,\n\
                  derive date fields and volume discounts, persist the result\n\
                  as partitioned Parquet, and print aggregate reports."
)]
pub struct Cli {
    /// Path to the YAML run configuration.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override the configured output root for Parquet partitions.
    #[arg(long = "output-root", value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Run transforms and reports without writing Parquet output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
