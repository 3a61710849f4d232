//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Datasieve: data-quality diagnostics for tabular datasets
#[derive(Parser)]
#[command(name = "datasieve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input table (CSV/TSV)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output directory for the report (default: quality_report_<timestamp>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (e.g. "warn", "debug")
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
