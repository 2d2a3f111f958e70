use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Split homeowner name entries from a CSV column into individual people
#[derive(Debug, Parser)]
#[command(name = "homeowner-parser")]
#[command(about = "Parse homeowner names from a CSV file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV file with one homeowner entry per row
    #[arg(required = true)]
    pub file: PathBuf,

    /// Zero-based column holding the entries
    #[arg(long)]
    pub column: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
