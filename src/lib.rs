pub mod cli;
pub mod config;
pub mod output;
pub mod parser;
pub mod person;
pub mod reader;

use anyhow::{Context, Result};
use log::*;
use std::io::Write;

/// Read, parse and print the homeowners named on the command line
pub fn run(cli: &cli::Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    run_with_writer(cli, &mut stdout)
}

pub fn run_with_writer<W: Write>(cli: &cli::Cli, writer: &mut W) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Command line flags win over the config file
    let column = cli.column.unwrap_or(config.input.column);
    let format = cli.format.unwrap_or(config.output.format);

    info!("Reading homeowners from {}", cli.file.display());
    let entries = reader::read_entries(&cli.file, column)
        .with_context(|| format!("Failed to read homeowners from {}", cli.file.display()))?;

    let people = parse_all(&entries);
    info!("Parsed {} homeowners from {} entries", people.len(), entries.len());

    output::write_people(writer, &people, format)
}

pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use output::OutputFormat;
pub use parser::{parse_all, NameParser};
pub use person::Person;
