use anyhow::Result;
use clap::Parser;
use homeowner_parser::cli::Cli;
use log::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    homeowner_parser::init_logger(cli.verbose);

    info!("Starting homeowner parser v{}", env!("CARGO_PKG_VERSION"));
    homeowner_parser::run(&cli)
}
