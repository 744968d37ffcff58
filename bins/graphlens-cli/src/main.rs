//! graphlens - CLI tool for normalizing and inspecting computation graphs

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use std::process;
use tracing::debug;

use cli::{Cli, Command};
use config::CliConfig;
use output::OutputFormatter;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Run the appropriate command
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load config file: explicit path first, then standard locations
    let file_config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::find_and_load()?.unwrap_or_default(),
    };
    let config = file_config.merge_with_cli(cli.format, cli.no_color, cli.verbose);

    // Initialize logging
    cli.init_logging(config.verbose);
    debug!("Effective configuration: {:?}", config);

    // Create output formatter
    let colorize = config.color && !cli.quiet && atty::is(atty::Stream::Stdout);
    let formatter = OutputFormatter::new(config.format, colorize);

    // Execute command
    match cli.command {
        Command::Parse { input, output } => commands::parse(&formatter, cli.quiet, input, output)?,
        Command::Info { input } => commands::info(&formatter, input)?,
        Command::Rows { input, output } => commands::rows(&formatter, cli.quiet, input, output)?,
        Command::Order { input } => commands::order(&formatter, input)?,
    }

    Ok(())
}
