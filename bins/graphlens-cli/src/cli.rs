//! Command-line argument parsing for graphlens

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// graphlens - Normalize and inspect computation-graph documents
#[derive(Parser, Debug)]
#[command(name = "graphlens")]
#[command(author, version, about = "graphlens - Normalize and inspect computation-graph documents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for JSON results
    #[arg(short = 'f', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to config file (TOML format)
    ///
    /// If not specified, searches for config in:
    /// 1. ./graphlens.toml (current dir)
    /// 2. ./.graphlens.toml (dotfile in current dir)
    /// 3. ~/.config/graphlens/config.toml (user config)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize a graph document and write the result as JSON
    Parse {
        /// Input graph JSON file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show statistics for a graph document
    Info {
        /// Input graph JSON file
        input: PathBuf,
    },

    /// Flatten operator nodes into table rows
    Rows {
        /// Input graph JSON file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print node ids in dependency order
    Order {
        /// Input graph JSON file
        input: PathBuf,
    },
}

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// Single-line JSON
    Compact,
}

impl Cli {
    /// Initialize logging based on verbosity level
    ///
    /// Log lines go to stderr so they never mix with JSON on stdout.
    pub fn init_logging(&self, verbose: u8) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
