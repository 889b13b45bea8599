//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogd serve [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catalogd - an in-memory product catalog service
#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the catalog HTTP server
    Serve {
        /// Path to configuration file; defaults apply when absent
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
