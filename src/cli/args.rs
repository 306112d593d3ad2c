//! CLI argument definitions using clap
//!
//! Commands:
//! - momo-api serve --config <path>
//! - momo-api ingest --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// momo-api - mobile-money SMS transactions over HTTP
#[derive(Parser, Debug)]
#[command(name = "momo-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ingest the SMS export and start the API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./momo-api.json")]
        config: PathBuf,
    },

    /// Run the XML extraction once and write the JSON artifact
    Ingest {
        /// Path to configuration file
        #[arg(long, default_value = "./momo-api.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
