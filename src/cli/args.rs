//! CLI argument definitions using clap
//!
//! Commands:
//! - blobnode init --config <path>
//! - blobnode start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// blobnode - A peer-replicated, self-hostable file store node
#[derive(Parser, Debug)]
#[command(name = "blobnode")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the storage directory and write a default config file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./blobnode.json")]
        config: PathBuf,
    },

    /// Start the node server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./blobnode.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
