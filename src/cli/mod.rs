//! CLI module for blobnode
//!
//! Provides command-line interface for:
//! - init: Create the storage directory and a default config file
//! - start: Boot the node and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run_command, start};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
