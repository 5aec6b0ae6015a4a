//! CLI command implementations
//!
//! `init` prepares the directory layout; `start` constructs the node from
//! configuration, spawns the anti-entropy scheduler, and serves HTTP until
//! terminated. The config file is read once; nothing reloads it.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::cluster::AntiEntropy;
use crate::config::NodeConfig;
use crate::http_server::{AppState, HttpServer};
use crate::node::Coordinator;
use crate::observability::Logger;
use crate::storage::LocalBackend;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default config file (unless one exists) and create the storage
/// directory it points at
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        NodeConfig::load(config_path)?
    } else {
        let config = NodeConfig::default();
        let content = serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::Config(e.to_string()))?;
        fs::write(config_path, content).map_err(|e| CliError::Config(e.to_string()))?;
        Logger::info(
            "CONFIG_WRITTEN",
            &[("path", &config_path.display().to_string())],
        );
        config
    };

    LocalBackend::new(config.storage_dir.clone())?;
    Logger::info(
        "NODE_INITIALIZED",
        &[("storage_dir", &config.storage_dir.display().to_string())],
    );
    Ok(())
}

/// Boot the node and serve until terminated
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = NodeConfig::load(config_path)?;

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::Server(e.to_string()))?;
    runtime.block_on(async {
        let backend = LocalBackend::new(config.storage_dir.clone())?;
        let coordinator = Arc::new(Coordinator::new(backend, config.peer_addresses()));

        AntiEntropy::new(
            Arc::clone(&coordinator),
            Duration::from_millis(config.sync_initial_delay_ms),
            Duration::from_millis(config.sync_interval_ms),
        )
        .spawn();

        Logger::info(
            "NODE_STARTED",
            &[
                ("addr", &config.socket_addr()),
                ("peers", &config.peers.len().to_string()),
                ("storage_dir", &config.storage_dir.display().to_string()),
            ],
        );

        let state = Arc::new(AppState { coordinator });
        HttpServer::new(config.socket_addr(), state)
            .start()
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    })
}
