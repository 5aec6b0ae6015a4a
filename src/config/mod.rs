//! # Node Configuration
//!
//! Everything a node needs at construction: listen address, storage root,
//! the static peer set, and the reconciliation cadence. Loaded once at
//! startup from a JSON file and shared read-only.
//!
//! Peer lists need not be symmetric. Anti-entropy only guarantees
//! convergence between nodes that list each other; a node nobody lists as a
//! peer will serve what it holds but never receive reconciled objects.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cluster::PeerAddress;

/// Configuration load errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {0}: {1}")]
    Read(PathBuf, String),

    #[error("Failed to parse config {0}: {1}")]
    Parse(PathBuf, String),
}

/// Node configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Peer addresses as host:port, tried in the order given (default: none)
    #[serde(default)]
    pub peers: Vec<String>,

    /// Root directory for stored objects (default: "./data")
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    /// Delay before the first reconciliation tick (default: 5000 ms)
    #[serde(default = "default_sync_initial_delay_ms")]
    pub sync_initial_delay_ms: u64,

    /// Interval between reconciliation ticks (default: 30000 ms)
    #[serde(default = "default_sync_interval_ms")]
    pub sync_interval_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_sync_initial_delay_ms() -> u64 {
    5_000
}

fn default_sync_interval_ms() -> u64 {
    30_000
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            peers: Vec::new(),
            storage_dir: default_storage_dir(),
            sync_initial_delay_ms: default_sync_initial_delay_ms(),
            sync_interval_ms: default_sync_interval_ms(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e.to_string()))?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e.to_string()))
    }

    /// Get the socket address string to bind
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The immutable peer set, in configured order
    pub fn peer_addresses(&self) -> Vec<PeerAddress> {
        self.peers.iter().map(|p| PeerAddress::new(p.as_str())).collect()
    }
}
