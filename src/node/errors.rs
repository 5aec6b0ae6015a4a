//! # Node Errors
//!
//! The caller-visible taxonomy. Peer-level errors never appear here; they
//! are absorbed inside the coordinator and only steer which peer is tried
//! next. `NotFound` means absent locally and on every reachable peer.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for coordinator operations
pub type NodeResult<T> = Result<T, NodeError>;

/// Errors surfaced to the node's own caller
#[derive(Debug, Clone, Error)]
pub enum NodeError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Object not found: {0}")]
    NotFound(String),
}

impl NodeError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            NodeError::InvalidRequest(_) => 400,
            NodeError::StorageFailure(_) => 500,
            NodeError::NotFound(_) => 404,
        }
    }
}

impl From<StorageError> for NodeError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::InvalidName(name) => {
                NodeError::InvalidRequest(format!("invalid object name: {}", name))
            }
            StorageError::ObjectNotFound(name) => NodeError::NotFound(name),
            StorageError::IoError(reason) => NodeError::StorageFailure(reason),
        }
    }
}
