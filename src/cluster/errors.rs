//! # Cluster Errors
//!
//! Peer-level failures never propagate to a client of this node; they are
//! logged, counted, and used to decide "try the next peer" or "skip this
//! peer this tick".

use thiserror::Error;

use super::peer::PeerAddress;

/// Result type for peer operations
pub type ClusterResult<T> = Result<T, ClusterError>;

/// Errors talking to a specific peer
#[derive(Debug, Clone, Error)]
pub enum ClusterError {
    #[error("Peer {peer} unavailable: {reason}")]
    PeerUnavailable { peer: PeerAddress, reason: String },

    #[error("Object {name} not found on peer {peer}")]
    NotFoundOnPeer { peer: PeerAddress, name: String },

    #[error("Undecodable directory from peer {peer}: {reason}")]
    DirectoryDecode { peer: PeerAddress, reason: String },
}
