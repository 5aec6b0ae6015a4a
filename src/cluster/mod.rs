//! # blobnode Cluster Module
//!
//! Cross-node plumbing: the peer client issuing the three network calls the
//! coordinator needs (push, pull, directory query) and the anti-entropy
//! scheduler that reconciles this node's object set against each peer.
//!
//! The peer set is fixed at startup. There is no membership protocol and no
//! liveness tracking beyond per-call timeouts; an unreachable peer is simply
//! skipped until the next attempt.

pub mod anti_entropy;
pub mod client;
pub mod errors;
pub mod peer;

pub use anti_entropy::AntiEntropy;
pub use client::PeerClient;
pub use errors::{ClusterError, ClusterResult};
pub use peer::PeerAddress;
