//! # blobnode Node Module
//!
//! The node coordinator: local ingestion with best-effort fan-out
//! replication, retrieval with peer fallback and cache-fill, and the local
//! directory listing both the HTTP surface and the peers consume.

pub mod coordinator;
pub mod errors;

pub use coordinator::Coordinator;
pub use errors::{NodeError, NodeResult};
