//! blobnode - A peer-replicated, self-hostable file store node
//!
//! Each node stores opaque byte objects under flat names, replicates new
//! objects to a static set of peers on a best-effort basis, falls back to
//! peers when an object is missing locally, and periodically reconciles
//! its object set against each peer's directory.

pub mod cli;
pub mod cluster;
pub mod config;
pub mod http_server;
pub mod node;
pub mod observability;
pub mod storage;
