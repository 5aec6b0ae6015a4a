//! # blobnode HTTP Server
//!
//! The node's single network surface: client-facing upload/download/list
//! and the inter-node /sync entry points, which are the same operations
//! worn by the peer client.

pub mod routes;
pub mod server;

pub use routes::{node_routes, AppState};
pub use server::HttpServer;
