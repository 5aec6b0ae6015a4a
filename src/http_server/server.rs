//! # HTTP Server
//!
//! Binds the node's listen address and serves the router until the process
//! exits. One tokio task per inbound request, courtesy of axum.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;

use super::routes::{node_routes, AppState};

/// HTTP server for one node
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// Build the server for a listen address and shared node state
    pub fn new(addr: impl Into<String>, state: Arc<AppState>) -> Self {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Self {
            addr: addr.into(),
            router: node_routes(state).layer(cors),
        }
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process terminates
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(&self.addr).await?;
        Logger::info("HTTP_LISTENING", &[("addr", &self.addr)]);
        axum::serve(listener, self.router).await
    }
}
