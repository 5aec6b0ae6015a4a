//! # Peer Client
//!
//! The three cross-node calls the core needs, each a single attempt with a
//! fixed timeout. No retries, no local state mutation.

use std::time::Duration;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

use crate::storage::ObjectRecord;

use super::errors::{ClusterError, ClusterResult};
use super::peer::PeerAddress;

/// Timeout for pushing an object's bytes to a peer
const PUSH_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for pulling an object's bytes from a peer
const PULL_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for a directory query, used only by the anti-entropy scheduler
const DIRECTORY_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for inter-node traffic
#[derive(Debug, Clone, Default)]
pub struct PeerClient {
    client: Client,
}

impl PeerClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Push an object's bytes to a peer's sync-write entry point.
    ///
    /// One attempt only; any transport failure or non-success status is
    /// reported as `PeerUnavailable`.
    pub async fn push(&self, peer: &PeerAddress, name: &str, content: Bytes) -> ClusterResult<()> {
        let part = Part::stream(content).file_name(name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("http://{}/sync", peer))
            .multipart(form)
            .timeout(PUSH_TIMEOUT)
            .send()
            .await
            .map_err(|e| unavailable(peer, e))?;

        if !response.status().is_success() {
            return Err(ClusterError::PeerUnavailable {
                peer: peer.clone(),
                reason: format!("push rejected with status {}", response.status()),
            });
        }

        Ok(())
    }

    /// Pull an object's bytes from a peer's retrieval entry point.
    pub async fn pull(&self, peer: &PeerAddress, name: &str) -> ClusterResult<Vec<u8>> {
        let response = self
            .client
            .get(format!("http://{}/download/{}", peer, name))
            .timeout(PULL_TIMEOUT)
            .send()
            .await
            .map_err(|e| unavailable(peer, e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClusterError::NotFoundOnPeer {
                peer: peer.clone(),
                name: name.to_string(),
            }),
            status if !status.is_success() => Err(ClusterError::PeerUnavailable {
                peer: peer.clone(),
                reason: format!("pull rejected with status {}", status),
            }),
            _ => {
                let body = response.bytes().await.map_err(|e| unavailable(peer, e))?;
                Ok(body.to_vec())
            }
        }
    }

    /// Fetch a peer's object directory from its sync-read entry point.
    pub async fn query_directory(&self, peer: &PeerAddress) -> ClusterResult<Vec<ObjectRecord>> {
        let response = self
            .client
            .get(format!("http://{}/sync", peer))
            .timeout(DIRECTORY_TIMEOUT)
            .send()
            .await
            .map_err(|e| unavailable(peer, e))?;

        if !response.status().is_success() {
            return Err(ClusterError::PeerUnavailable {
                peer: peer.clone(),
                reason: format!("directory query rejected with status {}", response.status()),
            });
        }

        response
            .json::<Vec<ObjectRecord>>()
            .await
            .map_err(|e| ClusterError::DirectoryDecode {
                peer: peer.clone(),
                reason: e.to_string(),
            })
    }
}

fn unavailable(peer: &PeerAddress, error: reqwest::Error) -> ClusterError {
    ClusterError::PeerUnavailable {
        peer: peer.clone(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_peer_is_unavailable() {
        // Nothing listens on this port; connect is refused immediately.
        let peer = PeerAddress::new("127.0.0.1:1");
        let client = PeerClient::new();

        let result = client.push(&peer, "a.txt", Bytes::from_static(b"x")).await;
        assert!(matches!(
            result,
            Err(ClusterError::PeerUnavailable { .. })
        ));
    }
}
