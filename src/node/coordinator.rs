//! # Node Coordinator
//!
//! Owns the local storage backend, the static peer list, and the peer
//! client. Ingestion triggers a detached fan-out push to every peer;
//! retrieval falls back to peers on a local miss and cache-fills the result.
//!
//! A concurrent local ingest and a reconciliation pull for the same name may
//! race; the backend's atomic per-name replace decides the winner.

use std::sync::Arc;

use bytes::Bytes;

use crate::cluster::{PeerAddress, PeerClient};
use crate::observability::{Logger, MetricsRegistry};
use crate::storage::{ObjectRecord, StorageBackend, StorageError};

use super::errors::{NodeError, NodeResult};

/// Coordinator for one node's local store and its peer set
#[derive(Debug)]
pub struct Coordinator<B: StorageBackend> {
    backend: B,
    peers: Vec<PeerAddress>,
    client: PeerClient,
    metrics: Arc<MetricsRegistry>,
}

impl<B: StorageBackend> Coordinator<B> {
    /// Create a coordinator over a backend and an immutable peer set
    pub fn new(backend: B, peers: Vec<PeerAddress>) -> Self {
        Self {
            backend,
            peers,
            client: PeerClient::new(),
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    /// The configured peer set, fixed for the process lifetime
    pub fn peers(&self) -> &[PeerAddress] {
        &self.peers
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Store an object locally and schedule fan-out replication.
    ///
    /// The write is synchronous; replication is detached and its failures
    /// never affect the returned result.
    pub fn ingest(&self, name: &str, data: &[u8]) -> NodeResult<ObjectRecord> {
        if name.is_empty() {
            return Err(NodeError::InvalidRequest("empty object name".to_string()));
        }

        self.backend.write(name, data)?;
        self.metrics.increment_ingests();
        Logger::info(
            "OBJECT_STORED",
            &[("object", name), ("size", &data.len().to_string())],
        );

        self.replicate(name.to_string(), Bytes::copy_from_slice(data));

        Ok(ObjectRecord::new(name, data.len() as u64))
    }

    /// Retrieve an object, trying the local backend first and then each
    /// peer in configured order. A peer hit is cache-filled locally before
    /// the bytes are returned, so the next retrieval is a local hit.
    pub async fn retrieve(&self, name: &str) -> NodeResult<Vec<u8>> {
        match self.backend.read(name) {
            Ok(data) => {
                self.metrics.increment_reads_local();
                Ok(data)
            }
            Err(StorageError::ObjectNotFound(_)) => {
                Logger::info("OBJECT_MISS_LOCAL", &[("object", name)]);
                self.pull_into_local(name).await
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List this node's directory, exactly as the backend reports it
    pub fn list_local(&self) -> NodeResult<Vec<ObjectRecord>> {
        Ok(self.backend.list()?)
    }

    /// Pull an object from the first peer that has it and save it locally.
    ///
    /// Used both by `retrieve` on a local miss and by the anti-entropy
    /// scheduler for names a peer's directory shows that this node lacks.
    /// Returns `NotFound` only after every peer has been tried.
    ///
    /// A cache-fill write failure does not fail the pull; the fetched bytes
    /// are served regardless and the next retrieval misses again.
    pub async fn pull_into_local(&self, name: &str) -> NodeResult<Vec<u8>> {
        for peer in &self.peers {
            match self.client.pull(peer, name).await {
                Ok(data) => {
                    if let Err(e) = self.backend.write(name, &data) {
                        Logger::error(
                            "CACHE_FILL_FAILED",
                            &[("object", name), ("reason", &e.to_string())],
                        );
                    }
                    self.metrics.increment_reads_remote();
                    Logger::info(
                        "OBJECT_PULLED",
                        &[("object", name), ("peer", peer.as_str())],
                    );
                    return Ok(data);
                }
                Err(e) => {
                    Logger::warn(
                        "PEER_PULL_FAILED",
                        &[("object", name), ("peer", peer.as_str()), ("reason", &e.to_string())],
                    );
                }
            }
        }

        Err(NodeError::NotFound(name.to_string()))
    }

    /// Fan out one object to every peer as detached single-attempt pushes.
    ///
    /// One shared payload, one task per peer. Outcomes go to the log and
    /// the metrics counters, never to the caller.
    fn replicate(&self, name: String, data: Bytes) {
        for peer in self.peers.clone() {
            let client = self.client.clone();
            let metrics = Arc::clone(&self.metrics);
            let name = name.clone();
            let data = data.clone();
            tokio::spawn(async move {
                match client.push(&peer, &name, data).await {
                    Ok(()) => {
                        metrics.increment_replication_pushes();
                        Logger::info(
                            "REPLICATE_PUSH",
                            &[("object", &name), ("peer", peer.as_str())],
                        );
                    }
                    Err(e) => {
                        metrics.increment_replication_push_failures();
                        Logger::warn(
                            "REPLICATE_PUSH_FAILED",
                            &[
                                ("object", &name),
                                ("peer", peer.as_str()),
                                ("reason", &e.to_string()),
                            ],
                        );
                    }
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalBackend;
    use tempfile::TempDir;

    fn coordinator(peers: Vec<PeerAddress>) -> (TempDir, Arc<Coordinator<LocalBackend>>) {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(temp.path().to_path_buf()).unwrap();
        (temp, Arc::new(Coordinator::new(backend, peers)))
    }

    #[tokio::test]
    async fn test_ingest_then_retrieve() {
        let (_temp, node) = coordinator(vec![]);

        let record = node.ingest("report.txt", b"abc").unwrap();
        assert_eq!(record, ObjectRecord::new("report.txt", 3));

        let data = node.retrieve("report.txt").await.unwrap();
        assert_eq!(data, b"abc");
    }

    #[tokio::test]
    async fn test_ingest_rejects_empty_name() {
        let (_temp, node) = coordinator(vec![]);

        let result = node.ingest("", b"abc");
        assert!(matches!(result, Err(NodeError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_ingest_rejects_nested_name() {
        let (_temp, node) = coordinator(vec![]);

        let result = node.ingest("a/b.txt", b"abc");
        assert!(matches!(result, Err(NodeError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_overwrite_is_full_replace() {
        let (_temp, node) = coordinator(vec![]);

        node.ingest("doc", b"first version").unwrap();
        node.ingest("doc", b"B").unwrap();

        assert_eq!(node.retrieve("doc").await.unwrap(), b"B");
        assert_eq!(node.list_local().unwrap(), vec![ObjectRecord::new("doc", 1)]);
    }

    #[tokio::test]
    async fn test_retrieve_missing_with_no_peers() {
        let (_temp, node) = coordinator(vec![]);

        let result = node.retrieve("ghost").await;
        assert!(matches!(result, Err(NodeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_retrieve_missing_with_dead_peer() {
        let (_temp, node) = coordinator(vec![PeerAddress::new("127.0.0.1:1")]);

        let result = node.retrieve("ghost").await;
        assert!(matches!(result, Err(NodeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_ingest_succeeds_with_unreachable_peer() {
        let (_temp, node) = coordinator(vec![PeerAddress::new("127.0.0.1:1")]);

        let record = node.ingest("kept.txt", b"data").unwrap();
        assert_eq!(record.size, 4);
        assert_eq!(node.retrieve("kept.txt").await.unwrap(), b"data");
    }
}
