//! # Anti-Entropy Scheduler
//!
//! Periodic pull-based reconciliation: on every tick, each peer gets an
//! independent detached branch that queries the peer's directory, diffs it
//! against the local listing, and pulls whatever is missing. One branch's
//! failure never aborts the others, and the same missing name may be pulled
//! more than once within a tick when several peers advertise it (an
//! accepted race, resolved by the backend's last-writer-wins replace).

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::node::Coordinator;
use crate::observability::Logger;
use crate::storage::StorageBackend;

use super::client::PeerClient;
use super::peer::PeerAddress;

/// Background reconciliation loop for one node
pub struct AntiEntropy<B: StorageBackend + 'static> {
    coordinator: Arc<Coordinator<B>>,
    client: PeerClient,
    initial_delay: Duration,
    interval: Duration,
}

impl<B: StorageBackend + 'static> AntiEntropy<B> {
    /// Create a scheduler with an injectable cadence. Production defaults
    /// come from configuration (5 s initial delay, 30 s interval).
    pub fn new(coordinator: Arc<Coordinator<B>>, initial_delay: Duration, interval: Duration) -> Self {
        Self {
            coordinator,
            client: PeerClient::new(),
            initial_delay,
            interval,
        }
    }

    /// Detach the loop onto the runtime; it runs for the process lifetime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(self) {
        tokio::time::sleep(self.initial_delay).await;

        loop {
            tokio::time::sleep(self.interval).await;
            self.tick();
        }
    }

    /// Launch one detached reconciliation branch per peer. The tick does
    /// not wait for the branches to finish.
    pub fn tick(&self) {
        for peer in self.coordinator.peers() {
            let coordinator = Arc::clone(&self.coordinator);
            let client = self.client.clone();
            let peer = peer.clone();
            tokio::spawn(async move {
                reconcile_with_peer(coordinator, client, peer).await;
            });
        }
    }
}

/// Pull every object the peer advertises that is absent locally
async fn reconcile_with_peer<B: StorageBackend + 'static>(
    coordinator: Arc<Coordinator<B>>,
    client: PeerClient,
    peer: PeerAddress,
) {
    let directory = match client.query_directory(&peer).await {
        Ok(directory) => directory,
        Err(e) => {
            coordinator.metrics().increment_reconcile_branch_failures();
            Logger::warn(
                "SYNC_DIRECTORY_FAILED",
                &[("peer", peer.as_str()), ("reason", &e.to_string())],
            );
            return;
        }
    };

    let local_names: HashSet<String> = match coordinator.list_local() {
        Ok(records) => records.into_iter().map(|r| r.name).collect(),
        Err(e) => {
            coordinator.metrics().increment_reconcile_branch_failures();
            Logger::error("SYNC_LIST_FAILED", &[("reason", &e.to_string())]);
            return;
        }
    };

    for record in directory {
        if local_names.contains(&record.name) {
            continue;
        }

        match coordinator.pull_into_local(&record.name).await {
            Ok(_) => {
                coordinator.metrics().increment_reconcile_pulls();
                Logger::info(
                    "SYNC_OBJECT_PULLED",
                    &[("object", &record.name), ("peer", peer.as_str())],
                );
            }
            Err(e) => {
                Logger::warn(
                    "SYNC_OBJECT_FAILED",
                    &[("object", &record.name), ("reason", &e.to_string())],
                );
            }
        }
    }
}
