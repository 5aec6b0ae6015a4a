//! Metrics registry for blobnode
//!
//! Counters only, monotonic, reset on process start. Relaxed atomics are
//! sufficient; metrics tolerate eventual consistency.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for one node
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Objects stored through ingest (uploads and inbound sync writes)
    objects_ingested: AtomicU64,
    /// Retrievals served from the local backend
    reads_local: AtomicU64,
    /// Retrievals served by pulling from a peer (includes reconciliation pulls)
    reads_remote: AtomicU64,
    /// Successful fan-out pushes
    replication_pushes: AtomicU64,
    /// Failed fan-out pushes (unreachable peer, non-success response)
    replication_push_failures: AtomicU64,
    /// Objects pulled by the anti-entropy scheduler
    reconcile_pulls: AtomicU64,
    /// Reconciliation branches abandoned (directory query or listing failed)
    reconcile_branch_failures: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_ingests(&self) {
        self.objects_ingested.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_reads_local(&self) {
        self.reads_local.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_reads_remote(&self) {
        self.reads_remote.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_replication_pushes(&self) {
        self.replication_pushes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_replication_push_failures(&self) {
        self.replication_push_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_reconcile_pulls(&self) {
        self.reconcile_pulls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_reconcile_branch_failures(&self) {
        self.reconcile_branch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn ingests(&self) -> u64 {
        self.objects_ingested.load(Ordering::Relaxed)
    }

    pub fn reads_local(&self) -> u64 {
        self.reads_local.load(Ordering::Relaxed)
    }

    pub fn reads_remote(&self) -> u64 {
        self.reads_remote.load(Ordering::Relaxed)
    }

    pub fn replication_pushes(&self) -> u64 {
        self.replication_pushes.load(Ordering::Relaxed)
    }

    pub fn replication_push_failures(&self) -> u64 {
        self.replication_push_failures.load(Ordering::Relaxed)
    }

    pub fn reconcile_pulls(&self) -> u64 {
        self.reconcile_pulls.load(Ordering::Relaxed)
    }

    pub fn reconcile_branch_failures(&self) -> u64 {
        self.reconcile_branch_failures.load(Ordering::Relaxed)
    }

    /// Serialize all counters as a JSON object with deterministic key order
    pub fn to_json(&self) -> String {
        format!(
            concat!(
                "{{\"objects_ingested\":{},",
                "\"reads_local\":{},",
                "\"reads_remote\":{},",
                "\"reconcile_branch_failures\":{},",
                "\"reconcile_pulls\":{},",
                "\"replication_push_failures\":{},",
                "\"replication_pushes\":{}}}"
            ),
            self.ingests(),
            self.reads_local(),
            self.reads_remote(),
            self.reconcile_branch_failures(),
            self.reconcile_pulls(),
            self.replication_push_failures(),
            self.replication_pushes(),
        )
    }
}
