//! Observability subsystem for blobnode
//!
//! Structured JSON logging and monotonic counters. Observability is
//! read-only and has no effect on execution; replication and
//! reconciliation outcomes land here instead of surfacing to callers.

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::MetricsRegistry;
