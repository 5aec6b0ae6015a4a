//! # Object Records
//!
//! The directory entry exchanged between nodes and returned by listings.

use serde::{Deserialize, Serialize};

/// Metadata for one stored object. Identity is `name` alone; `size` is
/// derived from the stored bytes at listing time, never stored redundantly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub name: String,
    pub size: u64,
}

impl ObjectRecord {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}
