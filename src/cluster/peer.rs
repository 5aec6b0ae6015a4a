//! # Peer Addresses

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque `host:port` endpoint for one peer node, taken from static
/// configuration. Peer lists need not be symmetric: node A listing B does
/// not imply B lists A.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerAddress(String);

impl PeerAddress {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
