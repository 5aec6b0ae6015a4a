//! # blobnode Storage Module
//!
//! Durable byte storage for a single node: one stored blob per object name,
//! no directories, no versions. The coordinator only talks to the
//! `StorageBackend` trait; `LocalBackend` is the filesystem implementation.

pub mod backend;
pub mod errors;
pub mod local;
pub mod record;

pub use backend::StorageBackend;
pub use errors::{StorageError, StorageResult};
pub use local::LocalBackend;
pub use record::ObjectRecord;
