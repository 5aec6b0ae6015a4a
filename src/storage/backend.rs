//! # Storage Backend Trait

use super::errors::StorageResult;
use super::record::ObjectRecord;

/// Backend trait for object storage
///
/// Individual calls are safe to issue concurrently; `write` must replace
/// any prior content under the same name atomically (last-writer-wins).
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    /// Write data under a name, replacing any prior content
    fn write(&self, name: &str, data: &[u8]) -> StorageResult<()>;

    /// Read the full content stored under a name
    fn read(&self, name: &str) -> StorageResult<Vec<u8>>;

    /// Delete the object stored under a name
    fn delete(&self, name: &str) -> StorageResult<()>;

    /// Check whether a name is present
    fn exists(&self, name: &str) -> StorageResult<bool>;

    /// List all stored objects with their current sizes
    fn list(&self) -> StorageResult<Vec<ObjectRecord>>;
}
