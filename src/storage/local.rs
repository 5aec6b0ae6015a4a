//! # Local Filesystem Backend
//!
//! One blob file per object name under a flat root directory. Writes go to
//! a temp file in a `.tmp` subdirectory first and are renamed over the
//! destination, so a replace is atomic per name and concurrent writers
//! resolve to last-writer-wins. The temp directory lives outside the
//! namespace; only its exact name is reserved.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};
use super::record::ObjectRecord;

/// Subdirectory holding in-flight temp files; reserved as an object name.
const TMP_DIR: &str = ".tmp";

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Local filesystem storage backend
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a new local backend, creating the root and temp directories
    /// if needed
    pub fn new(root: PathBuf) -> StorageResult<Self> {
        fs::create_dir_all(root.join(TMP_DIR)).map_err(|e| StorageError::IoError(e.to_string()))?;
        Ok(Self { root })
    }

    fn blob_path(&self, name: &str) -> StorageResult<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

/// Names form a flat namespace: non-empty, no path separators, no parent
/// references, and not the reserved temp directory name.
pub fn validate_name(name: &str) -> StorageResult<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name == TMP_DIR
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl StorageBackend for LocalBackend {
    fn write(&self, name: &str, data: &[u8]) -> StorageResult<()> {
        let dest = self.blob_path(name)?;
        let tmp = self.root.join(TMP_DIR).join(format!(
            "{}-{}",
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        fs::write(&tmp, data).map_err(|e| StorageError::IoError(e.to_string()))?;
        fs::rename(&tmp, &dest).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StorageError::IoError(e.to_string())
        })
    }

    fn read(&self, name: &str) -> StorageResult<Vec<u8>> {
        let path = self.blob_path(name)?;

        fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::ObjectNotFound(name.to_string())
            } else {
                StorageError::IoError(e.to_string())
            }
        })
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        let path = self.blob_path(name)?;

        fs::remove_file(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::ObjectNotFound(name.to_string())
            } else {
                StorageError::IoError(e.to_string())
            }
        })
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        Ok(self.blob_path(name)?.exists())
    }

    fn list(&self) -> StorageResult<Vec<ObjectRecord>> {
        let mut records = Vec::new();

        for entry in fs::read_dir(&self.root).map_err(|e| StorageError::IoError(e.to_string()))? {
            let entry = entry.map_err(|e| StorageError::IoError(e.to_string()))?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };
            let meta = match entry.metadata() {
                Ok(meta) => meta,
                Err(_) => continue,
            };
            if !meta.is_file() {
                continue;
            }
            records.push(ObjectRecord::new(name, meta.len()));
        }

        Ok(records)
    }
}
