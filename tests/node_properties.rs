//! Single-node property tests
//!
//! Round trip, overwrite idempotence, and listing fidelity against the
//! coordinator and the local backend, without any network involved.

use std::sync::Arc;

use blobnode::node::{Coordinator, NodeError};
use blobnode::storage::{LocalBackend, ObjectRecord, StorageBackend};
use tempfile::TempDir;

fn node_over(temp: &TempDir) -> Arc<Coordinator<LocalBackend>> {
    let backend = LocalBackend::new(temp.path().to_path_buf()).unwrap();
    Arc::new(Coordinator::new(backend, vec![]))
}

// A second backend handle over the same root, for manipulating storage
// behind the coordinator's back.
fn side_handle(temp: &TempDir) -> LocalBackend {
    LocalBackend::new(temp.path().to_path_buf()).unwrap()
}

#[tokio::test]
async fn test_round_trip() {
    let temp = TempDir::new().unwrap();
    let node = node_over(&temp);

    let content = b"some opaque bytes \x00\xff with non-text".to_vec();
    node.ingest("blob.bin", &content).unwrap();

    assert_eq!(node.retrieve("blob.bin").await.unwrap(), content);
    assert_eq!(
        node.list_local().unwrap(),
        vec![ObjectRecord::new("blob.bin", content.len() as u64)]
    );
}

#[tokio::test]
async fn test_overwrite_idempotence() {
    let temp = TempDir::new().unwrap();
    let node = node_over(&temp);

    node.ingest("doc.txt", b"AAAA").unwrap();
    node.ingest("doc.txt", b"BB").unwrap();

    assert_eq!(node.retrieve("doc.txt").await.unwrap(), b"BB");
    assert_eq!(
        node.list_local().unwrap(),
        vec![ObjectRecord::new("doc.txt", 2)]
    );
}

#[tokio::test]
async fn test_listing_tracks_deletion() {
    let temp = TempDir::new().unwrap();
    let node = node_over(&temp);
    let storage = side_handle(&temp);

    node.ingest("keep.txt", b"k").unwrap();
    node.ingest("drop.txt", b"d").unwrap();

    storage.delete("drop.txt").unwrap();

    let records = node.list_local().unwrap();
    assert_eq!(records, vec![ObjectRecord::new("keep.txt", 1)]);

    let result = node.retrieve("drop.txt").await;
    assert!(matches!(result, Err(NodeError::NotFound(_))));
}

#[tokio::test]
async fn test_listing_has_no_duplicates_across_overwrites() {
    let temp = TempDir::new().unwrap();
    let node = node_over(&temp);

    for round in 0..5 {
        node.ingest("same-name", format!("round {}", round).as_bytes())
            .unwrap();
    }

    let records = node.list_local().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "same-name");
    assert_eq!(records[0].size, "round 4".len() as u64);
}
