//! File-backed order storage.
//!
//! The order collection lives in a single JSON file and is read fresh on
//! every query; nothing is cached between requests, so a change to the file
//! is visible on the next load. Consistency across concurrent requests is
//! only what the filesystem offers: last successful read wins.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::OrderCollection;

/// Errors that can occur while loading the order file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file is missing or unreadable.
    #[error("failed to read order file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file does not parse as an order document.
    #[error("order file {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loader for the file-backed order collection.
///
/// Stateless between calls: each [`load`](Self::load) reads and parses the
/// whole file. Either the full collection deserializes or the load fails -
/// a corrupt file never yields a partial result.
#[derive(Debug, Clone)]
pub struct OrderStore {
    path: PathBuf,
}

impl OrderStore {
    /// Create a store over the given order file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the current order collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file is missing or unreadable and
    /// [`StoreError::Malformed`] if it does not parse.
    pub async fn load(&self) -> Result<OrderCollection, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_order_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("db.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_parses_full_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_order_file(
            &dir,
            r#"{"orders": [
                {"id": "1001", "customerEmail": "Jane@Example.com", "total": "59.90"},
                {"id": "1002", "customerEmail": "bob@example.com"}
            ]}"#,
        );

        let collection = OrderStore::new(path).load().await.unwrap();
        assert_eq!(collection.orders.len(), 2);
        assert_eq!(collection.orders.first().unwrap().id.as_str(), "1001");
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = OrderStore::new(dir.path().join("absent.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_malformed_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_order_file(&dir, "{ this is not json");

        let err = OrderStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed_error() {
        let dir = tempfile::tempdir().unwrap();
        // Valid JSON, but not an order document
        let path = write_order_file(&dir, r#"[{"id": "1001"}]"#);

        let err = OrderStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_consecutive_loads_observe_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_order_file(&dir, r#"{"orders": [{"id": "1001"}]}"#);
        let store = OrderStore::new(path.clone());

        assert_eq!(store.load().await.unwrap().orders.len(), 1);

        std::fs::write(&path, r#"{"orders": [{"id": "1001"}, {"id": "1002"}]}"#).unwrap();
        assert_eq!(store.load().await.unwrap().orders.len(), 2);
    }
}
