//! JSON-file-backed session store.
//!
//! The whole snapshot lives in one pretty-printed JSON document keyed by user
//! id. Every save replaces the file atomically.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use shelf_core::error::Result;
use shelf_core::{SessionSnapshot, SessionStore, ShelfError};
use tokio::task;

use crate::storage::AtomicJsonFile;

/// Session store that keeps every user in a single JSON file.
///
/// A missing or empty file reads as an empty snapshot. File I/O runs on the
/// blocking pool.
pub struct JsonSessionStore {
    file: Arc<AtomicJsonFile<SessionSnapshot>>,
}

impl JsonSessionStore {
    /// Creates a store backed by `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(path.into())),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl SessionStore for JsonSessionStore {
    async fn load_all(&self) -> Result<SessionSnapshot> {
        let file = Arc::clone(&self.file);

        let loaded = task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| ShelfError::io(format!("Failed to spawn blocking task: {}", e)))??;

        Ok(loaded.unwrap_or_default())
    }

    async fn save_all(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let file = Arc::clone(&self.file);
        let users = snapshot.len();
        let snapshot = snapshot.clone();

        task::spawn_blocking(move || file.replace(&snapshot))
            .await
            .map_err(|e| ShelfError::io(format!("Failed to spawn blocking task: {}", e)))??;

        tracing::debug!(path = %self.path().display(), users, "snapshot saved");
        Ok(())
    }
}
