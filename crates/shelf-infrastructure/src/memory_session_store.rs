//! In-memory session store, used by tests and by the CLI's `--ephemeral` mode.

use async_trait::async_trait;
use shelf_core::error::Result;
use shelf_core::{SessionSnapshot, SessionStore};
use tokio::sync::Mutex;

/// Keeps the snapshot in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    snapshot: Mutex<SessionSnapshot>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load_all(&self) -> Result<SessionSnapshot> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save_all(&self, snapshot: &SessionSnapshot) -> Result<()> {
        *self.snapshot.lock().await = snapshot.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{Section, UserSession};

    #[tokio::test]
    async fn test_round_trip_through_helpers() {
        let store = InMemorySessionStore::new();
        assert!(store.load("9").await.unwrap().is_none());

        let session = UserSession {
            sections: vec![Section::new()],
            editing: None,
        };
        store.save("9", session.clone()).await.unwrap();

        assert_eq!(store.load("9").await.unwrap(), Some(session));
        assert_eq!(store.load_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_loaded_snapshot_is_a_copy() {
        let store = InMemorySessionStore::new();
        let mut snapshot = store.load_all().await.unwrap();
        snapshot.session_mut("1");

        assert!(store.load_all().await.unwrap().is_empty());
    }
}
