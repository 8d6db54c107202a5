//! Session store trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::model::{SessionSnapshot, UserSession};

/// Storage for the session snapshot.
///
/// Implementations read and write the snapshot as a whole; there are no
/// partial updates and no cross-call locking.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads every session. A store that has never been written is empty.
    async fn load_all(&self) -> Result<SessionSnapshot>;

    /// Replaces the stored snapshot.
    async fn save_all(&self, snapshot: &SessionSnapshot) -> Result<()>;

    /// Loads one user's session, if any.
    async fn load(&self, user_id: &str) -> Result<Option<UserSession>> {
        Ok(self.load_all().await?.get(user_id).cloned())
    }

    /// Stores one user's session (full read-modify-write of the snapshot).
    async fn save(&self, user_id: &str, session: UserSession) -> Result<()> {
        let mut snapshot = self.load_all().await?;
        snapshot.insert(user_id, session);
        self.save_all(&snapshot).await
    }
}
