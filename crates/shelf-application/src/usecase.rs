//! Conversation use case.
//!
//! Every entry point follows the same cycle: load the whole snapshot, run one
//! step over the caller's session, save the snapshot if the session changed,
//! return the screen to show.

use std::sync::Arc;

use shelf_core::error::Result;
use shelf_core::pricing::{Pricer, PricingError};
use shelf_core::{SessionSnapshot, SessionStore, UserSession};
use tokio::sync::Mutex;

use crate::action::Action;
use crate::conversation;
use crate::render::{self, menu};
use crate::screen::Screen;

/// Slash commands understood in chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the main menu.
    Start,
    /// Forget the user's sections and progress.
    Reset,
}

/// Use case for the shelving configurator conversation.
///
/// # Thread Safety
///
/// Interactions are serialized through an internal mutex so that two
/// concurrent read-modify-write cycles cannot overwrite each other's
/// snapshot within one process.
pub struct ShelfUseCase {
    store: Arc<dyn SessionStore>,
    pricer: Arc<dyn Pricer>,
    gate: Mutex<()>,
}

impl ShelfUseCase {
    pub fn new(store: Arc<dyn SessionStore>, pricer: Arc<dyn Pricer>) -> Self {
        Self {
            store,
            pricer,
            gate: Mutex::new(()),
        }
    }

    pub async fn handle_command(&self, user_id: &str, command: Command) -> Result<Screen> {
        tracing::info!(user_id, ?command, "command");
        match command {
            Command::Start => Ok(menu(render::WELCOME)),
            Command::Reset => {
                let _guard = self.gate.lock().await;
                let mut snapshot = self.store.load_all().await?;
                if snapshot.remove(user_id).is_some() {
                    self.store.save_all(&snapshot).await?;
                    tracing::info!(user_id, "session reset");
                }
                Ok(menu(format!("Данные сброшены.\n\n{}", render::CHOOSE_ACTION)))
            }
        }
    }

    /// Handles a button press carrying `token`.
    pub async fn handle_action(&self, user_id: &str, token: &str) -> Result<Screen> {
        let Some(action) = Action::parse(token) else {
            tracing::warn!(user_id, token, "unrecognized button");
            return Ok(menu(render::UNRECOGNIZED));
        };
        tracing::info!(user_id, %action, "button");

        let pricer = Arc::clone(&self.pricer);
        self.step(user_id, move |session| {
            conversation::apply_action(session, pricer.as_ref(), &action)
        })
        .await
    }

    /// Handles a plain text message.
    pub async fn handle_text(&self, user_id: &str, text: &str) -> Result<Screen> {
        tracing::info!(user_id, "text");
        self.step(user_id, |session| conversation::apply_text(session, text))
            .await
    }

    /// Priced summary of the user's stored sections. Read-only.
    pub async fn summary(&self, user_id: &str) -> Result<std::result::Result<String, PricingError>> {
        let snapshot = self.store.load_all().await?;
        let sections = snapshot
            .get(user_id)
            .map(|s| s.sections.as_slice())
            .unwrap_or_default();
        Ok(self
            .pricer
            .quote(sections)
            .map(|quote| render::summary(sections, &quote)))
    }

    async fn step<F>(&self, user_id: &str, f: F) -> Result<Screen>
    where
        F: FnOnce(&mut UserSession) -> Screen,
    {
        let _guard = self.gate.lock().await;
        let mut snapshot: SessionSnapshot = self.store.load_all().await?;
        let session = snapshot.session_mut(user_id);
        let before = session.clone();

        let screen = f(session);

        if *session != before {
            tracing::debug!(
                user_id,
                sections = session.sections.len(),
                editing = session.is_editing(),
                "session changed"
            );
            self.store.save_all(&snapshot).await?;
        }
        Ok(screen)
    }
}
