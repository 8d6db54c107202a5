//! Session domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Which input channel the current prompt expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Offer preset values as buttons.
    #[default]
    Presets,
    /// Ask the user to type the value.
    Manual,
}

impl InputMode {
    fn is_default(&self) -> bool {
        *self == InputMode::default()
    }
}

/// Points at the field currently being collected.
///
/// `idx` must name an existing section and `field_i` must be below the field
/// count. Sections can be deleted while a pointer exists, so readers check
/// before dereferencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPointer {
    pub idx: usize,
    pub field_i: usize,
    #[serde(default, skip_serializing_if = "InputMode::is_default")]
    pub input_mode: InputMode,
    /// Last section index of a batch run; the wizard continues into the next
    /// section until it has completed this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_end: Option<usize>,
}

impl EditPointer {
    /// Pointer at the first field of section `idx`.
    pub fn at_start(idx: usize) -> Self {
        Self {
            idx,
            field_i: 0,
            input_mode: InputMode::default(),
            batch_end: None,
        }
    }
}

/// One chat participant's accumulated sections and wizard progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub editing: Option<EditPointer>,
}

impl UserSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a field is being collected.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

/// Every user's session, keyed by user identifier.
///
/// This is the unit of persistence: stores read and write it whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionSnapshot {
    users: BTreeMap<String, UserSession>,
}

impl SessionSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: &str) -> Option<&UserSession> {
        self.users.get(user_id)
    }

    /// Returns the user's session, creating an empty one on first access.
    pub fn session_mut(&mut self, user_id: &str) -> &mut UserSession {
        self.users.entry(user_id.to_string()).or_default()
    }

    pub fn insert(&mut self, user_id: impl Into<String>, session: UserSession) {
        self.users.insert(user_id.into(), session);
    }

    pub fn remove(&mut self, user_id: &str) -> Option<UserSession> {
        self.users.remove(user_id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
