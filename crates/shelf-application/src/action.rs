//! Button tokens.
//!
//! Every inline button carries one of these as its callback payload. Tokens
//! are short ASCII strings so they stay well under Telegram's 64-byte limit.

use std::fmt;
use std::str::FromStr;

use shelf_core::FieldKey;

/// What a button press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the main menu.
    Menu,
    /// Add one section and start collecting it.
    Add,
    /// One page of the stored sections, counted from 0.
    List(usize),
    /// Price every stored section.
    Apply,
    /// Drop all sections.
    Reset,
    /// Ask how many sections to add at once.
    BatchMenu,
    /// Add this many sections and collect them in turn.
    Batch(usize),
    Open(usize),
    Edit(usize),
    Delete(usize),
    /// A preset value for the given field.
    Pick { field: FieldKey, value: String },
    Manual,
    Presets,
    Back,
    Cancel,
}

impl Action {
    /// Parses a callback token. Returns `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<Action> {
        let (head, rest) = match token.split_once(':') {
            Some((head, rest)) => (head, Some(rest)),
            None => (token, None),
        };

        let action = match (head, rest) {
            ("menu", None) => Action::Menu,
            ("add", None) => Action::Add,
            ("list", None) => Action::List(0),
            ("list", Some(p)) => Action::List(p.parse().ok()?),
            ("apply", None) => Action::Apply,
            ("reset", None) => Action::Reset,
            ("batch", None) => Action::BatchMenu,
            ("batch", Some(n)) => Action::Batch(n.parse().ok()?),
            ("open", Some(i)) => Action::Open(i.parse().ok()?),
            ("edit", Some(i)) => Action::Edit(i.parse().ok()?),
            ("del", Some(i)) => Action::Delete(i.parse().ok()?),
            ("pick", Some(rest)) => {
                let (field, value) = rest.split_once(':')?;
                Action::Pick {
                    field: FieldKey::from_str(field).ok()?,
                    value: value.to_string(),
                }
            }
            ("manual", None) => Action::Manual,
            ("presets", None) => Action::Presets,
            ("back", None) => Action::Back,
            ("cancel", None) => Action::Cancel,
            _ => return None,
        };
        Some(action)
    }

    /// Callback token for this action.
    pub fn to_token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Menu => write!(f, "menu"),
            Action::Add => write!(f, "add"),
            Action::List(0) => write!(f, "list"),
            Action::List(page) => write!(f, "list:{}", page),
            Action::Apply => write!(f, "apply"),
            Action::Reset => write!(f, "reset"),
            Action::BatchMenu => write!(f, "batch"),
            Action::Batch(n) => write!(f, "batch:{}", n),
            Action::Open(i) => write!(f, "open:{}", i),
            Action::Edit(i) => write!(f, "edit:{}", i),
            Action::Delete(i) => write!(f, "del:{}", i),
            Action::Pick { field, value } => write!(f, "pick:{}:{}", field, value),
            Action::Manual => write!(f, "manual"),
            Action::Presets => write!(f, "presets"),
            Action::Back => write!(f, "back"),
            Action::Cancel => write!(f, "cancel"),
        }
    }
}
