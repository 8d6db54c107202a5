//! Transport-neutral output: a text plus rows of buttons.

use crate::action::Action;

/// One inline button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: Action,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Rows of buttons, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Empty rows are skipped.
    pub fn row(mut self, buttons: Vec<Button>) -> Self {
        if !buttons.is_empty() {
            self.rows.push(buttons);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// What the user sees after an interaction.
///
/// `text` may contain `<b>` tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Screen {
    pub fn new(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard,
        }
    }

    /// Finds a button by its action. Used by tests and the CLI.
    pub fn button_for(&self, action: &Action) -> Option<&Button> {
        self.keyboard.buttons().find(|b| &b.action == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_skips_empty_rows_and_flattens() {
        let keyboard = Keyboard::new()
            .row(vec![Button::new("a", Action::Add), Button::new("b", Action::List(0))])
            .row(vec![])
            .row(vec![Button::new("c", Action::Menu)]);

        assert_eq!(keyboard.rows.len(), 2);
        let labels: Vec<&str> = keyboard.buttons().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }
}
