//! Application layer for Shelfbot.
//!
//! Turns button presses, commands and free text into wizard transitions and
//! renders the resulting [`Screen`]. Nothing here knows about a particular
//! chat transport.

pub mod action;
pub mod conversation;
pub mod render;
pub mod screen;
pub mod usecase;

pub use action::Action;
pub use screen::{Button, Keyboard, Screen};
pub use usecase::{Command, ShelfUseCase};
