//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: per-user session state (`UserSession`, `EditPointer`, `InputMode`)
//!   and the whole-store snapshot (`SessionSnapshot`)
//! - `repository`: storage trait for snapshots (`SessionStore`)

mod model;
mod repository;

pub use model::{EditPointer, InputMode, SessionSnapshot, UserSession};
pub use repository::SessionStore;
