//! Infrastructure for Shelfbot: file-backed stores, paths, configuration and
//! logging setup.

pub mod config_service;
pub mod json_session_store;
pub mod logging;
pub mod memory_session_store;
pub mod paths;
pub mod storage;

pub use crate::config_service::{BOT_TOKEN_ENV, ConfigService, load_bot_token};
pub use crate::json_session_store::JsonSessionStore;
pub use crate::logging::init_tracing;
pub use crate::memory_session_store::InMemorySessionStore;
pub use crate::paths::ShelfPaths;
