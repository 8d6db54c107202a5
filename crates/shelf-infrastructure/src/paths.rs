//! Path resolution for Shelfbot configuration.
//!
//! ```text
//! ~/.config/shelfbot/          # Config directory (platform default via `dirs`)
//! └── config.toml              # Application configuration
//! ```
//!
//! `SHELF_CONFIG` points at a different config file.

use std::ffi::OsString;
use std::path::PathBuf;

use shelf_core::ShelfError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SHELF_CONFIG";

const APP_DIR: &str = "shelfbot";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for ShelfError {
    fn from(e: PathError) -> Self {
        ShelfError::config(e.to_string())
    }
}

/// Unified path management for Shelfbot.
pub struct ShelfPaths;

impl ShelfPaths {
    /// Returns the Shelfbot configuration directory (e.g. `~/.config/shelfbot/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the config file path, honouring `SHELF_CONFIG`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Self::config_file_from(std::env::var_os(CONFIG_ENV))
    }

    fn config_file_from(explicit: Option<OsString>) -> Result<PathBuf, PathError> {
        match explicit {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(Self::config_dir()?.join(CONFIG_FILE)),
        }
    }
}
