//! Configuration service implementation.
//!
//! Loads [`RootConfig`] from `config.toml` (see [`ShelfPaths::config_file`]),
//! applies environment overrides and caches the result.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use shelf_core::config::RootConfig;
use shelf_core::error::Result;
use shelf_core::ShelfError;

use crate::paths::ShelfPaths;

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Environment variable overriding `data_file`.
pub const DATA_FILE_ENV: &str = "SHELF_DATA_FILE";

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default config location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ShelfPaths::config_file()?))
    }

    /// Creates a service reading `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Path of the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading it on first access.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = Self::load_file(&self.path)?;
        apply_env_overrides(&mut loaded, std::env::var_os(DATA_FILE_ENV));

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    fn load_file(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: RootConfig = toml::from_str(&content).map_err(|e| {
            ShelfError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

fn apply_env_overrides(config: &mut RootConfig, data_file: Option<OsString>) {
    if let Some(path) = data_file.filter(|p| !p.is_empty()) {
        config.data_file = Some(PathBuf::from(path));
    }
}

/// Reads the bot token from `BOT_TOKEN`.
pub fn load_bot_token() -> Result<String> {
    token_from(std::env::var(BOT_TOKEN_ENV).ok())
}

fn token_from(raw: Option<String>) -> Result<String> {
    raw.map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ShelfError::config(format!("{} is not set", BOT_TOKEN_ENV)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::pricing::PricingStrategy;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = ConfigService::load_file(service.path()).unwrap();
        assert_eq!(config, RootConfig::default());
    }

    #[test]
    fn test_reads_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[pricing]\nstrategy = \"bill_of_materials\"\nprice_per_m2 = 1500.0\n",
        )
        .unwrap();
        let service = ConfigService::with_path(&path);

        let first = service.get_config().unwrap();
        assert_eq!(first.pricing.strategy, PricingStrategy::BillOfMaterials);

        std::fs::write(&path, "[pricing]\nprice_per_m2 = 10.0\n").unwrap();
        assert_eq!(service.get_config().unwrap().pricing.price_per_m2, 1500.0);

        let fresh = ConfigService::with_path(&path);
        assert_eq!(fresh.get_config().unwrap().pricing.price_per_m2, 10.0);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "data_file = [").unwrap();

        let err = ConfigService::load_file(&path).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_data_file_override() {
        let mut config = RootConfig::default();
        apply_env_overrides(&mut config, Some(OsString::from("/srv/shelves.json")));
        assert_eq!(config.data_file(), PathBuf::from("/srv/shelves.json"));

        let mut config = RootConfig::default();
        apply_env_overrides(&mut config, Some(OsString::new()));
        assert_eq!(config.data_file(), PathBuf::from("data.json"));
    }

    #[test]
    fn test_token_required() {
        assert!(token_from(None).unwrap_err().is_config());
        assert!(token_from(Some("   ".to_string())).is_err());
        assert_eq!(token_from(Some(" 123:abc\n".to_string())).unwrap(), "123:abc");
    }
}
