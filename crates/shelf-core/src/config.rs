//! Root configuration model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pricing::PricingConfig;

/// Contents of `config.toml`. Every key is optional.
///
/// ```toml
/// data_file = "/var/lib/shelfbot/data.json"
/// log_dir = "/var/log/shelfbot"
///
/// [pricing]
/// strategy = "footprint"
/// price_per_m2 = 1000.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    /// Session snapshot file. Relative paths resolve against the working
    /// directory; unset means `data.json`.
    pub data_file: Option<PathBuf>,
    /// Directory for daily log files. Unset means log to stderr only.
    pub log_dir: Option<PathBuf>,
    pub pricing: PricingConfig,
}

/// Snapshot file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "data.json";

impl RootConfig {
    /// Effective snapshot file path.
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingStrategy;

    #[test]
    fn test_defaults() {
        let config = RootConfig::default();
        assert_eq!(config.data_file(), PathBuf::from("data.json"));
        assert!(config.log_dir.is_none());
        assert_eq!(config.pricing.strategy, PricingStrategy::Footprint);
    }

    #[test]
    fn test_parse_full_file() {
        let config: RootConfig = toml::from_str(
            r#"
data_file = "/tmp/shelves.json"

[pricing]
strategy = "bill_of_materials"
price_per_m2 = 1250.0

[pricing.bom.prices]
post = 900.0
"#,
        )
        .unwrap();

        assert_eq!(config.data_file(), PathBuf::from("/tmp/shelves.json"));
        assert_eq!(config.pricing.price_per_m2, 1250.0);
        assert_eq!(config.pricing.bom.prices.post, 900.0);
        assert_eq!(config.pricing.bom.prices.beam, 420.0);
    }
}
