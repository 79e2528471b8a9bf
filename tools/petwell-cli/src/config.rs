//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog snapshot location.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Storefront settings.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the catalog snapshot lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON snapshot, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Storefront settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// ISO code of the cart currency.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default petwell.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Petwell storefront configuration

[catalog]
path = "{catalog_path}"

[storefront]
currency = "USD"

[log]
# Overridden by RUST_LOG.
level = "warn"
# "human" or "json"
format = "human"
"#,
        catalog_path = catalog_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("catalog.json")).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("catalog.json"));
        assert_eq!(config.storefront.currency, "USD");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, LogFormat::Human);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: CliConfig = toml::from_str("[log]\nformat = \"json\"\n").unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.storefront.currency, "USD");
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
