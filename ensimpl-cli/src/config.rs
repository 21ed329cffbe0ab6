//! Configuration handling for the Ensimpl CLI
//!
//! Supports loading configuration from ensimpl.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use ensimpl_core::UnitMultipliers;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `server.url_prefix`
pub const URL_PREFIX_ENV: &str = "URL_PREFIX";

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ensimpl.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub region: RegionConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Directory holding the ensimpl.{release}.{species}.db3 files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Multiplier applied to the `mb` unit suffix
    #[serde(default = "default_mb_multiplier")]
    pub mb_multiplier: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Turn search storage failures into empty results
    #[serde(default)]
    pub swallow_errors: bool,

    /// Result limit used when a caller does not give one
    #[serde(default = "default_limit")]
    pub default_limit: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// URL path prefix for HTTP deployments
    #[serde(default)]
    pub url_prefix: String,
}

fn default_mb_multiplier() -> i64 { 1_000_000 }
fn default_limit() -> i64 { 100_000 }

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            mb_multiplier: default_mb_multiplier(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            swallow_errors: false,
            default_limit: default_limit(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        config.apply_env(std::env::var(URL_PREFIX_ENV).ok());
        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        if config.region.mb_multiplier <= 0 {
            anyhow::bail!(
                "Invalid configuration file {}: region.mb_multiplier must be positive",
                path.display()
            );
        }

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        let config = Self::default();
        toml::to_string_pretty(&config).context("Failed to serialize default configuration")
    }

    fn apply_env(&mut self, url_prefix: Option<String>) {
        if let Some(prefix) = url_prefix {
            log::debug!("{} overrides server.url_prefix: {}", URL_PREFIX_ENV, prefix);
            self.server.url_prefix = prefix;
        }
    }

    /// Unit multipliers for region terms; only `mb` is configurable
    pub fn units(&self) -> UnitMultipliers {
        UnitMultipliers {
            mb: self.region.mb_multiplier,
            ..UnitMultipliers::default()
        }
    }

    /// Database directory: command line first, then this file. `None` defers to `ENSIMPL_DIR`.
    pub fn directory<'a>(&'a self, from_cli: Option<&'a Path>) -> Option<&'a Path> {
        from_cli.or(self.database.directory.as_deref())
    }
}
