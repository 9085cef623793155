use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::{ApiKeySource, ProviderConfig};

/// Environment variable fixing the API key for a deployment.
///
/// When set, it wins over anything in the stored configuration file and the
/// host's credential settings UI should be suppressed.
pub const API_KEY_ENV_VAR: &str = "UNSPLASH_API_KEY";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid timeout: {0}. Must be at least 1 second")]
    InvalidTimeout(u64),

    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("API key, when set, cannot be empty")]
    EmptyApiKey,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .unsplash/config.yaml (stored settings)
    /// 3. Environment variables (`UNSPLASH_*` prefix)
    ///
    /// The environment layer is the deploy-time constant of this crate: a
    /// key in `UNSPLASH_API_KEY` overrides the stored setting, and
    /// `api_key_source` records which layer supplied the key so hosts can
    /// hide their credential UI when it is not editable.
    pub fn load() -> Result<ProviderConfig> {
        let mut config: ProviderConfig = Figment::new()
            .merge(Serialized::defaults(ProviderConfig::default()))
            .merge(Yaml::file(".unsplash/config.yaml"))
            .merge(Env::prefixed("UNSPLASH_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        config.api_key_source = if std::env::var(API_KEY_ENV_VAR).is_ok() {
            ApiKeySource::Environment
        } else if config.api_key.is_some() {
            ApiKeySource::File
        } else {
            ApiKeySource::Unset
        };

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, ignoring the environment
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<ProviderConfig> {
        let mut config: ProviderConfig = Figment::new()
            .merge(Serialized::defaults(ProviderConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        config.api_key_source = if config.api_key.is_some() {
            ApiKeySource::File
        } else {
            ApiKeySource::Unset
        };

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &ProviderConfig) -> Result<(), ConfigError> {
        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }

        if config.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        if config.api_key.as_deref() == Some("") {
            return Err(ConfigError::EmptyApiKey);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
