use serde::{Deserialize, Serialize};

/// Where the resolved API key came from.
///
/// Hosts use this to decide whether to surface their own credential
/// settings UI: a key fixed by the environment is not editable at runtime,
/// so the UI should be suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeySource {
    /// Fixed by the deployment environment; overrides any stored setting.
    Environment,
    /// Read from the stored configuration file.
    File,
    /// No key configured. Requests proceed unauthenticated and the
    /// upstream rejection surfaces as an empty result.
    #[default]
    Unset,
}

/// Main configuration for the Unsplash provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProviderConfig {
    /// Unsplash API key (the application's Client-ID credential).
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for the Unsplash API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds for listing and search calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Provenance of `api_key`, filled in by the loader.
    #[serde(skip)]
    pub api_key_source: ApiKeySource,
}

fn default_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            logging: LoggingConfig::default(),
            api_key_source: ApiKeySource::Unset,
        }
    }
}

impl ProviderConfig {
    /// Whether the credential settings UI should be hidden from the host,
    /// i.e. the key is fixed by the environment.
    #[must_use]
    pub fn suppresses_key_setting(&self) -> bool {
        self.api_key_source == ApiKeySource::Environment
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, "https://api.unsplash.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.api_key_source, ApiKeySource::Unset);
        assert!(!config.suppresses_key_setting());
    }

    #[test]
    fn test_environment_key_suppresses_setting() {
        let config = ProviderConfig {
            api_key: Some("abc".to_string()),
            api_key_source: ApiKeySource::Environment,
            ..Default::default()
        };
        assert!(config.suppresses_key_setting());
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
api_key: test-client-id
base_url: https://unsplash.internal
timeout_secs: 5
logging:
  level: debug
  format: json
";
        let config: ProviderConfig = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(config.api_key.as_deref(), Some("test-client-id"));
        assert_eq!(config.base_url, "https://unsplash.internal");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }
}
