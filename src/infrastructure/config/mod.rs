//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading (the stored settings)
//! - Environment variable overrides (the deploy-time constant)
//! - Configuration validation
//! - API key provenance tracking

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, API_KEY_ENV_VAR};
