//! Configuration system for entex.
//!
//! The service reads a single JSON document whose path is given by the
//! `ENTEX_CONFIG` environment variable. Every field is typed and validated
//! once at load time; a missing variable, unreadable file, absent key, or
//! pattern that fails to compile is a fatal startup error, never a
//! request-time one.

mod models;
mod validation;

pub use models::{DictPattern, EdgeMultiplicity, RegexPattern, ServiceConfig};

use figment::providers::{Format, Json};
use figment::Figment;
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "ENTEX_CONFIG";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The `ENTEX_CONFIG` environment variable is not set
    #[error("Environment variable {CONFIG_ENV_VAR} is not set")]
    MissingEnvVar,

    /// The configuration file could not be read
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// The configuration file did not match the expected schema
    #[error("Configuration parsing error: {0}")]
    ParseError(String),

    /// The configuration is well-formed but semantically invalid
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ServiceConfig {
    /// Load the configuration from the file named by `ENTEX_CONFIG`.
    pub fn from_env() -> Result<Self> {
        let path =
            std::env::var(CONFIG_ENV_VAR).map_err(|_| ConfigError::MissingEnvVar)?;
        Self::from_file(path)
    }

    /// Load and validate the configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let config: ServiceConfig = Figment::new()
            .merge(Json::file(path))
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;

        Ok(config)
    }
}
