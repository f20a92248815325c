//! Configuration management for the produce inventory server.
//!
//! This module provides configuration loading with multiple sources:
//! 1. Default values (hardcoded)
//! 2. Configuration file (YAML)
//! 3. Environment variables (override)
//!
//! # Configuration Hierarchy
//!
//! Environment variables take precedence over config file values,
//! which take precedence over defaults.
//!
//! # Example
//!
//! ```ignore
//! use produce_server::config::ServerConfig;
//!
//! // Load from file with env overrides
//! let config = ServerConfig::load("config.yaml")?;
//!
//! // Or load from environment only
//! let config = ServerConfig::from_env()?;
//! ```

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PRODUCE";

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Server network settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerSettings {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum request body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit() -> usize {
    1024 * 1024
}

/// Storage settings.
///
/// Only the in-memory store exists; nothing survives a restart.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageSettings {
    /// Start with the default inventory instead of an empty table.
    ///
    /// Environment variable: `PRODUCE_STORAGE__SEED_INVENTORY`
    #[serde(default = "default_true")]
    pub seed_inventory: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            seed_inventory: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format (true for production, false for development)
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl ServerConfig {
    /// Load configuration from a YAML file with environment variable overrides.
    ///
    /// Environment variables are prefixed with `PRODUCE_` and use `__` as separator.
    /// For example:
    /// - `PRODUCE_SERVER__PORT=9090` overrides `server.port`
    /// - `PRODUCE_LOGGING__JSON=true` overrides `logging.json`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let config = Config::builder()
            .add_source(Config::try_from(&ServerConfig::default())?)
            .add_source(File::from(path).format(FileFormat::Yaml))
            .add_source(env_source())
            .build()?;

        Self::finish(config)
    }

    /// Load configuration from environment variables only.
    ///
    /// Uses default values and allows overrides via PRODUCE_ prefixed env vars.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let config = Config::builder()
            .add_source(Config::try_from(&ServerConfig::default())?)
            .add_source(env_source())
            .build()?;

        Self::finish(config)
    }

    fn finish(config: Config) -> Result<Self, ConfigLoadError> {
        let server_config: ServerConfig = config.try_deserialize()?;
        server_config.validate()?;
        Ok(server_config)
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.server.port == 0 {
            return Err(ConfigLoadError::Invalid {
                message: "server.port must be greater than 0".to_string(),
            });
        }

        if self.server.body_limit_bytes == 0 {
            return Err(ConfigLoadError::Invalid {
                message: "server.body_limit_bytes must be greater than 0".to_string(),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigLoadError::Invalid {
                message: format!(
                    "logging.level must be one of: {:?}, got: {}",
                    valid_levels, self.logging.level
                ),
            });
        }

        Ok(())
    }
}

// PRODUCE_SERVER__PORT -> server.port
fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test: Can load config from YAML file
    #[test]
    #[serial]
    fn test_can_load_config_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  host: "127.0.0.1"
  port: 9090
  body_limit_bytes: 4096

storage:
  seed_inventory: false

logging:
  level: debug
  json: true
"#
        )
        .unwrap();

        let config = ServerConfig::load(file.path()).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.body_limit_bytes, 4096);
        assert!(!config.storage.seed_inventory);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    /// Test: Can override config with env vars
    #[test]
    #[serial]
    fn test_can_override_config_with_env_vars() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  host: "127.0.0.1"
  port: 8080
"#
        )
        .unwrap();

        std::env::set_var("PRODUCE_SERVER__PORT", "9999");
        std::env::set_var("PRODUCE_LOGGING__LEVEL", "warn");

        let config = ServerConfig::load(file.path());

        std::env::remove_var("PRODUCE_SERVER__PORT");
        std::env::remove_var("PRODUCE_LOGGING__LEVEL");

        let config = config.unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.server.host, "127.0.0.1");
    }

    /// Test: Config validation catches errors
    #[test]
    fn test_config_validation_catches_errors() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigLoadError::Invalid { .. })
        ));

        let mut config = ServerConfig::default();
        config.server.body_limit_bytes = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.logging.level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    /// Test: Missing config file returns a clear error
    #[test]
    fn test_missing_config_file_returns_clear_error() {
        let result = ServerConfig::load("/nonexistent/produce.yaml");
        assert!(matches!(
            result,
            Err(ConfigLoadError::FileNotFound { .. })
        ));
    }

    /// Test: Default config is valid
    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert!(config.storage.seed_inventory);
        assert_eq!(config.logging.level, "info");
    }

    /// Test: from_env loads defaults with env overrides
    #[test]
    #[serial]
    fn test_from_env_loads_defaults_with_env_overrides() {
        std::env::set_var("PRODUCE_STORAGE__SEED_INVENTORY", "false");

        let config = ServerConfig::from_env();

        std::env::remove_var("PRODUCE_STORAGE__SEED_INVENTORY");

        let config = config.unwrap();
        assert!(!config.storage.seed_inventory);
        assert_eq!(config.server.port, 8080);
    }
}
