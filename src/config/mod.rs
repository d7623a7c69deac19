//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DUCK_CAPTURE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use duck_capture::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = config.analysis.engine().expect("Invalid base location");
//! ```

mod analysis;
mod error;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{Environment, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "DUCK_CAPTURE";
const ENV_SEPARATOR: &str = "__";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Capture analysis configuration (operations base)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration (filter, format, environment)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DUCK_CAPTURE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DUCK_CAPTURE__ANALYSIS__BASE_LATITUDE=-22.5` -> `analysis.base_latitude = -22.5`
    /// - `DUCK_CAPTURE__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables taking precedence
    ///
    /// The file format is inferred from its extension (`.toml`, `.yaml`, `.json`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or unreadable, or if
    /// values cannot be parsed into expected types.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.logging.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "DUCK_CAPTURE__ANALYSIS__BASE_LATITUDE",
        "DUCK_CAPTURE__ANALYSIS__BASE_LONGITUDE",
        "DUCK_CAPTURE__LOGGING__LEVEL",
        "DUCK_CAPTURE__LOGGING__JSON",
        "DUCK_CAPTURE__LOGGING__ENVIRONMENT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis, AnalysisConfig::default());
        assert_eq!(config.logging.level, "info,duck_capture=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DUCK_CAPTURE__ANALYSIS__BASE_LATITUDE", "-23.5");
        env::set_var("DUCK_CAPTURE__ANALYSIS__BASE_LONGITUDE", "-46.6");
        env::set_var("DUCK_CAPTURE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.base_latitude, -23.5);
        assert_eq!(config.analysis.base_longitude, -46.6);
        assert!(config.logging.json);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DUCK_CAPTURE__LOGGING__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_rejects_out_of_range_base() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DUCK_CAPTURE__ANALYSIS__BASE_LATITUDE", "120");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidBaseLatitude(120.0))
        );
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[analysis]\nbase_latitude = 51.5\nbase_longitude = -0.12\n\n[logging]\nlevel = \"warn\""
        )
        .unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.analysis.base_latitude, 51.5);
        assert_eq!(config.analysis.base_longitude, -0.12);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analysis]\nbase_latitude = 51.5").unwrap();

        env::set_var("DUCK_CAPTURE__ANALYSIS__BASE_LATITUDE", "12.0");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().analysis.base_latitude, 12.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from_file(dir.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
