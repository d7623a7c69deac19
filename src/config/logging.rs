//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,

    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl LoggingConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// JSON output is forced in production so logs stay machine-readable
    pub fn use_json(&self) -> bool {
        self.json || self.is_production()
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            environment: default_environment(),
        }
    }
}

fn default_log_level() -> String {
    "info,duck_capture=debug".to_string()
}

fn default_environment() -> Environment {
    Environment::Development
}
