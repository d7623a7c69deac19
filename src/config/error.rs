//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Base latitude {0} is outside [-90, 90]")]
    InvalidBaseLatitude(f64),

    #[error("Base longitude {0} is outside [-180, 180]")]
    InvalidBaseLongitude(f64),

    #[error("Log filter directive is empty")]
    EmptyLogLevel,
}
