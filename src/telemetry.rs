//! Tracing subscriber setup.

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Global subscriber could not be installed: {0}")]
    InstallFailed(String),
}

/// Builds the log filter: `RUST_LOG` wins when set, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if std::env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::from_default_env());
    }
    Ok(EnvFilter::try_new(&config.level)?)
}

/// Installs the global tracing subscriber.
///
/// Output goes to stderr, as JSON lines when configured or in production.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    let installed = if config.use_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| TelemetryError::InstallFailed(e.to_string()))?;

    debug!(
        json = config.use_json(),
        environment = ?config.environment,
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_parsed() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "warn,duck_capture=trace".to_string(),
            ..Default::default()
        };
        let filter = env_filter(&config).unwrap();
        assert!(filter.to_string().contains("duck_capture=trace"));
    }

    #[test]
    fn malformed_level_is_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "duck_capture=loudest".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            env_filter(&config),
            Err(TelemetryError::InvalidFilter(_))
        ));
    }

    #[test]
    fn second_install_fails_cleanly() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
