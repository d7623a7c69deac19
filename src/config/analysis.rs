//! Capture analysis configuration

use serde::Deserialize;

use crate::domain::capture::{CaptureAnalysisEngine, BASE_LATITUDE, BASE_LONGITUDE};
use crate::domain::duck::GeoLocation;

use super::error::ValidationError;

/// Capture analysis configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    /// Latitude of the operations base, in decimal degrees
    #[serde(default = "default_base_latitude")]
    pub base_latitude: f64,

    /// Longitude of the operations base, in decimal degrees
    #[serde(default = "default_base_longitude")]
    pub base_longitude: f64,
}

impl AnalysisConfig {
    /// Get the configured operations base
    pub fn base_location(&self) -> Result<GeoLocation, ValidationError> {
        self.validate()?;
        GeoLocation::new(self.base_latitude, self.base_longitude)
            .map_err(|_| ValidationError::InvalidBaseLatitude(self.base_latitude))
    }

    /// Build an analysis engine measuring distances from the configured base
    pub fn engine(&self) -> Result<CaptureAnalysisEngine, ValidationError> {
        Ok(CaptureAnalysisEngine::new(self.base_location()?))
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-90.0..=90.0).contains(&self.base_latitude) {
            return Err(ValidationError::InvalidBaseLatitude(self.base_latitude));
        }
        if !(-180.0..=180.0).contains(&self.base_longitude) {
            return Err(ValidationError::InvalidBaseLongitude(self.base_longitude));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_latitude: default_base_latitude(),
            base_longitude: default_base_longitude(),
        }
    }
}

fn default_base_latitude() -> f64 {
    BASE_LATITUDE
}

fn default_base_longitude() -> f64 {
    BASE_LONGITUDE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capture::OPERATIONS_BASE;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.base_latitude, -22.23346927395992);
        assert_eq!(config.base_longitude, -49.934162215340926);
        assert_eq!(config.base_location().unwrap(), OPERATIONS_BASE);
    }

    #[test]
    fn test_validation_latitude_out_of_range() {
        let config = AnalysisConfig {
            base_latitude: 91.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidBaseLatitude(91.0))
        );
    }

    #[test]
    fn test_validation_longitude_out_of_range() {
        let config = AnalysisConfig {
            base_longitude: -180.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidBaseLongitude(-180.5))
        );
    }

    #[test]
    fn test_validation_rejects_nan() {
        let config = AnalysisConfig {
            base_latitude: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(config.engine().is_err());
    }

    #[test]
    fn test_engine_uses_configured_base() {
        let config = AnalysisConfig {
            base_latitude: 10.0,
            base_longitude: 20.0,
        };
        let engine = config.engine().unwrap();
        assert_eq!(engine.base().latitude(), 10.0);
        assert_eq!(engine.base().longitude(), 20.0);
    }
}
