//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Mean Earth radius used for distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Creates a location, validating coordinate ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() {
            return Err(ValidationError::not_finite("latitude"));
        }
        if !longitude.is_finite() {
            return Err(ValidationError::not_finite("longitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::out_of_range("latitude", -90.0, 90.0, latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::out_of_range(
                "longitude",
                -180.0,
                180.0,
                longitude,
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds a location from coordinates already known to be in range.
    pub(crate) const fn from_trusted(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Haversine great-circle distance to another point, in kilometers.
    pub fn distance_km_to(&self, other: &GeoLocation) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lng = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}
