//! Duck module - the primordial duck and its physical attributes.
//!
//! # Components
//!
//! - `PrimordialDuck` - Aggregate analysed by capture operations
//! - `Height`, `Weight`, `GpsPrecision` - Measurements with unit conversion
//! - `GeoLocation` - Coordinates with haversine distance
//! - `HibernationStatus` - Awake / InTrance / DeepHibernation
//! - `SuperPower`, `PowerClassification` - Manifested powers

mod aggregate;
mod hibernation;
mod location;
mod measurements;
mod super_power;

pub use aggregate::{PrimordialDuck, MAX_HEART_RATE_BPM};
pub use hibernation::HibernationStatus;
pub use location::{GeoLocation, EARTH_RADIUS_KM};
pub use measurements::{
    GpsPrecision, Height, LengthUnit, MassUnit, PrecisionUnit, Weight, MAX_MAGNITUDE,
};
pub use super_power::{PowerClassification, SuperPower};
