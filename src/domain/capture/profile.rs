//! Normalised view of a duck used by every scoring rule.

use crate::domain::duck::{GeoLocation, HibernationStatus, PowerClassification, PrimordialDuck};

/// Duck attributes converted to the canonical units the rules are written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CaptureProfile {
    pub height_cm: f64,
    pub weight_g: f64,
    pub gps_precision_cm: f64,
    pub distance_km: f64,
    pub status: HibernationStatus,
    pub heart_rate: Option<u32>,
    pub mutations: u32,
    pub power: Option<PowerClassification>,
}

impl CaptureProfile {
    pub(crate) fn from_duck(duck: &PrimordialDuck, base: &GeoLocation) -> Self {
        Self {
            height_cm: duck.height().to_centimeters(),
            weight_g: duck.weight().to_grams(),
            gps_precision_cm: duck.gps_precision().to_centimeters(),
            distance_km: base.distance_km_to(duck.location()),
            status: duck.hibernation_status(),
            heart_rate: duck.heart_rate(),
            mutations: duck.mutation_count(),
            power: duck.super_power().map(|p| p.classification()),
        }
    }

    pub(crate) fn mutations_f64(&self) -> f64 {
        f64::from(self.mutations)
    }

    /// Heart rate as a ladder input; only consulted while in trance.
    pub(crate) fn trance_heart_rate(&self) -> Option<f64> {
        match self.status {
            HibernationStatus::InTrance => self.heart_rate.map(f64::from),
            _ => None,
        }
    }
}
