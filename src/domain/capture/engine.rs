//! Capture analysis engine.
//!
//! Turns a [`PrimordialDuck`] into a [`CaptureAnalysisResult`]: four
//! sub-scores, an overall score with its priority band, the distance from
//! the operations base, and the ordered risk and value factors.
//!
//! The engine is pure and synchronous. It holds no mutable state, so a
//! single instance can be shared behind an `Arc` by every handler.

use serde::{Deserialize, Serialize};

use crate::domain::duck::{GeoLocation, PrimordialDuck};
use crate::domain::foundation::Score;

use super::factors::{risk_factors, value_factors};
use super::profile::CaptureProfile;
use super::scoring::{overall_score, SubScores};
use super::{CapturePriority, ScoringWeights};

/// Latitude of the operations base, in decimal degrees.
pub const BASE_LATITUDE: f64 = -22.23346927395992;

/// Longitude of the operations base, in decimal degrees.
pub const BASE_LONGITUDE: f64 = -49.934162215340926;

/// Fixed point every capture distance is measured from.
pub const OPERATIONS_BASE: GeoLocation = GeoLocation::from_trusted(BASE_LATITUDE, BASE_LONGITUDE);

/// Outcome of analyzing a single duck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureAnalysisResult {
    operational_cost: Score,
    military_power: Score,
    risk_level: Score,
    scientific_value: Score,
    overall_score: Score,
    distance_from_base: f64,
    classification: CapturePriority,
    risk_factors: Vec<String>,
    value_factors: Vec<String>,
}

impl CaptureAnalysisResult {
    pub fn operational_cost(&self) -> Score {
        self.operational_cost
    }

    pub fn military_power(&self) -> Score {
        self.military_power
    }

    pub fn risk_level(&self) -> Score {
        self.risk_level
    }

    pub fn scientific_value(&self) -> Score {
        self.scientific_value
    }

    /// Combined score, always within 1..=100.
    pub fn overall_score(&self) -> Score {
        self.overall_score
    }

    /// Great-circle distance from the operations base, in kilometers.
    pub fn distance_from_base(&self) -> f64 {
        self.distance_from_base
    }

    pub fn classification(&self) -> CapturePriority {
        self.classification
    }

    pub fn risk_factors(&self) -> &[String] {
        &self.risk_factors
    }

    pub fn value_factors(&self) -> &[String] {
        &self.value_factors
    }
}

/// Scores ducks relative to a base location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureAnalysisEngine {
    base: GeoLocation,
    weights: ScoringWeights,
}

impl CaptureAnalysisEngine {
    /// Creates an engine measuring distances from `base`.
    pub fn new(base: GeoLocation) -> Self {
        Self {
            base,
            weights: ScoringWeights::default(),
        }
    }

    /// Replaces the weights used to combine the sub-scores.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn base(&self) -> &GeoLocation {
        &self.base
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Analyzes a duck. Never fails: every constructible duck has a result.
    pub fn analyze(&self, duck: &PrimordialDuck) -> CaptureAnalysisResult {
        let profile = CaptureProfile::from_duck(duck, &self.base);
        let scores = SubScores::of(&profile);
        let overall = overall_score(&scores, profile.status, &self.weights);

        CaptureAnalysisResult {
            operational_cost: scores.operational_cost,
            military_power: scores.military_power,
            risk_level: scores.risk_level,
            scientific_value: scores.scientific_value,
            overall_score: overall,
            distance_from_base: profile.distance_km,
            classification: CapturePriority::from_score(overall),
            risk_factors: risk_factors(&profile),
            value_factors: value_factors(&profile),
        }
    }
}

impl Default for CaptureAnalysisEngine {
    fn default() -> Self {
        Self::new(OPERATIONS_BASE)
    }
}
