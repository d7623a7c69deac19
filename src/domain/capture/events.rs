//! Events emitted by capture analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, DuckId, EventId, Score, Timestamp};

use super::{CaptureAnalysisResult, CapturePriority};

/// Published each time a duck has been analyzed.
///
/// Carries the sub-scores, overall score, classification and distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureAnalysisComputed {
    pub event_id: EventId,
    pub duck_id: DuckId,
    pub operational_cost: Score,
    pub military_power: Score,
    pub risk_level: Score,
    pub scientific_value: Score,
    pub overall_score: Score,
    pub classification: CapturePriority,
    pub distance_from_base: f64,
    pub computed_at: Timestamp,
}

impl CaptureAnalysisComputed {
    pub fn from_result(duck_id: DuckId, result: &CaptureAnalysisResult) -> Self {
        Self {
            event_id: EventId::new(),
            duck_id,
            operational_cost: result.operational_cost(),
            military_power: result.military_power(),
            risk_level: result.risk_level(),
            scientific_value: result.scientific_value(),
            overall_score: result.overall_score(),
            classification: result.classification(),
            distance_from_base: result.distance_from_base(),
            computed_at: Timestamp::now(),
        }
    }
}

domain_event!(
    CaptureAnalysisComputed,
    event_type = "capture.analysis_computed.v1",
    schema_version = 1,
    aggregate_id = duck_id,
    aggregate_type = "PrimordialDuck",
    occurred_at = computed_at,
    event_id = event_id
);
