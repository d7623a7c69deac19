//! Weights combining the four sub-scores into the overall capture score.

use serde::{Deserialize, Serialize};

use crate::domain::duck::HibernationStatus;

/// Rates are expressed in hundredths (40 means ×0.40) so the combination
/// stays in exact integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Operational cost above this uses `high_cost_rate`.
    pub cost_penalty_threshold: u8,
    pub high_cost_rate: i64,
    pub low_cost_rate: i64,

    /// Risk level above this uses `high_risk_rate`.
    pub risk_penalty_threshold: u8,
    pub high_risk_rate: i64,
    pub low_risk_rate: i64,

    pub military_rate: i64,
    pub science_rate: i64,

    /// Whole points added (or removed) for how easy the duck is to approach.
    pub deep_hibernation_bonus: i64,
    pub in_trance_bonus: i64,
    pub awake_bonus: i64,
}

impl ScoringWeights {
    /// Rate applied to the operational cost penalty.
    pub fn cost_rate(&self, operational_cost: u8) -> i64 {
        if operational_cost > self.cost_penalty_threshold {
            self.high_cost_rate
        } else {
            self.low_cost_rate
        }
    }

    /// Rate applied to the risk penalty.
    pub fn risk_rate(&self, risk_level: u8) -> i64 {
        if risk_level > self.risk_penalty_threshold {
            self.high_risk_rate
        } else {
            self.low_risk_rate
        }
    }

    /// Capturability bonus for a hibernation state.
    pub fn capturability_bonus(&self, status: HibernationStatus) -> i64 {
        match status {
            HibernationStatus::DeepHibernation => self.deep_hibernation_bonus,
            HibernationStatus::InTrance => self.in_trance_bonus,
            HibernationStatus::Awake => self.awake_bonus,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost_penalty_threshold: 80,
            high_cost_rate: 40,
            low_cost_rate: 25,
            risk_penalty_threshold: 70,
            high_risk_rate: 60,
            low_risk_rate: 35,
            military_rate: 30,
            science_rate: 120,
            deep_hibernation_bonus: 35,
            in_trance_bonus: 20,
            awake_bonus: -25,
        }
    }
}
