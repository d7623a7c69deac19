//! Sub-score rules for capture analysis.
//!
//! Every ladder lives here as a named table so the magic numbers can be
//! reviewed in one place. All arithmetic is integer; multipliers are held in
//! tenths and truncated after each multiplication.

use crate::domain::duck::{HibernationStatus, PowerClassification};
use crate::domain::foundation::Score;

use super::brackets::Threshold::{Above, AtLeast, AtMost, Exactly};
use super::brackets::{ExtremityLadder, Ladder, PairLadder};
use super::profile::CaptureProfile;
use super::weights::ScoringWeights;

// ─────────────────────────────────────────────────────────────────────────────
// Super power weights
// ─────────────────────────────────────────────────────────────────────────────

/// Contribution of a super power classification to each sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PowerWeights {
    pub cost: i64,
    pub military: i64,
    pub risk: i64,
    pub value: i64,
}

pub(crate) fn power_weights(classification: PowerClassification) -> PowerWeights {
    let (cost, military, risk, value) = match classification {
        PowerClassification::Temporal => (25, 28, 22, 30),
        PowerClassification::Dimensional => (22, 30, 20, 28),
        PowerClassification::Psychic => (18, 25, 18, 20),
        PowerClassification::Technological => (15, 18, 12, 18),
        PowerClassification::Warlike => (12, 35, 25, 8),
        PowerClassification::Elemental => (10, 22, 15, 12),
        PowerClassification::Biological => (8, 15, 10, 15),
        PowerClassification::Defensive => (5, 8, 5, 10),
        PowerClassification::Other => (3, 5, 3, 5),
    };
    PowerWeights {
        cost,
        military,
        risk,
        value,
    }
}

/// Applies a multiplier held in tenths, truncating toward zero.
fn scale_tenths(points: i64, tenths: i64) -> i64 {
    points * tenths / 10
}

// ─────────────────────────────────────────────────────────────────────────────
// Operational cost
// ─────────────────────────────────────────────────────────────────────────────

const COST_BASE: i64 = 15;

const COST_HEIGHT: Ladder = Ladder::new(
    &[
        (Above(3000.0), 45),
        (Above(1500.0), 35),
        (Above(800.0), 25),
        (Above(300.0), 15),
        (Above(150.0), 10),
    ],
    5,
);

const COST_WEIGHT: Ladder = Ladder::new(
    &[
        (Above(250_000.0), 40),
        (Above(150_000.0), 30),
        (Above(80_000.0), 20),
        (Above(30_000.0), 15),
        (Above(15_000.0), 10),
    ],
    5,
);

const COST_DISTANCE: Ladder = Ladder::new(
    &[
        (Above(5000.0), 35),
        (Above(2000.0), 25),
        (Above(1000.0), 18),
        (Above(500.0), 12),
        (Above(200.0), 8),
        (Above(50.0), 4),
    ],
    1,
);

const COST_GPS: Ladder = Ladder::new(
    &[
        (Above(2000.0), 20),
        (Above(1000.0), 15),
        (Above(500.0), 12),
        (Above(100.0), 8),
        (Above(50.0), 5),
        (Above(20.0), 3),
    ],
    1,
);

/// Points per mutation; only the highest bracket applies.
const COST_PER_MUTATION: Ladder =
    Ladder::new(&[(AtLeast(10.0), 3), (AtLeast(5.0), 2), (AtLeast(1.0), 1)], 0);

fn cost_for_status(status: HibernationStatus) -> i64 {
    match status {
        HibernationStatus::Awake => 30,
        HibernationStatus::InTrance => 15,
        HibernationStatus::DeepHibernation => 5,
    }
}

pub(crate) fn operational_cost(profile: &CaptureProfile) -> Score {
    let mutations = i64::from(profile.mutations);

    let total = COST_BASE
        + COST_HEIGHT.points(profile.height_cm)
        + COST_WEIGHT.points(profile.weight_g)
        + COST_DISTANCE.points(profile.distance_km)
        + COST_GPS.points(profile.gps_precision_cm)
        + COST_PER_MUTATION.points(profile.mutations_f64()) * mutations
        + profile.power.map(|p| power_weights(p).cost).unwrap_or(0)
        + cost_for_status(profile.status);

    Score::saturating(total)
}

// ─────────────────────────────────────────────────────────────────────────────
// Military power
// ─────────────────────────────────────────────────────────────────────────────

const MILITARY_BASE: i64 = 10;

/// (height cm, weight g) pairs that must both be exceeded.
const MILITARY_SIZE: PairLadder = PairLadder::new(
    &[
        (2000.0, 200_000.0, 30),
        (1000.0, 100_000.0, 25),
        (500.0, 50_000.0, 20),
        (300.0, 30_000.0, 15),
        (150.0, 15_000.0, 10),
    ],
    5,
);

/// Trance multiplier in tenths, keyed by heart rate.
const TRANCE_MULTIPLIER: Ladder = Ladder::new(
    &[
        (Above(150.0), 22),
        (Above(100.0), 18),
        (Above(60.0), 14),
        (Above(30.0), 10),
    ],
    6,
);

const MILITARY_PER_MUTATION: Ladder = Ladder::new(
    &[
        (AtLeast(8.0), 5),
        (AtLeast(5.0), 4),
        (AtLeast(3.0), 3),
        (AtLeast(1.0), 2),
    ],
    0,
);

fn military_multiplier_tenths(profile: &CaptureProfile) -> i64 {
    match profile.status {
        HibernationStatus::Awake => 30,
        HibernationStatus::InTrance => profile
            .trance_heart_rate()
            .map(|bpm| TRANCE_MULTIPLIER.points(bpm))
            .unwrap_or(10),
        HibernationStatus::DeepHibernation => 3,
    }
}

fn power_military_scale_tenths(status: HibernationStatus) -> i64 {
    match status {
        HibernationStatus::Awake => 15,
        HibernationStatus::InTrance => 7,
        HibernationStatus::DeepHibernation => 2,
    }
}

pub(crate) fn military_power(profile: &CaptureProfile) -> Score {
    let mutations = i64::from(profile.mutations);

    let mut total = MILITARY_BASE + MILITARY_SIZE.points(profile.height_cm, profile.weight_g);
    total = scale_tenths(total, military_multiplier_tenths(profile));

    if let Some(power) = profile.power {
        total += scale_tenths(
            power_weights(power).military,
            power_military_scale_tenths(profile.status),
        );
    }

    total += MILITARY_PER_MUTATION.points(profile.mutations_f64()) * mutations;

    Score::saturating(total)
}

// ─────────────────────────────────────────────────────────────────────────────
// Risk level
// ─────────────────────────────────────────────────────────────────────────────

const RISK_BASE: i64 = 5;

const TRANCE_RISK: Ladder = Ladder::new(
    &[
        (Above(200.0), 35),
        (Above(150.0), 30),
        (Above(100.0), 25),
        (Above(80.0), 20),
        (Above(60.0), 15),
        (Above(40.0), 10),
        (Above(20.0), 5),
    ],
    2,
);

const RISK_MUTATIONS: Ladder = Ladder::new(
    &[
        (Exactly(10.0), 30),
        (AtLeast(8.0), 25),
        (AtLeast(6.0), 20),
        (AtLeast(4.0), 15),
        (AtLeast(3.0), 10),
        (AtLeast(1.0), 5),
    ],
    0,
);

const RISK_HEIGHT: Ladder = Ladder::new(
    &[
        (Above(3000.0), 18),
        (Above(1500.0), 15),
        (Above(800.0), 12),
        (Above(400.0), 8),
        (Above(200.0), 5),
    ],
    0,
);

const RISK_DISTANCE: Ladder = Ladder::new(
    &[(Above(3000.0), 10), (Above(1500.0), 6), (Above(500.0), 3)],
    0,
);

const RISK_GPS: Ladder = Ladder::new(
    &[
        (Above(2000.0), 10),
        (Above(1000.0), 7),
        (Above(500.0), 5),
        (Above(200.0), 3),
        (Above(100.0), 1),
    ],
    0,
);

fn risk_for_status(profile: &CaptureProfile) -> i64 {
    match profile.status {
        HibernationStatus::Awake => 45,
        HibernationStatus::InTrance => profile
            .trance_heart_rate()
            .map(|bpm| TRANCE_RISK.points(bpm))
            .unwrap_or(15),
        HibernationStatus::DeepHibernation => 2,
    }
}

fn power_risk_scale_tenths(status: HibernationStatus) -> i64 {
    match status {
        HibernationStatus::Awake => 10,
        HibernationStatus::InTrance => 6,
        HibernationStatus::DeepHibernation => 3,
    }
}

pub(crate) fn risk_level(profile: &CaptureProfile) -> Score {
    let mut total = RISK_BASE + risk_for_status(profile);

    if let Some(power) = profile.power {
        total += scale_tenths(
            power_weights(power).risk,
            power_risk_scale_tenths(profile.status),
        );
    }

    total += RISK_MUTATIONS.points(profile.mutations_f64())
        + RISK_HEIGHT.points(profile.height_cm)
        + RISK_DISTANCE.points(profile.distance_km)
        + RISK_GPS.points(profile.gps_precision_cm);

    Score::saturating(total)
}

// ─────────────────────────────────────────────────────────────────────────────
// Scientific value
// ─────────────────────────────────────────────────────────────────────────────

const SCIENCE_BASE: i64 = 20;

const SCIENCE_MUTATIONS: Ladder = Ladder::new(
    &[
        (Exactly(10.0), 45),
        (AtLeast(8.0), 40),
        (AtLeast(6.0), 35),
        (AtLeast(5.0), 30),
        (AtLeast(4.0), 25),
        (AtLeast(3.0), 20),
        (AtLeast(2.0), 15),
        (Exactly(1.0), 8),
    ],
    0,
);

const TRANCE_VALUE: Ladder = Ladder::new(
    &[
        (AtMost(10.0), 15),
        (AtMost(30.0), 12),
        (AtMost(60.0), 8),
        (AtMost(100.0), 5),
    ],
    2,
);

pub(crate) const HEIGHT_EXTREMITY: ExtremityLadder = ExtremityLadder::new(&[
    (4000.0, 100.0, 15),
    (2500.0, 120.0, 10),
    (1500.0, 150.0, 5),
]);

pub(crate) const WEIGHT_EXTREMITY: ExtremityLadder = ExtremityLadder::new(&[
    (300_000.0, 8000.0, 12),
    (200_000.0, 12_000.0, 8),
    (150_000.0, 20_000.0, 4),
]);

const SCIENCE_GPS: Ladder = Ladder::new(
    &[
        (AtMost(10.0), 10),
        (AtMost(25.0), 8),
        (AtMost(50.0), 6),
        (AtMost(150.0), 4),
        (AtMost(500.0), 2),
    ],
    0,
);

fn value_for_status(profile: &CaptureProfile) -> i64 {
    match profile.status {
        HibernationStatus::DeepHibernation => 20,
        HibernationStatus::InTrance => profile
            .trance_heart_rate()
            .map(|bpm| TRANCE_VALUE.points(bpm))
            .unwrap_or(10),
        HibernationStatus::Awake => 5,
    }
}

fn mutation_power_combo(profile: &CaptureProfile) -> i64 {
    match (profile.mutations, profile.power) {
        (10.., Some(_)) => 12,
        (8.., Some(_)) => 8,
        _ => 0,
    }
}

fn dormant_mutation_combo(profile: &CaptureProfile) -> i64 {
    match (profile.status, profile.mutations) {
        (HibernationStatus::DeepHibernation, 8..) => 10,
        (HibernationStatus::DeepHibernation, 5..) => 6,
        _ => 0,
    }
}

pub(crate) fn scientific_value(profile: &CaptureProfile) -> Score {
    let total = SCIENCE_BASE
        + SCIENCE_MUTATIONS.points(profile.mutations_f64())
        + profile.power.map(|p| power_weights(p).value).unwrap_or(0)
        + value_for_status(profile)
        + HEIGHT_EXTREMITY.points(profile.height_cm)
        + WEIGHT_EXTREMITY.points(profile.weight_g)
        + SCIENCE_GPS.points(profile.gps_precision_cm)
        + mutation_power_combo(profile)
        + dormant_mutation_combo(profile);

    Score::saturating(total)
}

// ─────────────────────────────────────────────────────────────────────────────
// Overall score
// ─────────────────────────────────────────────────────────────────────────────

/// Rates are in hundredths and the cost penalty is halved, so the raw score
/// is carried in two-hundredths of a point.
const OVERALL_SCALE: i64 = 200;

/// The four sub-scores an overall score is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubScores {
    pub operational_cost: Score,
    pub military_power: Score,
    pub risk_level: Score,
    pub scientific_value: Score,
}

impl SubScores {
    pub(crate) fn of(profile: &CaptureProfile) -> Self {
        Self {
            operational_cost: operational_cost(profile),
            military_power: military_power(profile),
            risk_level: risk_level(profile),
            scientific_value: scientific_value(profile),
        }
    }
}

/// Combines sub-scores into the overall score, floored and clamped to 1..=100.
pub(crate) fn overall_score(
    scores: &SubScores,
    status: HibernationStatus,
    weights: &ScoringWeights,
) -> Score {
    let cost = scores.operational_cost;
    let risk = scores.risk_level;

    let base = scores.scientific_value.as_i64() * weights.science_rate * 2;
    let bonus = weights.capturability_bonus(status) * OVERALL_SCALE;
    let risk_penalty = risk.as_i64() * weights.risk_rate(risk.value()) * 2;
    let military_penalty = scores.military_power.as_i64() * weights.military_rate * 2;
    let halved_cost_penalty = cost.as_i64() * weights.cost_rate(cost.value());

    let raw = base + bonus - risk_penalty - military_penalty - halved_cost_penalty;
    let floored = raw.div_euclid(OVERALL_SCALE);

    Score::saturating(floored.clamp(1, 100))
}
