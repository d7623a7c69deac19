//! Human-readable risk and value factors accompanying an analysis.
//!
//! Each category contributes at most one line and categories are always
//! evaluated in the same order, so the lists are stable for a given duck.

use crate::domain::duck::{HibernationStatus, PowerClassification};

use super::brackets::Bands;
use super::brackets::Threshold::{Above, AtLeast, AtMost, Exactly};
use super::profile::CaptureProfile;
use super::scoring::{HEIGHT_EXTREMITY, WEIGHT_EXTREMITY};

/// Heart rate above which a trance is considered unstable.
const ELEVATED_TRANCE_BPM: u32 = 100;

/// Heart rate at or below which a trance is considered a safe study window.
const STABLE_TRANCE_BPM: u32 = 30;

const FAR_FROM_BASE: Bands = Bands::new(&[Above(3000.0), Above(1500.0), Above(500.0)]);
const UNSTABLE_GENOME: Bands = Bands::new(&[AtLeast(8.0), AtLeast(5.0), AtLeast(3.0)]);
const OVERSIZED: Bands = Bands::new(&[Above(1500.0), Above(800.0), Above(400.0)]);
const OVERWEIGHT: Bands = Bands::new(&[Above(200_000.0), Above(100_000.0), Above(50_000.0)]);
const POOR_FIX: Bands = Bands::new(&[Above(1000.0), Above(500.0), Above(200.0)]);

const GENETIC_POTENTIAL: Bands = Bands::new(&[
    Exactly(10.0),
    AtLeast(8.0),
    AtLeast(5.0),
    AtLeast(3.0),
    AtLeast(1.0),
]);
const NEAR_BASE: Bands = Bands::new(&[AtMost(50.0), AtMost(200.0)]);
const SHARP_FIX: Bands = Bands::new(&[AtMost(10.0), AtMost(50.0)]);

fn grams_to_kg(grams: f64) -> f64 {
    grams / 1000.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Risk factors
// ─────────────────────────────────────────────────────────────────────────────

fn alertness_risk(profile: &CaptureProfile) -> Option<String> {
    match (profile.status, profile.heart_rate) {
        (HibernationStatus::Awake, _) => {
            Some("Fully awake and alert - expect active resistance".to_string())
        }
        (HibernationStatus::InTrance, Some(bpm)) if bpm > ELEVATED_TRANCE_BPM => Some(format!(
            "Elevated heart rate in trance ({} bpm) - awakening may be imminent",
            bpm
        )),
        _ => None,
    }
}

fn power_risk(power: PowerClassification) -> &'static str {
    match power {
        PowerClassification::Warlike => "Warlike power - capable of direct offensive action",
        PowerClassification::Temporal => "Temporal power - may rewind or freeze the operation",
        PowerClassification::Dimensional => "Dimensional power - may escape through a rift",
        PowerClassification::Psychic => "Psychic power - may influence the capture team",
        PowerClassification::Elemental => "Elemental power - may unleash uncontrolled forces",
        PowerClassification::Technological => "Technological power - may disable drones and gear",
        PowerClassification::Biological => "Biological power - contamination hazard",
        PowerClassification::Defensive => "Defensive power - hardened against containment",
        PowerClassification::Other => "Unclassified power - behaviour is unpredictable",
    }
}

fn distance_risk(distance_km: f64) -> Option<String> {
    match FAR_FROM_BASE.band(distance_km)? {
        0 => Some(format!(
            "Extreme distance from base ({:.0} km) - long, exposed supply lines",
            distance_km
        )),
        1 => Some(format!(
            "Long distance from base ({:.0} km) - complex logistics",
            distance_km
        )),
        _ => Some(format!("Considerable distance from base ({:.0} km)", distance_km)),
    }
}

fn mutation_risk(mutations: u32) -> Option<String> {
    match UNSTABLE_GENOME.band(f64::from(mutations)) {
        Some(0) => Some(format!(
            "Highly unstable genome ({} mutations) - unpredictable behaviour",
            mutations
        )),
        Some(1) => Some(format!(
            "Significant mutations ({}) - abilities may be undocumented",
            mutations
        )),
        Some(2) => Some(format!("Moderate mutations ({}) detected", mutations)),
        _ => None,
    }
}

fn size_risk(height_cm: f64) -> Option<String> {
    match OVERSIZED.band(height_cm) {
        Some(0) => Some(format!(
            "Colossal size ({:.0} cm) - heavy containment required",
            height_cm
        )),
        Some(1) => Some(format!(
            "Large size ({:.0} cm) - reinforced containment needed",
            height_cm
        )),
        Some(2) => Some(format!("Above-average size ({:.0} cm)", height_cm)),
        _ => None,
    }
}

fn mass_risk(weight_g: f64) -> Option<String> {
    let kg = grams_to_kg(weight_g);
    match OVERWEIGHT.band(weight_g) {
        Some(0) => Some(format!(
            "Extreme mass ({:.0} kg) - specialised transport required",
            kg
        )),
        Some(1) => Some(format!("Heavy mass ({:.0} kg) - transport is complicated", kg)),
        Some(2) => Some(format!("Considerable mass ({:.0} kg)", kg)),
        _ => None,
    }
}

fn tracking_risk(gps_precision_cm: f64) -> Option<String> {
    match POOR_FIX.band(gps_precision_cm) {
        Some(0) => Some(format!(
            "Poor GPS precision ({:.0} cm) - location is uncertain",
            gps_precision_cm
        )),
        Some(1) => Some(format!(
            "Low GPS precision ({:.0} cm) - search area widened",
            gps_precision_cm
        )),
        Some(2) => Some(format!(
            "Moderate GPS imprecision ({:.0} cm)",
            gps_precision_cm
        )),
        _ => None,
    }
}

pub(crate) fn risk_factors(profile: &CaptureProfile) -> Vec<String> {
    [
        alertness_risk(profile),
        profile.power.map(|p| power_risk(p).to_string()),
        distance_risk(profile.distance_km),
        mutation_risk(profile.mutations),
        size_risk(profile.height_cm),
        mass_risk(profile.weight_g),
        tracking_risk(profile.gps_precision_cm),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Value factors
// ─────────────────────────────────────────────────────────────────────────────

fn genetic_value(mutations: u32) -> Option<String> {
    match GENETIC_POTENTIAL.band(f64::from(mutations)) {
        Some(0) => Some("Maximum mutation count (10) - unique genetic material".to_string()),
        Some(1) => Some(format!(
            "Exceptional genetic potential ({} mutations)",
            mutations
        )),
        Some(2) => Some(format!("High genetic potential ({} mutations)", mutations)),
        Some(3) => Some(format!("Relevant genetic variation ({} mutations)", mutations)),
        Some(4) => Some(format!("Minor genetic variation (mutations: {})", mutations)),
        _ => None,
    }
}

fn power_value(power: PowerClassification) -> &'static str {
    match power {
        PowerClassification::Temporal => "Temporal power - unprecedented insight into time",
        PowerClassification::Dimensional => "Dimensional power - key to parallel-space research",
        PowerClassification::Psychic => "Psychic power - breakthrough potential in neuroscience",
        PowerClassification::Technological => {
            "Technological power - reverse-engineering opportunities"
        }
        PowerClassification::Biological => "Biological power - medical and genetic applications",
        PowerClassification::Elemental => "Elemental power - energy research applications",
        PowerClassification::Defensive => "Defensive power - shielding and materials research",
        PowerClassification::Warlike => "Warlike power - defence research applications",
        PowerClassification::Other => "Unclassified power - unexplored research territory",
    }
}

fn dormancy_value(profile: &CaptureProfile) -> Option<String> {
    match (profile.status, profile.heart_rate) {
        (HibernationStatus::DeepHibernation, _) => {
            Some("Deep hibernation - safe, non-invasive study conditions".to_string())
        }
        (HibernationStatus::InTrance, Some(bpm)) if bpm <= STABLE_TRANCE_BPM => Some(format!(
            "Stable trance ({} bpm) - favourable study window",
            bpm
        )),
        (HibernationStatus::Awake, _) => {
            Some("Awake specimen - natural behaviour can be observed".to_string())
        }
        _ => None,
    }
}

fn proximity_value(distance_km: f64) -> Option<String> {
    match NEAR_BASE.band(distance_km) {
        Some(0) => Some(format!(
            "Close to base ({:.1} km) - fast transfer to the laboratory",
            distance_km
        )),
        Some(1) => Some(format!("Within regional range of base ({:.0} km)", distance_km)),
        _ => None,
    }
}

fn morphology_value(height_cm: f64) -> Option<String> {
    match HEIGHT_EXTREMITY.rung(height_cm) {
        Some(0) => Some(format!(
            "Extreme size ({:.0} cm) - rare morphological specimen",
            height_cm
        )),
        Some(1) => Some(format!("Unusual size ({:.0} cm)", height_cm)),
        _ => None,
    }
}

fn physiology_value(weight_g: f64) -> Option<String> {
    let kg = grams_to_kg(weight_g);
    match WEIGHT_EXTREMITY.rung(weight_g) {
        Some(0) => Some(format!(
            "Extreme mass ({:.1} kg) - rare physiological specimen",
            kg
        )),
        Some(1) => Some(format!("Unusual mass ({:.1} kg)", kg)),
        _ => None,
    }
}

fn tracking_value(gps_precision_cm: f64) -> Option<String> {
    match SHARP_FIX.band(gps_precision_cm) {
        Some(0) => Some(format!(
            "Pinpoint GPS precision ({:.0} cm) - exact location known",
            gps_precision_cm
        )),
        Some(1) => Some(format!("Good GPS precision ({:.0} cm)", gps_precision_cm)),
        _ => None,
    }
}

fn mutation_power_value(profile: &CaptureProfile) -> Option<String> {
    match (profile.mutations, profile.power) {
        (10.., Some(_)) => Some(
            "Maximum mutations combined with a super power - exceptional research subject"
                .to_string(),
        ),
        (8.., Some(_)) => Some("Heavy mutations combined with a super power".to_string()),
        _ => None,
    }
}

fn dormant_mutation_value(profile: &CaptureProfile) -> Option<String> {
    match (profile.status, profile.mutations) {
        (HibernationStatus::DeepHibernation, 8..) => Some(
            "Hibernating, highly mutated specimen - ideal for genetic sampling".to_string(),
        ),
        (HibernationStatus::DeepHibernation, 5..) => {
            Some("Hibernating mutated specimen - good sampling conditions".to_string())
        }
        _ => None,
    }
}

fn chronal_value(profile: &CaptureProfile) -> Option<String> {
    match (profile.power, profile.mutations) {
        (Some(PowerClassification::Temporal), 5..) => Some(
            "Temporal power with significant mutations - possible chronal adaptation".to_string(),
        ),
        _ => None,
    }
}

pub(crate) fn value_factors(profile: &CaptureProfile) -> Vec<String> {
    [
        genetic_value(profile.mutations),
        profile.power.map(|p| power_value(p).to_string()),
        dormancy_value(profile),
        proximity_value(profile.distance_km),
        morphology_value(profile.height_cm),
        physiology_value(profile.weight_g),
        tracking_value(profile.gps_precision_cm),
        mutation_power_value(profile),
        dormant_mutation_value(profile),
        chronal_value(profile),
    ]
    .into_iter()
    .flatten()
    .collect()
}
