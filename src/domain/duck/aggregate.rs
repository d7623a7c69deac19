//! PrimordialDuck aggregate entity.
//!
//! The duck is the subject of every capture analysis. It is persisted and
//! edited by the CRUD layer; this crate only reads it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, DuckId, Timestamp, ValidationError};

use super::{GeoLocation, GpsPrecision, Height, HibernationStatus, SuperPower, Weight};

/// Highest heart rate accepted from field sensors, in beats per minute.
pub const MAX_HEART_RATE_BPM: u32 = 400;

/// PrimordialDuck aggregate.
///
/// # Invariants
///
/// - `nickname` is non-empty
/// - `heart_rate` is at most `MAX_HEART_RATE_BPM`
/// - an awake duck carries no heart rate reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimordialDuck {
    id: DuckId,
    nickname: String,
    height: Height,
    weight: Weight,
    gps_precision: GpsPrecision,
    location: GeoLocation,
    hibernation_status: HibernationStatus,
    heart_rate: Option<u32>,
    mutation_count: u32,
    super_power: Option<SuperPower>,
    discovered_at: Timestamp,
}

impl PrimordialDuck {
    /// Create a newly sighted duck with no mutations, power or heart rate.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if nickname is blank
    pub fn new(
        id: DuckId,
        nickname: impl Into<String>,
        height: Height,
        weight: Weight,
        gps_precision: GpsPrecision,
        location: GeoLocation,
        hibernation_status: HibernationStatus,
    ) -> Result<Self, DomainError> {
        let nickname = nickname.into();
        if nickname.trim().is_empty() {
            return Err(ValidationError::empty_field("nickname").into());
        }

        Ok(Self {
            id,
            nickname,
            height,
            weight,
            gps_precision,
            location,
            hibernation_status,
            heart_rate: None,
            mutation_count: 0,
            super_power: None,
            discovered_at: Timestamp::now(),
        })
    }

    /// Sets the recorded mutation count.
    pub fn with_mutation_count(mut self, mutation_count: u32) -> Self {
        self.mutation_count = mutation_count;
        self
    }

    /// Attaches the duck's manifested super power.
    pub fn with_super_power(mut self, power: SuperPower) -> Self {
        self.super_power = Some(power);
        self
    }

    /// Records a heart rate reading.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the reading exceeds `MAX_HEART_RATE_BPM`
    /// - `ValidationFailed` if the duck is awake
    pub fn with_heart_rate(mut self, bpm: u32) -> Result<Self, DomainError> {
        Self::validate_heart_rate(bpm)?;
        Self::ensure_tracked(self.hibernation_status)?;
        self.heart_rate = Some(bpm);
        Ok(self)
    }

    /// Moves the duck to a new hibernation state, replacing any heart rate reading.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the reading exceeds `MAX_HEART_RATE_BPM`
    /// - `ValidationFailed` if a reading is given for an awake duck
    pub fn change_hibernation(
        &mut self,
        status: HibernationStatus,
        heart_rate: Option<u32>,
    ) -> Result<(), DomainError> {
        if let Some(bpm) = heart_rate {
            Self::validate_heart_rate(bpm)?;
            Self::ensure_tracked(status)?;
        }
        self.hibernation_status = status;
        self.heart_rate = heart_rate;
        Ok(())
    }

    fn ensure_tracked(status: HibernationStatus) -> Result<(), DomainError> {
        if !status.tracks_heart_rate() {
            return Err(DomainError::validation(
                "heart_rate",
                format!("Heart rate is not recorded while {}", status),
            ));
        }
        Ok(())
    }

    fn validate_heart_rate(bpm: u32) -> Result<(), DomainError> {
        if bpm > MAX_HEART_RATE_BPM {
            return Err(ValidationError::out_of_range(
                "heart_rate",
                0.0,
                f64::from(MAX_HEART_RATE_BPM),
                f64::from(bpm),
            )
            .into());
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> DuckId {
        self.id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn height(&self) -> &Height {
        &self.height
    }

    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    pub fn gps_precision(&self) -> &GpsPrecision {
        &self.gps_precision
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn hibernation_status(&self) -> HibernationStatus {
        self.hibernation_status
    }

    /// Returns the last heart rate reading, if the duck is dormant and one was taken.
    pub fn heart_rate(&self) -> Option<u32> {
        self.heart_rate
    }

    pub fn mutation_count(&self) -> u32 {
        self.mutation_count
    }

    pub fn super_power(&self) -> Option<&SuperPower> {
        self.super_power.as_ref()
    }

    pub fn discovered_at(&self) -> &Timestamp {
        &self.discovered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::duck::{LengthUnit, PowerClassification};
    use crate::domain::foundation::ErrorCode;

    fn duck(status: HibernationStatus) -> PrimordialDuck {
        PrimordialDuck::new(
            DuckId::new(),
            "Quackzilla",
            Height::new(12.0, LengthUnit::Feet).unwrap(),
            Weight::grams(90_000.0).unwrap(),
            GpsPrecision::centimeters(30.0).unwrap(),
            GeoLocation::new(35.68, 139.69).unwrap(),
            status,
        )
        .unwrap()
    }

    #[test]
    fn new_duck_starts_without_mutations_or_power() {
        let d = duck(HibernationStatus::Awake);
        assert_eq!(d.nickname(), "Quackzilla");
        assert_eq!(d.mutation_count(), 0);
        assert!(d.super_power().is_none());
        assert!(d.heart_rate().is_none());
    }

    #[test]
    fn blank_nickname_is_rejected() {
        let result = PrimordialDuck::new(
            DuckId::new(),
            "",
            Height::centimeters(10.0).unwrap(),
            Weight::grams(10.0).unwrap(),
            GpsPrecision::centimeters(10.0).unwrap(),
            GeoLocation::new(0.0, 0.0).unwrap(),
            HibernationStatus::Awake,
        );
        assert_eq!(result.unwrap_err().code, ErrorCode::EmptyField);
    }

    #[test]
    fn heart_rate_is_kept_only_when_dormant() {
        let trance = duck(HibernationStatus::InTrance).with_heart_rate(72).unwrap();
        assert_eq!(trance.heart_rate(), Some(72));

        let dormant = duck(HibernationStatus::DeepHibernation).with_heart_rate(6).unwrap();
        assert_eq!(dormant.heart_rate(), Some(6));
    }

    #[test]
    fn heart_rate_on_awake_duck_is_rejected() {
        let err = duck(HibernationStatus::Awake).with_heart_rate(120).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field").map(String::as_str), Some("heart_rate"));
    }

    #[test]
    fn implausible_heart_rate_is_rejected() {
        let err = duck(HibernationStatus::InTrance).with_heart_rate(401).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }

    #[test]
    fn waking_up_discards_heart_rate() {
        let mut d = duck(HibernationStatus::DeepHibernation).with_heart_rate(8).unwrap();
        d.change_hibernation(HibernationStatus::Awake, None).unwrap();
        assert_eq!(d.hibernation_status(), HibernationStatus::Awake);
        assert_eq!(d.heart_rate(), None);

        d.change_hibernation(HibernationStatus::InTrance, Some(55)).unwrap();
        assert_eq!(d.heart_rate(), Some(55));
    }

    #[test]
    fn waking_up_with_a_reading_is_rejected() {
        let mut d = duck(HibernationStatus::InTrance).with_heart_rate(40).unwrap();
        let err = d
            .change_hibernation(HibernationStatus::Awake, Some(120))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(d.hibernation_status(), HibernationStatus::InTrance);
        assert_eq!(d.heart_rate(), Some(40));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let power = SuperPower::new("Chrono Quack", "", PowerClassification::Temporal).unwrap();
        let d = duck(HibernationStatus::InTrance)
            .with_mutation_count(4)
            .with_super_power(power);
        let json = serde_json::to_value(&d).unwrap();

        assert_eq!(json["hibernationStatus"], "IN_TRANCE");
        assert_eq!(json["mutationCount"], 4);
        assert_eq!(json["superPower"]["classification"], "TEMPORAL");
        assert_eq!(json["gpsPrecision"]["unit"], "CENTIMETERS");
    }
}
