//! Physical measurement value objects with unit conversion.
//!
//! Magnitudes are held as integer thousandths of their recorded unit and
//! unit factors as integer ratios. A conversion is one exact integer product
//! followed by a single division, so a reading that lands on a bracket edge
//! in canonical units compares equal to it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Largest magnitude accepted in any unit.
pub const MAX_MAGNITUDE: f64 = 1.0e12;

const THOUSANDTHS_PER_UNIT: u64 = 1000;

/// `numerator / denominator` canonical units per recorded unit.
#[derive(Debug, Clone, Copy)]
struct Ratio {
    numerator: u64,
    denominator: u64,
}

impl Ratio {
    const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    fn convert(self, thousandths: u64) -> f64 {
        let exact = u128::from(thousandths) * u128::from(self.numerator);
        exact as f64 / (self.denominator * THOUSANDTHS_PER_UNIT) as f64
    }
}

const IDENTITY: Ratio = Ratio::new(1, 1);
const CENTIMETERS_PER_FOOT: Ratio = Ratio::new(3048, 100);
const GRAMS_PER_POUND: Ratio = Ratio::new(453_592, 1000);
const CENTIMETERS_PER_METER: Ratio = Ratio::new(100, 1);
const CENTIMETERS_PER_YARD: Ratio = Ratio::new(9144, 100);

/// Unit a height is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthUnit {
    Centimeters,
    Feet,
}

/// Unit a weight is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MassUnit {
    Grams,
    Pounds,
}

/// Unit a GPS precision radius is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrecisionUnit {
    Centimeters,
    Meters,
    Yards,
}

impl LengthUnit {
    fn centimeters_per_unit(self) -> Ratio {
        match self {
            LengthUnit::Centimeters => IDENTITY,
            LengthUnit::Feet => CENTIMETERS_PER_FOOT,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Centimeters => "cm",
            LengthUnit::Feet => "ft",
        }
    }
}

impl MassUnit {
    fn grams_per_unit(self) -> Ratio {
        match self {
            MassUnit::Grams => IDENTITY,
            MassUnit::Pounds => GRAMS_PER_POUND,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            MassUnit::Grams => "g",
            MassUnit::Pounds => "lb",
        }
    }
}

impl PrecisionUnit {
    fn centimeters_per_unit(self) -> Ratio {
        match self {
            PrecisionUnit::Centimeters => IDENTITY,
            PrecisionUnit::Meters => CENTIMETERS_PER_METER,
            PrecisionUnit::Yards => CENTIMETERS_PER_YARD,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            PrecisionUnit::Centimeters => "cm",
            PrecisionUnit::Meters => "m",
            PrecisionUnit::Yards => "yd",
        }
    }
}

/// Rounds a recorded magnitude to the nearest thousandth of its unit.
fn thousandths(field: &str, value: f64) -> Result<u64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if !(0.0..=MAX_MAGNITUDE).contains(&value) {
        return Err(ValidationError::out_of_range(field, 0.0, MAX_MAGNITUDE, value));
    }
    Ok((value * THOUSANDTHS_PER_UNIT as f64).round() as u64)
}

fn from_thousandths(thousandths: u64) -> f64 {
    thousandths as f64 / THOUSANDTHS_PER_UNIT as f64
}

/// Wire shape shared by every measurement: `{ "value": 6.0, "unit": "FEET" }`.
#[derive(Serialize, Deserialize)]
struct Recorded<U> {
    value: f64,
    unit: U,
}

/// Standing height of a specimen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Recorded<LengthUnit>", into = "Recorded<LengthUnit>")]
pub struct Height {
    thousandths: u64,
    unit: LengthUnit,
}

impl Height {
    /// Creates a height, rejecting negative, oversized or non-finite magnitudes.
    pub fn new(value: f64, unit: LengthUnit) -> Result<Self, ValidationError> {
        Ok(Self {
            thousandths: thousandths("height", value)?,
            unit,
        })
    }

    /// Shorthand for a height in centimeters.
    pub fn centimeters(value: f64) -> Result<Self, ValidationError> {
        Self::new(value, LengthUnit::Centimeters)
    }

    pub fn value(&self) -> f64 {
        from_thousandths(self.thousandths)
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Returns the height in centimeters.
    pub fn to_centimeters(&self) -> f64 {
        self.unit.centimeters_per_unit().convert(self.thousandths)
    }
}

impl TryFrom<Recorded<LengthUnit>> for Height {
    type Error = ValidationError;

    fn try_from(recorded: Recorded<LengthUnit>) -> Result<Self, Self::Error> {
        Self::new(recorded.value, recorded.unit)
    }
}

impl From<Height> for Recorded<LengthUnit> {
    fn from(height: Height) -> Self {
        Self {
            value: height.value(),
            unit: height.unit,
        }
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit.symbol())
    }
}

/// Body mass of a specimen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Recorded<MassUnit>", into = "Recorded<MassUnit>")]
pub struct Weight {
    thousandths: u64,
    unit: MassUnit,
}

impl Weight {
    /// Creates a weight, rejecting negative, oversized or non-finite magnitudes.
    pub fn new(value: f64, unit: MassUnit) -> Result<Self, ValidationError> {
        Ok(Self {
            thousandths: thousandths("weight", value)?,
            unit,
        })
    }

    /// Shorthand for a weight in grams.
    pub fn grams(value: f64) -> Result<Self, ValidationError> {
        Self::new(value, MassUnit::Grams)
    }

    pub fn value(&self) -> f64 {
        from_thousandths(self.thousandths)
    }

    pub fn unit(&self) -> MassUnit {
        self.unit
    }

    /// Returns the weight in grams.
    pub fn to_grams(&self) -> f64 {
        self.unit.grams_per_unit().convert(self.thousandths)
    }
}

impl TryFrom<Recorded<MassUnit>> for Weight {
    type Error = ValidationError;

    fn try_from(recorded: Recorded<MassUnit>) -> Result<Self, Self::Error> {
        Self::new(recorded.value, recorded.unit)
    }
}

impl From<Weight> for Recorded<MassUnit> {
    fn from(weight: Weight) -> Self {
        Self {
            value: weight.value(),
            unit: weight.unit,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit.symbol())
    }
}

/// Radius of uncertainty of the last GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Recorded<PrecisionUnit>", into = "Recorded<PrecisionUnit>")]
pub struct GpsPrecision {
    thousandths: u64,
    unit: PrecisionUnit,
}

impl GpsPrecision {
    /// Creates a precision radius, rejecting negative, oversized or non-finite magnitudes.
    pub fn new(value: f64, unit: PrecisionUnit) -> Result<Self, ValidationError> {
        Ok(Self {
            thousandths: thousandths("gps_precision", value)?,
            unit,
        })
    }

    /// Shorthand for a precision radius in centimeters.
    pub fn centimeters(value: f64) -> Result<Self, ValidationError> {
        Self::new(value, PrecisionUnit::Centimeters)
    }

    pub fn value(&self) -> f64 {
        from_thousandths(self.thousandths)
    }

    pub fn unit(&self) -> PrecisionUnit {
        self.unit
    }

    /// Returns the precision radius in centimeters.
    pub fn to_centimeters(&self) -> f64 {
        self.unit.centimeters_per_unit().convert(self.thousandths)
    }
}

impl TryFrom<Recorded<PrecisionUnit>> for GpsPrecision {
    type Error = ValidationError;

    fn try_from(recorded: Recorded<PrecisionUnit>) -> Result<Self, Self::Error> {
        Self::new(recorded.value, recorded.unit)
    }
}

impl From<GpsPrecision> for Recorded<PrecisionUnit> {
    fn from(precision: GpsPrecision) -> Self {
        Self {
            value: precision.value(),
            unit: precision.unit,
        }
    }
}

impl fmt::Display for GpsPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit.symbol())
    }
}
