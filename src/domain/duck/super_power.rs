//! Super powers a primordial duck may manifest.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{SuperPowerId, ValidationError};

/// Classification of a super power.
///
/// Unknown classifications coming from storage deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerClassification {
    Warlike,
    Dimensional,
    Temporal,
    Psychic,
    Elemental,
    Technological,
    Biological,
    Defensive,
    #[serde(other)]
    Other,
}

impl PowerClassification {
    /// All classifications, in catalogue order.
    pub const ALL: [PowerClassification; 9] = [
        PowerClassification::Warlike,
        PowerClassification::Dimensional,
        PowerClassification::Temporal,
        PowerClassification::Psychic,
        PowerClassification::Elemental,
        PowerClassification::Technological,
        PowerClassification::Biological,
        PowerClassification::Defensive,
        PowerClassification::Other,
    ];

    /// Returns the display label for this classification.
    pub fn label(&self) -> &'static str {
        match self {
            PowerClassification::Warlike => "Warlike",
            PowerClassification::Dimensional => "Dimensional",
            PowerClassification::Temporal => "Temporal",
            PowerClassification::Psychic => "Psychic",
            PowerClassification::Elemental => "Elemental",
            PowerClassification::Technological => "Technological",
            PowerClassification::Biological => "Biological",
            PowerClassification::Defensive => "Defensive",
            PowerClassification::Other => "Unclassified",
        }
    }
}

impl fmt::Display for PowerClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A catalogued super power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperPower {
    id: SuperPowerId,
    name: String,
    description: String,
    classification: PowerClassification,
}

impl SuperPower {
    /// Creates a new super power with a fresh identifier.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        classification: PowerClassification,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: SuperPowerId::new(),
            name,
            description: description.into(),
            classification,
        })
    }

    pub fn id(&self) -> SuperPowerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn classification(&self) -> PowerClassification {
        self.classification
    }
}
