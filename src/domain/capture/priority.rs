//! Capture priority classification derived from the overall score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Score;

/// Priority label attached to every capture analysis.
///
/// Serialized as the display label, which is what API consumers render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CapturePriority {
    #[serde(rename = "MAXIMUM PRIORITY")]
    Maximum,
    #[serde(rename = "HIGH PRIORITY")]
    High,
    #[serde(rename = "MODERATE PRIORITY")]
    Moderate,
    #[serde(rename = "LOW PRIORITY")]
    Low,
    #[serde(rename = "CONSIDERABLE")]
    Considerable,
    #[serde(rename = "NOT RECOMMENDED")]
    NotRecommended,
}

impl CapturePriority {
    /// Maps an overall score onto its priority band.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            85..=u8::MAX => CapturePriority::Maximum,
            70..=84 => CapturePriority::High,
            50..=69 => CapturePriority::Moderate,
            30..=49 => CapturePriority::Low,
            15..=29 => CapturePriority::Considerable,
            _ => CapturePriority::NotRecommended,
        }
    }

    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            CapturePriority::Maximum => "MAXIMUM PRIORITY",
            CapturePriority::High => "HIGH PRIORITY",
            CapturePriority::Moderate => "MODERATE PRIORITY",
            CapturePriority::Low => "LOW PRIORITY",
            CapturePriority::Considerable => "CONSIDERABLE",
            CapturePriority::NotRecommended => "NOT RECOMMENDED",
        }
    }
}

impl fmt::Display for CapturePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(score: u8) -> CapturePriority {
        CapturePriority::from_score(Score::new(score))
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(100), CapturePriority::Maximum);
        assert_eq!(classify(85), CapturePriority::Maximum);
        assert_eq!(classify(84), CapturePriority::High);
        assert_eq!(classify(70), CapturePriority::High);
        assert_eq!(classify(69), CapturePriority::Moderate);
        assert_eq!(classify(50), CapturePriority::Moderate);
        assert_eq!(classify(49), CapturePriority::Low);
        assert_eq!(classify(30), CapturePriority::Low);
        assert_eq!(classify(29), CapturePriority::Considerable);
        assert_eq!(classify(15), CapturePriority::Considerable);
        assert_eq!(classify(14), CapturePriority::NotRecommended);
        assert_eq!(classify(1), CapturePriority::NotRecommended);
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(CapturePriority::Maximum.to_string(), "MAXIMUM PRIORITY");
        assert_eq!(CapturePriority::NotRecommended.label(), "NOT RECOMMENDED");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&CapturePriority::Considerable).unwrap();
        assert_eq!(json, "\"CONSIDERABLE\"");

        let back: CapturePriority = serde_json::from_str("\"HIGH PRIORITY\"").unwrap();
        assert_eq!(back, CapturePriority::High);
    }
}
