//! Hibernation status of a primordial duck.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state driving most capture multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HibernationStatus {
    Awake,
    InTrance,
    DeepHibernation,
}

impl HibernationStatus {
    /// Returns true for any dormant state.
    pub fn is_dormant(&self) -> bool {
        !matches!(self, HibernationStatus::Awake)
    }

    /// Returns true if a heart rate reading is meaningful in this state.
    pub fn tracks_heart_rate(&self) -> bool {
        self.is_dormant()
    }

    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            HibernationStatus::Awake => "Awake",
            HibernationStatus::InTrance => "In trance",
            HibernationStatus::DeepHibernation => "Deep hibernation",
        }
    }
}

impl fmt::Display for HibernationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
