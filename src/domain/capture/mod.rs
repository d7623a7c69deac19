//! Capture analysis - scoring how worthwhile and how dangerous it would be
//! to capture a primordial duck.
//!
//! - `CaptureAnalysisEngine` - pure scoring of a single duck
//! - `CaptureAnalysisResult` - sub-scores, overall score and factors
//! - `CapturePriority` - priority band derived from the overall score
//! - `ScoringWeights` - rates and bonuses combining the sub-scores
//! - `CaptureAnalysisComputed` - event published after each analysis

mod brackets;
mod engine;
mod events;
mod factors;
mod priority;
mod profile;
mod scoring;
mod weights;

pub use engine::{
    CaptureAnalysisEngine, CaptureAnalysisResult, BASE_LATITUDE, BASE_LONGITUDE, OPERATIONS_BASE,
};
pub use events::CaptureAnalysisComputed;
pub use priority::CapturePriority;
pub use weights::ScoringWeights;
