//! Capture analysis query handlers.

mod analyze_capture;
mod rank_capture_targets;

pub use analyze_capture::{AnalyzeCaptureHandler, AnalyzeCaptureQuery};
pub use rank_capture_targets::{
    RankCaptureTargetsHandler, RankCaptureTargetsQuery, RankedCaptureTarget,
};
