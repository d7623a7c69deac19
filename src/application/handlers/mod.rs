//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod capture;

pub use capture::{
    AnalyzeCaptureHandler, AnalyzeCaptureQuery, RankCaptureTargetsHandler,
    RankCaptureTargetsQuery, RankedCaptureTarget,
};
