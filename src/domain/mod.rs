//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, scores, errors, events)
//! - `duck` - The primordial duck aggregate and its measurements
//! - `capture` - Pure capture analysis scoring

pub mod capture;
pub mod duck;
pub mod foundation;
