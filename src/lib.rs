//! Duck Capture - capture analysis for primordial ducks
//!
//! This crate scores how worthwhile, costly and dangerous it would be to
//! capture a catalogued primordial duck, and ranks ducks by capture priority.
//!
//! - `domain` - Duck aggregate and the pure capture analysis engine
//! - `ports` - Reader and event publisher interfaces
//! - `application` - Query handlers driving the engine through the ports
//! - `adapters` - In-memory port implementations
//! - `config` - Environment and file based configuration
//! - `telemetry` - Tracing subscriber setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
