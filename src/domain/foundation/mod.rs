//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and event plumbing
//! that form the vocabulary of the capture domain.

mod errors;
mod events;
mod ids;
mod score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{DuckId, SuperPowerId};
pub use score::Score;
pub use timestamp::Timestamp;
