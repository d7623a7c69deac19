//! EventPublisher port - Interface for publishing domain events.
//!
//! The domain publishes events without knowing about the underlying
//! transport (in-memory bus, message broker, outbox table).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Errors are propagated to the caller
/// - `publish_all` preserves the order of the given events
///
/// # Example
///
/// ```ignore
/// let envelope = CaptureAnalysisComputed::from_result(duck_id, &result).to_envelope()?;
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order.
    ///
    /// Adapters that cannot publish atomically publish sequentially and
    /// stop at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
