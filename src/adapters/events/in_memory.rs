//! In-memory event bus.
//!
//! Records every published envelope in order. Used by tests and by
//! single-process deployments that have no message broker.
//!
//! A poisoned lock is recovered rather than reported.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus capturing published events.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
///
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("capture.analysis_computed.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> RwLockReadGuard<'_, Vec<EventEnvelope>> {
        self.published.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn log_mut(&self) -> RwLockWriteGuard<'_, Vec<EventEnvelope>> {
        self.published.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns all published events in publication order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.log().clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Clears all published events.
    pub fn clear(&self) {
        self.log_mut().clear();
    }

    pub fn event_count(&self) -> usize {
        self.log().len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.log().iter().any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.log_mut().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        self.log_mut().extend(events);
        Ok(())
    }
}
