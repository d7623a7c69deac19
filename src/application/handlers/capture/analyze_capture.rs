//! AnalyzeCaptureHandler - Query handler scoring a single duck for capture.

use std::sync::Arc;

use tracing::debug;

use crate::domain::capture::{CaptureAnalysisComputed, CaptureAnalysisEngine, CaptureAnalysisResult};
use crate::domain::foundation::{DomainError, DuckId, ErrorCode, SerializableDomainEvent};
use crate::ports::{EventPublisher, PrimordialDuckReader};

/// Query to analyze one duck.
#[derive(Debug, Clone)]
pub struct AnalyzeCaptureQuery {
    pub duck_id: DuckId,
    /// Copied onto the published event for request tracing.
    pub correlation_id: Option<String>,
}

impl AnalyzeCaptureQuery {
    pub fn new(duck_id: DuckId) -> Self {
        Self {
            duck_id,
            correlation_id: None,
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }
}

/// Handler for analyzing a duck and announcing the result.
pub struct AnalyzeCaptureHandler {
    reader: Arc<dyn PrimordialDuckReader>,
    event_publisher: Arc<dyn EventPublisher>,
    engine: Arc<CaptureAnalysisEngine>,
}

impl AnalyzeCaptureHandler {
    pub fn new(
        reader: Arc<dyn PrimordialDuckReader>,
        event_publisher: Arc<dyn EventPublisher>,
        engine: Arc<CaptureAnalysisEngine>,
    ) -> Self {
        Self {
            reader,
            event_publisher,
            engine,
        }
    }

    pub async fn handle(
        &self,
        query: AnalyzeCaptureQuery,
    ) -> Result<CaptureAnalysisResult, DomainError> {
        // 1. Fetch the duck
        let duck = self
            .reader
            .get_by_id(&query.duck_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::DuckNotFound, "Primordial duck not found")
                    .with_detail("duck_id", query.duck_id.to_string())
            })?;

        // 2. Score it
        let result = self.engine.analyze(&duck);

        // 3. Announce the analysis
        let event = CaptureAnalysisComputed::from_result(duck.id(), &result);
        let mut envelope = event.to_envelope()?;
        if let Some(correlation_id) = query.correlation_id {
            envelope = envelope.with_correlation_id(correlation_id);
        }
        self.event_publisher.publish(envelope).await?;

        debug!(
            duck_id = %duck.id(),
            overall_score = result.overall_score().value(),
            classification = %result.classification(),
            "Capture analysis computed"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capture::{CapturePriority, OPERATIONS_BASE};
    use crate::domain::duck::{GpsPrecision, Height, HibernationStatus, PrimordialDuck, Weight};
    use crate::domain::foundation::EventEnvelope;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockDuckReader {
        duck: Option<PrimordialDuck>,
    }

    #[async_trait]
    impl PrimordialDuckReader for MockDuckReader {
        async fn get_by_id(&self, _id: &DuckId) -> Result<Option<PrimordialDuck>, DomainError> {
            Ok(self.duck.clone())
        }

        async fn list_all(&self) -> Result<Vec<PrimordialDuck>, DomainError> {
            Ok(self.duck.clone().into_iter().collect())
        }
    }

    struct MockEventPublisher {
        published: Mutex<Vec<EventEnvelope>>,
        fail: bool,
    }

    impl MockEventPublisher {
        fn new() -> Self {
            Self {
                published: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                published: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn published(&self) -> Vec<EventEnvelope> {
            self.published.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventPublisher for MockEventPublisher {
        async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(
                    ErrorCode::EventPublishFailed,
                    "Simulated publish failure",
                ));
            }
            self.published.lock().unwrap().push(event);
            Ok(())
        }

        async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
            for event in events {
                self.publish(event).await?;
            }
            Ok(())
        }
    }

    fn test_duck() -> PrimordialDuck {
        PrimordialDuck::new(
            DuckId::new(),
            "Mallard Prime",
            Height::centimeters(50.0).unwrap(),
            Weight::grams(10_000.0).unwrap(),
            GpsPrecision::centimeters(10.0).unwrap(),
            OPERATIONS_BASE,
            HibernationStatus::DeepHibernation,
        )
        .unwrap()
    }

    fn handler(
        duck: Option<PrimordialDuck>,
        publisher: Arc<MockEventPublisher>,
    ) -> AnalyzeCaptureHandler {
        AnalyzeCaptureHandler::new(
            Arc::new(MockDuckReader { duck }),
            publisher,
            Arc::new(CaptureAnalysisEngine::default()),
        )
    }

    #[tokio::test]
    async fn analyzes_existing_duck() {
        let duck = test_duck();
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(Some(duck.clone()), publisher.clone());

        let result = handler
            .handle(AnalyzeCaptureQuery::new(duck.id()))
            .await
            .unwrap();

        assert_eq!(result.overall_score().value(), 100);
        assert_eq!(result.classification(), CapturePriority::Maximum);
    }

    #[tokio::test]
    async fn publishes_analysis_computed_event() {
        let duck = test_duck();
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(Some(duck.clone()), publisher.clone());

        handler
            .handle(AnalyzeCaptureQuery::new(duck.id()))
            .await
            .unwrap();

        let published = publisher.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].event_type, "capture.analysis_computed.v1");
        assert_eq!(published[0].aggregate_type, "PrimordialDuck");
        assert_eq!(published[0].aggregate_id, duck.id().to_string());
    }

    #[tokio::test]
    async fn correlation_id_is_copied_onto_event() {
        let duck = test_duck();
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(Some(duck.clone()), publisher.clone());

        handler
            .handle(AnalyzeCaptureQuery::new(duck.id()).with_correlation_id("req-42"))
            .await
            .unwrap();

        let published = publisher.published();
        assert_eq!(published[0].metadata.correlation_id.as_deref(), Some("req-42"));
    }

    #[tokio::test]
    async fn event_has_no_correlation_id_by_default() {
        let duck = test_duck();
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(Some(duck.clone()), publisher.clone());

        handler
            .handle(AnalyzeCaptureQuery::new(duck.id()))
            .await
            .unwrap();

        assert!(publisher.published()[0].metadata.correlation_id.is_none());
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_duck() {
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(None, publisher.clone());

        let err = handler
            .handle(AnalyzeCaptureQuery::new(DuckId::new()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DuckNotFound);
        assert!(err.details.contains_key("duck_id"));
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn propagates_publish_failure() {
        let duck = test_duck();
        let publisher = Arc::new(MockEventPublisher::failing());
        let handler = handler(Some(duck.clone()), publisher);

        let err = handler
            .handle(AnalyzeCaptureQuery::new(duck.id()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EventPublishFailed);
    }
}
