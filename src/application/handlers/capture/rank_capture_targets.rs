//! RankCaptureTargetsHandler - Query handler ordering every duck by capture priority.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::capture::{CaptureAnalysisEngine, CaptureAnalysisResult};
use crate::domain::foundation::{DomainError, DuckId};
use crate::ports::PrimordialDuckReader;

/// Query to rank catalogued ducks, optionally keeping only the top `limit`.
#[derive(Debug, Clone, Default)]
pub struct RankCaptureTargetsQuery {
    pub limit: Option<usize>,
}

/// A duck together with its analysis, as listed in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCaptureTarget {
    pub duck_id: DuckId,
    pub nickname: String,
    pub analysis: CaptureAnalysisResult,
}

/// Handler for ranking capture targets.
pub struct RankCaptureTargetsHandler {
    reader: Arc<dyn PrimordialDuckReader>,
    engine: Arc<CaptureAnalysisEngine>,
}

impl RankCaptureTargetsHandler {
    pub fn new(reader: Arc<dyn PrimordialDuckReader>, engine: Arc<CaptureAnalysisEngine>) -> Self {
        Self { reader, engine }
    }

    pub async fn handle(
        &self,
        query: RankCaptureTargetsQuery,
    ) -> Result<Vec<RankedCaptureTarget>, DomainError> {
        let ducks = self.reader.list_all().await?;
        let catalogued = ducks.len();

        let mut ranked: Vec<RankedCaptureTarget> = ducks
            .iter()
            .map(|duck| RankedCaptureTarget {
                duck_id: duck.id(),
                nickname: duck.nickname().to_string(),
                analysis: self.engine.analyze(duck),
            })
            .collect();

        ranked.sort_by(by_priority);
        if let Some(limit) = query.limit {
            ranked.truncate(limit);
        }

        debug!(
            catalogued,
            returned = ranked.len(),
            "Ranked capture targets"
        );

        Ok(ranked)
    }
}

/// Highest overall score first, then highest scientific value, then nickname.
fn by_priority(a: &RankedCaptureTarget, b: &RankedCaptureTarget) -> Ordering {
    b.analysis
        .overall_score()
        .cmp(&a.analysis.overall_score())
        .then_with(|| {
            b.analysis
                .scientific_value()
                .cmp(&a.analysis.scientific_value())
        })
        .then_with(|| a.nickname.cmp(&b.nickname))
}
