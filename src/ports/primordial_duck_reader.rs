//! PrimordialDuckReader port - read access to the ducks under observation.
//!
//! Ducks are created and edited by the cataloguing service; capture
//! analysis only ever reads them.

use async_trait::async_trait;

use crate::domain::duck::PrimordialDuck;
use crate::domain::foundation::{DomainError, DuckId};

/// Query operations for primordial ducks.
#[async_trait]
pub trait PrimordialDuckReader: Send + Sync {
    /// Get a duck by ID, or `None` if it is not catalogued.
    async fn get_by_id(&self, id: &DuckId) -> Result<Option<PrimordialDuck>, DomainError>;

    /// List every catalogued duck.
    async fn list_all(&self) -> Result<Vec<PrimordialDuck>, DomainError>;
}
