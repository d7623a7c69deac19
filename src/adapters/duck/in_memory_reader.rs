//! In-memory duck catalogue.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::duck::PrimordialDuck;
use crate::domain::foundation::{DomainError, DuckId};
use crate::ports::PrimordialDuckReader;

/// Reader over a catalogue held in memory.
///
/// `list_all` returns ducks ordered by discovery time so results are
/// stable regardless of hash map iteration order. A poisoned lock is
/// recovered, matching the in-memory event bus.
#[derive(Debug, Default)]
pub struct InMemoryPrimordialDuckReader {
    ducks: RwLock<HashMap<DuckId, PrimordialDuck>>,
}

impl InMemoryPrimordialDuckReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader pre-loaded with the given ducks.
    pub fn with_ducks(ducks: impl IntoIterator<Item = PrimordialDuck>) -> Self {
        let reader = Self::new();
        for duck in ducks {
            reader.insert(duck);
        }
        reader
    }

    fn catalogue(&self) -> RwLockReadGuard<'_, HashMap<DuckId, PrimordialDuck>> {
        self.ducks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn catalogue_mut(&self) -> RwLockWriteGuard<'_, HashMap<DuckId, PrimordialDuck>> {
        self.ducks.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds or replaces a duck.
    pub fn insert(&self, duck: PrimordialDuck) {
        self.catalogue_mut().insert(duck.id(), duck);
    }

    /// Removes a duck, returning it if it was catalogued.
    pub fn remove(&self, id: &DuckId) -> Option<PrimordialDuck> {
        self.catalogue_mut().remove(id)
    }

    pub fn len(&self) -> usize {
        self.catalogue().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PrimordialDuckReader for InMemoryPrimordialDuckReader {
    async fn get_by_id(&self, id: &DuckId) -> Result<Option<PrimordialDuck>, DomainError> {
        Ok(self.catalogue().get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<PrimordialDuck>, DomainError> {
        let mut all: Vec<PrimordialDuck> = self.catalogue().values().cloned().collect();
        all.sort_by(|a, b| {
            a.discovered_at()
                .cmp(b.discovered_at())
                .then_with(|| a.id().as_uuid().cmp(b.id().as_uuid()))
        });
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capture::OPERATIONS_BASE;
    use crate::domain::duck::{GpsPrecision, Height, HibernationStatus, Weight};
    use std::sync::Arc;

    fn duck(nickname: &str) -> PrimordialDuck {
        PrimordialDuck::new(
            DuckId::new(),
            nickname,
            Height::centimeters(80.0).unwrap(),
            Weight::grams(25_000.0).unwrap(),
            GpsPrecision::centimeters(30.0).unwrap(),
            OPERATIONS_BASE,
            HibernationStatus::InTrance,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn get_by_id_finds_inserted_duck() {
        let stored = duck("Gadwall");
        let reader = InMemoryPrimordialDuckReader::with_ducks([stored.clone()]);

        let found = reader.get_by_id(&stored.id()).await.unwrap();

        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_duck() {
        let reader = InMemoryPrimordialDuckReader::new();

        assert_eq!(reader.get_by_id(&DuckId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_all_returns_every_duck() {
        let reader = InMemoryPrimordialDuckReader::with_ducks([duck("A"), duck("B"), duck("C")]);

        let all = reader.list_all().await.unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(reader.len(), 3);
    }

    #[tokio::test]
    async fn insert_replaces_existing_duck() {
        let original = duck("Teal");
        let reader = InMemoryPrimordialDuckReader::with_ducks([original.clone()]);

        reader.insert(original.clone().with_mutation_count(4));

        let stored = reader.get_by_id(&original.id()).await.unwrap().unwrap();
        assert_eq!(stored.mutation_count(), 4);
        assert_eq!(reader.len(), 1);
    }

    #[tokio::test]
    async fn reads_survive_a_panicked_writer() {
        let stored = duck("Smew");
        let reader = Arc::new(InMemoryPrimordialDuckReader::with_ducks([stored.clone()]));

        let holder = Arc::clone(&reader);
        let outcome = std::thread::spawn(move || {
            let _guard = holder.ducks.write().unwrap();
            panic!("writer crashed while holding the lock");
        })
        .join();
        assert!(outcome.is_err());
        assert!(reader.ducks.is_poisoned());

        assert_eq!(reader.get_by_id(&stored.id()).await.unwrap(), Some(stored));
        reader.insert(duck("Goldeneye"));
        assert_eq!(reader.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn remove_drops_duck() {
        let stored = duck("Pintail");
        let reader = InMemoryPrimordialDuckReader::with_ducks([stored.clone()]);

        assert!(reader.remove(&stored.id()).is_some());
        assert!(reader.is_empty());
    }
}
