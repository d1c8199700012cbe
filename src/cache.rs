use std::{
    collections::HashMap,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{error::ChessError, hash::PositionKey, types::MoveData};

/// Memoized legal move lists, keyed by [`PositionKey`].
///
/// Entries are written once per key and read many times; the map sits behind a lock so
/// a single cache can be shared between threads.
#[derive(Default)]
pub struct LegalMoveCache {
    entries: RwLock<HashMap<PositionKey, Arc<[MoveData]>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl LegalMoveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            ..Self::default()
        }
    }

    pub fn get(&self, key: &PositionKey) -> Option<Arc<[MoveData]>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Returns the stored moves for `key`, running `compute` and storing its result on a miss.
    /// Computation runs outside the lock; when two callers race, the first stored list wins.
    pub fn get_or_compute<F>(&self, key: PositionKey, compute: F) -> Result<Arc<[MoveData]>, ChessError>
    where
        F: FnOnce() -> Result<Vec<MoveData>, ChessError>,
    {
        if let Some(moves) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("legal move cache hit ({} moves)", moves.len());
            return Ok(moves);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed: Arc<[MoveData]> = compute()?.into();

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(entries.entry(key).or_insert(computed)))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn second_lookup_hits() {
        let cache = LegalMoveCache::new();
        let key = Position::new().key();
        let mut calls = 0;

        let first = cache
            .get_or_compute(key, || {
                calls += 1;
                Ok(Vec::new())
            })
            .unwrap();
        let second = cache
            .get_or_compute(key, || {
                calls += 1;
                Ok(Vec::new())
            })
            .unwrap();

        assert_eq!(calls, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_computation_is_not_stored() {
        let cache = LegalMoveCache::new();
        let key = Position::new().key();

        let result = cache.get_or_compute(key, || Err(ChessError::illegal("nope")));

        assert!(result.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_resets_counters() {
        let cache = LegalMoveCache::with_capacity(4);
        let key = Position::new().key();
        cache.get_or_compute(key, || Ok(Vec::new())).unwrap();

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!((cache.hits(), cache.misses()), (0, 0));
    }
}
