//! Process-lifetime favorites, one id set per content type
//!
//! The set sits behind an `RwLock` so a shared catalog can be read and
//! updated from several threads. A writer that panicked cannot leave a set
//! half-updated (every mutation is a single insert, remove or clear), so a
//! poisoned lock is recovered instead of propagated.

use jaigurudev_core::{ContentId, ContentType};
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type FavoriteSets = HashMap<ContentType, HashSet<ContentId>>;

#[derive(Debug, Default)]
pub struct Favorites {
    sets: RwLock<FavoriteSets>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, FavoriteSets> {
        self.sets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FavoriteSets> {
        self.sets.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true if the id was not already a favorite
    pub fn insert(&self, content_type: ContentType, id: ContentId) -> bool {
        self.write().entry(content_type).or_default().insert(id)
    }

    /// Returns true if the id was a favorite
    pub fn remove(&self, content_type: ContentType, id: &str) -> bool {
        self.write()
            .get_mut(&content_type)
            .is_some_and(|set| set.remove(id))
    }

    pub fn contains(&self, content_type: ContentType, id: &str) -> bool {
        self.read()
            .get(&content_type)
            .is_some_and(|set| set.contains(id))
    }

    /// Copy of the current ids for one type, in no particular order
    pub fn ids(&self, content_type: ContentType) -> HashSet<ContentId> {
        self.read()
            .get(&content_type)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, content_type: ContentType) -> usize {
        self.read().get(&content_type).map_or(0, HashSet::len)
    }

    /// Removes every favorite of one type, returning how many there were
    pub fn clear(&self, content_type: ContentType) -> usize {
        self.write()
            .remove(&content_type)
            .map_or(0, |set| set.len())
    }
}
