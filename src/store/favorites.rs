use super::{Entry, EntryList};
use crate::domain::{EntryId, Product};
use tracing::debug;

/// Products the shopper liked, in the order they were liked.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    entries: EntryList,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a favorite under a fresh id.
    pub fn add(&mut self, product: Product) -> EntryId {
        let id = self.entries.add(product);
        debug!("Favorited entry {}", id);
        id
    }

    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn list(&self) -> &[Entry] {
        self.entries.list()
    }

    pub fn len(&self) -> usize {
        self.entries.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.list().is_empty()
    }
}
