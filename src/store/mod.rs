//! Favorites, cart and order history.
//!
//! Plain single-owner collections: no interior locking and no change
//! notifications. Callers re-query after mutating.

use serde::Serialize;
use thiserror::Error;

use crate::domain::{EntryId, Product, ProductId, TimeMs};

pub mod cart;
pub mod favorites;
pub mod orders;

pub use cart::{move_to_cart, CartStore};
pub use favorites::FavoritesStore;
pub use orders::OrderHistory;

/// A product held in favorites or the cart under its own id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub product: Product,
    pub added_at: TimeMs,
}

impl Entry {
    fn new(product: Product) -> Self {
        Self {
            id: EntryId::generate(),
            product,
            added_at: TimeMs::now(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No entry with id {0}")]
    NotFound(EntryId),
    #[error("No product with id {0} in the catalog")]
    UnknownProduct(ProductId),
}

/// Insertion-ordered entries keyed by [`EntryId`].
#[derive(Debug, Clone, Default)]
pub(crate) struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub(crate) fn add(&mut self, product: Product) -> EntryId {
        let entry = Entry::new(product);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    pub(crate) fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub(crate) fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub(crate) fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn drain(&mut self) -> Vec<Entry> {
        std::mem::take(&mut self.entries)
    }
}
