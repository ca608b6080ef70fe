use super::{Entry, EntryList, FavoritesStore, StoreError};
use crate::domain::{Decimal, EntryId, Product};
use tracing::debug;

/// Items waiting for checkout.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    entries: EntryList,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item under a fresh id.
    pub fn add(&mut self, product: Product) -> EntryId {
        let id = self.entries.add(product);
        debug!("Added cart entry {}", id);
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

    /// Sum of item prices; items without a price count as zero.
    ///
    /// `None` when the sum does not fit in a `Decimal`.
    pub fn total(&self) -> Option<Decimal> {
        self.entries
            .list()
            .iter()
            .try_fold(Decimal::zero(), |acc, e| acc.checked_add(e.product.price_or_zero()))
    }

    /// Empty the cart, returning what it held.
    pub fn drain(&mut self) -> Vec<Entry> {
        self.entries.drain()
    }
}

/// Transfer a favorite into the cart.
///
/// The cart entry gets a fresh id. Unknown ids leave both stores untouched.
pub fn move_to_cart(
    favorites: &mut FavoritesStore,
    cart: &mut CartStore,
    id: EntryId,
) -> Result<EntryId, StoreError> {
    let entry = favorites.remove(id).ok_or(StoreError::NotFound(id))?;
    let cart_id = cart.add(entry.product);
    debug!("Moved favorite {} to cart as {}", id, cart_id);
    Ok(cart_id)
}
