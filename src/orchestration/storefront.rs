use crate::catalog::{CatalogSource, DataSourceError, ProductCatalog};
use crate::domain::{EntryId, Order, PreferenceSet, Product, ProductId};
use crate::engine::{SessionStatus, SwipeDirection, SwipeOutcome, SwipeSession};
use crate::preferences::{self, PreferenceStore, PreferenceStoreError};
use crate::store::{self, CartStore, Entry, FavoritesStore, OrderHistory, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// One shopper's session: catalog, deck, favorites, cart and orders.
///
/// Collaborators are injected. All methods take `&mut self`; a host that
/// shares a storefront across tasks must serialize access itself.
#[derive(Debug)]
pub struct Storefront {
    catalog_source: Arc<dyn CatalogSource>,
    preference_store: Arc<dyn PreferenceStore>,
    catalog: Option<ProductCatalog>,
    preferences: PreferenceSet,
    session: SwipeSession,
    favorites: FavoritesStore,
    cart: CartStore,
    orders: OrderHistory,
}

impl Storefront {
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        preference_store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            catalog_source,
            preference_store,
            catalog: None,
            preferences: PreferenceSet::default(),
            session: SwipeSession::new(),
            favorites: FavoritesStore::new(),
            cart: CartStore::new(),
            orders: OrderHistory::new(),
        }
    }

    /// Load the catalog and preferences, then deal the first deck.
    ///
    /// On a catalog failure the session stays `Loading` and `start` may be
    /// called again.
    pub async fn start(&mut self) -> Result<SessionStatus, StorefrontError> {
        let catalog = ProductCatalog::load(self.catalog_source.as_ref()).await?;
        self.catalog = Some(catalog);
        self.refresh().await
    }

    /// Re-read stored preferences and re-filter from the top.
    ///
    /// Before the catalog is loaded this only updates the preferences.
    pub async fn refresh(&mut self) -> Result<SessionStatus, StorefrontError> {
        self.preferences = preferences::load_or_init(self.preference_store.as_ref()).await?;
        Ok(self.refilter())
    }

    /// Persist `prefs` and re-filter with them.
    pub async fn save_preferences(
        &mut self,
        prefs: PreferenceSet,
    ) -> Result<SessionStatus, StorefrontError> {
        self.preference_store.save(&prefs).await?;
        self.preferences = prefs;
        Ok(self.refilter())
    }

    fn refilter(&mut self) -> SessionStatus {
        if let Some(catalog) = &self.catalog {
            self.session.refilter(catalog.products(), &self.preferences);
            info!(
                "Dealt deck of {} products ({:?})",
                self.session.deck().len(),
                self.session.status()
            );
        }
        self.session.status()
    }

    pub fn current(&self) -> Option<&Product> {
        self.session.current()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn session(&self) -> &SwipeSession {
        &self.session
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }

    pub fn catalog(&self) -> Option<&ProductCatalog> {
        self.catalog.as_ref()
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> SwipeOutcome {
        let outcome = self.session.swipe(direction, &mut self.favorites);
        debug!("Swipe {:?}: {:?}", direction, outcome);
        outcome
    }

    pub fn like(&mut self) -> SwipeOutcome {
        self.swipe(SwipeDirection::Right)
    }

    pub fn dislike(&mut self) -> SwipeOutcome {
        self.swipe(SwipeDirection::Left)
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    pub fn remove_favorite(&mut self, id: EntryId) -> Result<Entry, StoreError> {
        self.favorites.remove(id).ok_or(StoreError::NotFound(id))
    }

    /// Move a favorite into the cart, returning the new cart entry id.
    pub fn move_to_cart(&mut self, id: EntryId) -> Result<EntryId, StoreError> {
        store::move_to_cart(&mut self.favorites, &mut self.cart, id)
    }

    /// Put a catalog product straight into the cart, bypassing favorites.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<EntryId, StoreError> {
        let product = self
            .catalog
            .as_ref()
            .and_then(|c| c.get(id))
            .cloned()
            .ok_or(StoreError::UnknownProduct(id))?;
        Ok(self.cart.add(product))
    }

    pub fn remove_from_cart(&mut self, id: EntryId) -> Result<Entry, StoreError> {
        self.cart.remove(id).ok_or(StoreError::NotFound(id))
    }

    /// Turn the cart into an order and empty the cart.
    ///
    /// Payment details are the caller's concern.
    pub fn checkout(&mut self) -> Result<Order, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let total = self.cart.total().ok_or(CheckoutError::TotalOverflow)?;
        let items = self.cart.drain().into_iter().map(|e| e.product).collect();
        Ok(self.orders.create_order(items, total).clone())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Cart total exceeds the supported price range")]
    TotalOverflow,
}

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Catalog load failed: {0}")]
    Catalog(#[from] DataSourceError),
    #[error(transparent)]
    Preferences(#[from] PreferenceStoreError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}
