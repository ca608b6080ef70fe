//! Swipe session: a fixed deck walked by a cursor.
//!
//! Dealt cards stay in the deck; only the cursor moves. Re-filtering
//! replaces the deck and rewinds the cursor, discarding earlier progress.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filter;
use crate::domain::{EntryId, PreferenceSet, Product, ProductId};
use crate::store::FavoritesStore;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    /// Catalog not loaded yet.
    Loading,
    /// A card is available.
    Ready,
    /// Every card in the deck has been swiped.
    Exhausted,
    /// Filtering produced an empty deck.
    NoMatches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Dislike: discard.
    Left,
    /// Like: add to favorites.
    Right,
}

/// What a swipe did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The product was liked and stored under `entry`.
    Liked { product: ProductId, entry: EntryId },
    /// The product was discarded.
    Disliked { product: ProductId },
    /// Nothing to swipe; state unchanged.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SwipeSession {
    deck: Vec<Product>,
    cursor: usize,
    status: SessionStatus,
}

impl Default for SwipeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeSession {
    /// New session waiting for the catalog.
    pub fn new() -> Self {
        Self {
            deck: Vec::new(),
            cursor: 0,
            status: SessionStatus::Loading,
        }
    }

    /// Replace the deck and rewind to its first card.
    pub fn reset(&mut self, deck: Vec<Product>) {
        self.deck = deck;
        self.cursor = 0;
        self.status = if self.deck.is_empty() {
            SessionStatus::NoMatches
        } else {
            SessionStatus::Ready
        };
        debug!(
            "Session reset with {} cards, status {:?}",
            self.deck.len(),
            self.status
        );
    }

    /// Filter `catalog` by `prefs` and start over on the result.
    pub fn refilter(&mut self, catalog: &[Product], prefs: &PreferenceSet) {
        self.reset(filter::filter(catalog, prefs));
    }

    /// The card on top, if any.
    pub fn current(&self) -> Option<&Product> {
        match self.status {
            SessionStatus::Ready => self.deck.get(self.cursor),
            _ => None,
        }
    }

    /// Like the current card: store it in `favorites` and advance.
    ///
    /// No-op when there is no current card.
    pub fn swipe_right(&mut self, favorites: &mut FavoritesStore) -> Option<EntryId> {
        let product = self.current()?.clone();
        let entry = favorites.add(product);
        self.advance();
        Some(entry)
    }

    /// Dislike the current card and advance. No-op when there is none.
    pub fn swipe_left(&mut self) -> Option<ProductId> {
        let product = self.current()?.id;
        self.advance();
        Some(product)
    }

    pub fn swipe(&mut self, direction: SwipeDirection, favorites: &mut FavoritesStore) -> SwipeOutcome {
        let Some(product) = self.current().map(|p| p.id) else {
            debug!("Swipe {:?} ignored in status {:?}", direction, self.status);
            return SwipeOutcome::Ignored;
        };
        match direction {
            SwipeDirection::Right => match self.swipe_right(favorites) {
                Some(entry) => SwipeOutcome::Liked { product, entry },
                None => SwipeOutcome::Ignored,
            },
            SwipeDirection::Left => match self.swipe_left() {
                Some(_) => SwipeOutcome::Disliked { product },
                None => SwipeOutcome::Ignored,
            },
        }
    }

    fn advance(&mut self) {
        if self.cursor < self.deck.len() {
            self.cursor += 1;
        }
        if self.cursor == self.deck.len() {
            self.status = SessionStatus::Exhausted;
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn deck(&self) -> &[Product] {
        &self.deck
    }

    /// Cards not yet swiped, including the current one.
    pub fn remaining(&self) -> usize {
        self.deck.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.status == SessionStatus::Exhausted
    }
}
