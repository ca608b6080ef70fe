//! Preference persistence.
//!
//! A single preference blob stored under one namespaced key. The storefront
//! is handed a store at construction; nothing reads preferences from ambient
//! global state.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;
use tracing::info;

use crate::domain::PreferenceSet;

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryPreferenceStore;
pub use sqlite::SqlitePreferenceStore;

/// Key the preference blob lives under unless configured otherwise.
pub const DEFAULT_PREFERENCES_KEY: &str = "userPreferences";

#[derive(Debug, Error)]
pub enum PreferenceStoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("Stored preferences are unreadable: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait PreferenceStore: Send + Sync + fmt::Debug {
    /// The stored preferences, or `None` if nothing was saved yet.
    async fn load(&self) -> Result<Option<PreferenceSet>, PreferenceStoreError>;

    /// Overwrite the stored preferences.
    async fn save(&self, prefs: &PreferenceSet) -> Result<(), PreferenceStoreError>;
}

/// Load stored preferences, persisting and returning the defaults on first use.
pub async fn load_or_init(
    store: &dyn PreferenceStore,
) -> Result<PreferenceSet, PreferenceStoreError> {
    if let Some(prefs) = store.load().await? {
        return Ok(prefs);
    }
    let defaults = PreferenceSet::default();
    store.save(&defaults).await?;
    info!("Initialized default preferences");
    Ok(defaults)
}
