use super::{PreferenceStore, PreferenceStoreError};
use crate::domain::PreferenceSet;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local preference store.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    prefs: RwLock<Option<PreferenceSet>>,
}

impl InMemoryPreferenceStore {
    /// Empty store: `load` returns `None` until something is saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `prefs`.
    pub fn with(prefs: PreferenceSet) -> Self {
        Self {
            prefs: RwLock::new(Some(prefs)),
        }
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load(&self) -> Result<Option<PreferenceSet>, PreferenceStoreError> {
        Ok(self.prefs.read().await.clone())
    }

    async fn save(&self, prefs: &PreferenceSet) -> Result<(), PreferenceStoreError> {
        *self.prefs.write().await = Some(prefs.clone());
        Ok(())
    }
}
