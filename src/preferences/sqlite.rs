use super::{PreferenceStore, PreferenceStoreError, DEFAULT_PREFERENCES_KEY};
use crate::db::Repository;
use crate::domain::PreferenceSet;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

const NAMESPACE: &str = "preferences";

/// Preferences persisted as a JSON blob in SQLite.
#[derive(Debug, Clone)]
pub struct SqlitePreferenceStore {
    repo: Arc<Repository>,
    key: String,
}

impl SqlitePreferenceStore {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self::with_key(repo, DEFAULT_PREFERENCES_KEY)
    }

    pub fn with_key(repo: Arc<Repository>, key: impl Into<String>) -> Self {
        Self {
            repo,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn load(&self) -> Result<Option<PreferenceSet>, PreferenceStoreError> {
        let Some(blob) = self.repo.get_value(NAMESPACE, &self.key).await? else {
            debug!("No stored preferences under {}", self.key);
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&blob)?))
    }

    async fn save(&self, prefs: &PreferenceSet) -> Result<(), PreferenceStoreError> {
        let blob = serde_json::to_string(prefs)?;
        self.repo.put_value(NAMESPACE, &self.key, &blob).await?;
        info!("Preferences saved under {}", self.key);
        Ok(())
    }
}
