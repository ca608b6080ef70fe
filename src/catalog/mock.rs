//! Mock catalog source for testing without network calls.

use super::{CatalogSource, DataSourceError, RawCatalog};
use crate::domain::RawProduct;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock catalog source that returns predefined entries or a primed error.
#[derive(Debug, Clone, Default)]
pub struct MockCatalogSource {
    catalog: RawCatalog,
    error: Option<DataSourceError>,
    failures_left: Arc<AtomicUsize>,
    fetches: Arc<AtomicUsize>,
}

impl MockCatalogSource {
    /// Create a new mock source with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry.
    pub fn with_entry(mut self, name: impl Into<String>, raw: RawProduct) -> Self {
        self.catalog.push(name, raw);
        self
    }

    /// Replace the catalog with a parsed JSON document.
    pub fn with_json(mut self, document: serde_json::Value) -> Result<Self, DataSourceError> {
        self.catalog = RawCatalog::from_json_value(document)?;
        Ok(self)
    }

    /// Make every fetch fail with `error`.
    pub fn failing(self, error: DataSourceError) -> Self {
        self.fail_times(error, usize::MAX)
    }

    /// Fail the next `times` fetches with `error`, then serve the catalog.
    pub fn fail_times(mut self, error: DataSourceError, times: usize) -> Self {
        self.error = Some(error);
        self.failures_left = Arc::new(AtomicUsize::new(times));
        self
    }

    /// Number of times `fetch_catalog` has been called.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_catalog(&self) -> Result<RawCatalog, DataSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.error {
            // usize::MAX never counts down.
            let failed = self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| match left {
                    0 => None,
                    usize::MAX => Some(left),
                    n => Some(n - 1),
                })
                .is_ok();
            if failed {
                return Err(err.clone());
            }
        }
        Ok(self.catalog.clone())
    }
}
