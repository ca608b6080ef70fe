//! Catalog read from a local JSON file.

use super::{CatalogSource, DataSourceError, RawCatalog};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_catalog(&self) -> Result<RawCatalog, DataSourceError> {
        debug!("Reading catalog from {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DataSourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        RawCatalog::from_json_str(&contents)
    }
}
