//! Catalog source abstraction and product catalog ingestion.

use async_trait::async_trait;
use std::fmt;

pub mod file;
pub mod http;
pub mod mock;
pub mod products;

pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;
pub use mock::MockCatalogSource;
pub use products::{ProductCatalog, RawCatalog};

/// External collaborator that serves the raw product catalog.
///
/// The catalog is a mapping of product name to attribute dictionary. Sources
/// only fetch and parse; flattening into products and id assignment happen in
/// [`ProductCatalog::load`].
#[async_trait]
pub trait CatalogSource: Send + Sync + fmt::Debug {
    /// Fetch the full catalog.
    ///
    /// # Returns
    /// Entries in source document order. Names may repeat.
    async fn fetch_catalog(&self) -> Result<RawCatalog, DataSourceError>;
}

/// Error type for catalog fetches.
///
/// The only error kind the shop core propagates; everything else is modeled
/// as data.
#[derive(Debug, Clone)]
pub enum DataSourceError {
    /// Network error (e.g., connection timeout, DNS failure)
    NetworkError(String),
    /// HTTP error (e.g., 404, 5xx server error)
    HttpError { status: u16, message: String },
    /// Parsing error (invalid JSON or wrong top-level shape)
    ParseError(String),
    /// Rate limit exceeded
    RateLimited,
    /// Local file could not be read
    Io(String),
    /// Other error
    Other(String),
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DataSourceError::HttpError { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            DataSourceError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DataSourceError::RateLimited => write!(f, "Rate limited"),
            DataSourceError::Io(msg) => write!(f, "I/O error: {}", msg),
            DataSourceError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for DataSourceError {}
