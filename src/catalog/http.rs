//! HTTP catalog source.

use super::{CatalogSource, DataSourceError, RawCatalog};
use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Catalog served as a JSON document over HTTP.
///
/// Transient failures (network, 429, 5xx) are retried with exponential
/// backoff until `max_elapsed` passes; client errors and bad JSON fail at once.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
    max_elapsed: Duration,
}

impl HttpCatalogSource {
    /// Create a source for `url` with a 30 second retry budget.
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
            max_elapsed: Duration::from_secs(30),
        }
    }

    /// Override the total time spent retrying transient failures.
    pub fn with_max_elapsed(mut self, max_elapsed: Duration) -> Self {
        self.max_elapsed = max_elapsed;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_json(&self) -> Result<serde_json::Value, DataSourceError> {
        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(self.max_elapsed),
            ..Default::default()
        };

        retry(backoff, || async {
            let response = self.client.get(&self.url).send().await.map_err(|e| {
                warn!("Catalog fetch from {} failed: {}", self.url, e);
                backoff::Error::transient(DataSourceError::NetworkError(e.to_string()))
            })?;

            let status = response.status();
            if status == 429 {
                return Err(backoff::Error::transient(DataSourceError::RateLimited));
            }
            if status.is_server_error() {
                warn!("Catalog server returned {}", status);
                return Err(backoff::Error::transient(DataSourceError::HttpError {
                    status: status.as_u16(),
                    message: "Server error".to_string(),
                }));
            }
            if !status.is_success() {
                return Err(backoff::Error::permanent(DataSourceError::HttpError {
                    status: status.as_u16(),
                    message: "Client error".to_string(),
                }));
            }

            response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| backoff::Error::permanent(DataSourceError::ParseError(e.to_string())))
        })
        .await
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<RawCatalog, DataSourceError> {
        debug!("Fetching catalog from {}", self.url);
        let document = self.get_json().await?;
        RawCatalog::from_json_value(document)
    }
}
