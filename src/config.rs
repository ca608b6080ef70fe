use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::preferences::DEFAULT_PREFERENCES_KEY;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub catalog: CatalogLocation,
    pub preferences_key: String,
    pub catalog_fetch_timeout: Duration,
}

/// Where the product catalog is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Url(String),
    Path(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let catalog = parse_catalog_location(&env_map)?;

        let preferences_key = match env_map.get("PREFERENCES_KEY").map(|s| s.trim()) {
            None => DEFAULT_PREFERENCES_KEY.to_string(),
            Some("") => {
                return Err(ConfigError::InvalidValue(
                    "PREFERENCES_KEY".to_string(),
                    "must not be empty".to_string(),
                ))
            }
            Some(key) => key.to_string(),
        };

        let timeout_secs = env_map
            .get("CATALOG_FETCH_TIMEOUT_SECS")
            .map(|s| s.as_str())
            .unwrap_or("30")
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "CATALOG_FETCH_TIMEOUT_SECS".to_string(),
                    "must be a whole number of seconds".to_string(),
                )
            })?;

        Ok(Config {
            port,
            database_path,
            catalog,
            preferences_key,
            catalog_fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// `CATALOG_URL` wins over `CATALOG_PATH`; one of them is required.
fn parse_catalog_location(env_map: &HashMap<String, String>) -> Result<CatalogLocation, ConfigError> {
    if let Some(url) = env_map.get("CATALOG_URL").map(|s| s.trim()) {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(
                "CATALOG_URL".to_string(),
                format!("must be an http(s) URL, got {}", url),
            ));
        }
        return Ok(CatalogLocation::Url(url.to_string()));
    }
    match env_map.get("CATALOG_PATH").map(|s| s.trim()) {
        Some(path) if !path.is_empty() => Ok(CatalogLocation::Path(PathBuf::from(path))),
        _ => Err(ConfigError::MissingEnv("CATALOG_URL or CATALOG_PATH".to_string())),
    }
}
