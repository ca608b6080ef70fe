//! Raw catalog flattening and the loaded product catalog.

use tracing::{info, warn};

use super::{CatalogSource, DataSourceError};
use crate::domain::{Product, ProductId, RawProduct};

/// Catalog entries as fetched, before ids are assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCatalog {
    entries: Vec<(String, RawProduct)>,
}

impl RawCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Repeated names are kept as separate entries.
    pub fn push(&mut self, name: impl Into<String>, raw: RawProduct) {
        self.entries.push((name.into(), raw));
    }

    /// Parse a catalog document.
    ///
    /// Accepts the name-keyed object form (`{"Tee": {...}}`) and a list form
    /// (`[{"Name": "Tee", ...}]`). Only the list form can carry two products
    /// with the same name, since JSON object keys collapse on parse.
    ///
    /// # Errors
    /// Returns `ParseError` when the top-level value is neither shape.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, DataSourceError> {
        let mut catalog = RawCatalog::new();
        match value {
            serde_json::Value::Object(map) => {
                for (name, attrs) in map {
                    let raw = RawProduct::from_json(&name, attrs);
                    catalog.push(name, raw);
                }
            }
            serde_json::Value::Array(items) => {
                for (idx, mut item) in items.into_iter().enumerate() {
                    let name = item
                        .as_object_mut()
                        .and_then(|obj| obj.remove("Name").or_else(|| obj.remove("name")))
                        .and_then(|v| v.as_str().map(str::to_string));
                    let Some(name) = name else {
                        warn!("Catalog item #{} has no name; skipping", idx);
                        continue;
                    };
                    let raw = RawProduct::from_json(&name, item);
                    catalog.push(name, raw);
                }
            }
            other => {
                return Err(DataSourceError::ParseError(format!(
                    "Expected catalog object or array, got {}",
                    json_kind(&other)
                )))
            }
        }
        Ok(catalog)
    }

    /// Parse a catalog document from text.
    ///
    /// # Errors
    /// Returns `ParseError` on invalid JSON or an unsupported shape.
    pub fn from_json_str(s: &str) -> Result<Self, DataSourceError> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| DataSourceError::ParseError(e.to_string()))?;
        Self::from_json_value(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, RawProduct)] {
        &self.entries
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// The products available for one session. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Fetch from `source` and flatten into products.
    ///
    /// No retry happens here; callers may call `load` again after a failure.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self, DataSourceError> {
        let raw = source.fetch_catalog().await?;
        let catalog = Self::from_raw(raw);
        info!("Loaded catalog with {} products", catalog.len());
        Ok(catalog)
    }

    /// Flatten raw entries, assigning sequential ids in document order.
    pub fn from_raw(raw: RawCatalog) -> Self {
        let products = raw
            .entries
            .into_iter()
            .enumerate()
            .map(|(idx, (name, attrs))| attrs.into_product(ProductId::new(idx as u64), name))
            .collect();
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
