//! Catalog products and the raw attribute dictionaries they are built from.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::{Decimal, ProductId};

/// Gender assumed for products whose catalog entry omits one.
pub const DEFAULT_GENDER: &str = "Unisex";

/// One catalog entry's attribute dictionary, as served by the catalog source.
///
/// Every field is optional. Values of the wrong JSON type are dropped rather
/// than failing the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(rename = "Brand", default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(rename = "Gender", default, deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    #[serde(rename = "Price", default, deserialize_with = "lenient_price")]
    pub price: Option<Decimal>,
    #[serde(
        rename = "Category",
        alias = "Clothing Type",
        default,
        deserialize_with = "lenient_string"
    )]
    pub category: Option<String>,
    #[serde(
        rename = "Sizes",
        alias = "Size",
        default,
        deserialize_with = "lenient_string"
    )]
    pub sizes: Option<String>,
    #[serde(
        rename = "Clothing AWS URL",
        alias = "Image URL",
        default,
        deserialize_with = "lenient_string"
    )]
    pub image_url: Option<String>,
}

impl RawProduct {
    /// Build a raw entry from an arbitrary JSON value.
    ///
    /// Non-object values yield an empty entry (all fields defaulted).
    pub fn from_json(name: &str, value: serde_json::Value) -> Self {
        if !value.is_object() {
            warn!("Catalog entry {:?} is not an object; defaulting all fields", name);
            return RawProduct::default();
        }
        match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Catalog entry {:?} could not be read ({}); defaulting all fields", name, e);
                RawProduct::default()
            }
        }
    }

    /// Promote to a [`Product`] with the given ingestion id.
    pub fn into_product(self, id: ProductId, name: String) -> Product {
        let gender = self
            .gender
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| DEFAULT_GENDER.to_string());

        Product {
            id,
            name,
            brand: self.brand,
            description: self.description,
            gender,
            price: self.price,
            category: self.category,
            sizes: self.sizes,
            image_url: self.image_url,
        }
    }
}

/// A catalog product. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub gender: String,
    /// `None` means unbounded: fails any finite price ceiling.
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Raw comma-delimited size string, e.g. `"S, M,L"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Create a product with only an id and name; every attribute defaulted.
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        RawProduct::default().into_product(id, name.into())
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    /// Size tokens parsed from the raw size string.
    ///
    /// Splits on commas, trims each token, drops empty ones.
    pub fn size_tokens(&self) -> Vec<&str> {
        self.sizes
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Price for summing into totals; missing counts as zero.
    pub fn price_or_zero(&self) -> Decimal {
        self.price.unwrap_or_else(Decimal::zero)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let price = match &value {
        serde_json::Value::Number(n) => Decimal::from_json_number(n),
        serde_json::Value::String(s) => Decimal::from_str_canonical(s.trim_start_matches('$')).ok(),
        _ => None,
    };
    if price.is_none() && !value.is_null() {
        warn!("Unreadable price {}; treating as missing", value);
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_product_reads_catalog_keys() {
        let raw = RawProduct::from_json(
            "Tee",
            json!({
                "Brand": "Acme",
                "Description": "Plain tee",
                "Gender": "Unisex",
                "Price": 19.99,
                "Category": "Shirts",
                "Sizes": "S, M",
                "Clothing AWS URL": "https://img.example/tee.png"
            }),
        );
        assert_eq!(raw.brand.as_deref(), Some("Acme"));
        assert_eq!(raw.price, Some(Decimal::from_str_canonical("19.99").unwrap()));
        assert_eq!(raw.category.as_deref(), Some("Shirts"));
        assert_eq!(raw.image_url.as_deref(), Some("https://img.example/tee.png"));
    }

    #[test]
    fn test_raw_product_accepts_aliases() {
        let raw = RawProduct::from_json(
            "Cap",
            json!({"Clothing Type": "Hats", "Size": "M", "Price": "25"}),
        );
        assert_eq!(raw.category.as_deref(), Some("Hats"));
        assert_eq!(raw.sizes.as_deref(), Some("M"));
        assert_eq!(raw.price, Some(Decimal::from(25)));
    }

    #[test]
    fn test_raw_product_defaults_malformed_fields() {
        let raw = RawProduct::from_json(
            "Odd",
            json!({"Price": "free", "Brand": ["x"], "Gender": null, "Extra": 1}),
        );
        assert_eq!(raw.price, None);
        assert_eq!(raw.brand, None);
        assert_eq!(raw.gender, None);

        let raw = RawProduct::from_json("NotAnObject", json!(42));
        assert_eq!(raw, RawProduct::default());
    }

    #[test]
    fn test_missing_gender_defaults_to_unisex() {
        let product = RawProduct::default().into_product(ProductId::new(0), "Scarf".into());
        assert_eq!(product.gender, DEFAULT_GENDER);

        let raw = RawProduct {
            gender: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(raw.into_product(ProductId::new(1), "Hat".into()).gender, "Unisex");
    }

    #[test]
    fn test_size_tokens_trim_and_skip_empty() {
        let product = Product::new(ProductId::new(0), "Tee").with_sizes(" S ,M,, L ");
        assert_eq!(product.size_tokens(), vec!["S", "M", "L"]);

        let bare = Product::new(ProductId::new(1), "Bare");
        assert!(bare.size_tokens().is_empty());

        let blank = Product::new(ProductId::new(2), "Blank").with_sizes(" , ");
        assert!(blank.size_tokens().is_empty());
    }

    #[test]
    fn test_price_or_zero() {
        let priced = Product::new(ProductId::new(0), "Tee").with_price(Decimal::from(20));
        assert_eq!(priced.price_or_zero(), Decimal::from(20));
        assert!(Product::new(ProductId::new(1), "Free").price_or_zero().is_zero());
    }
}
