//! User filter criteria.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use super::Decimal;

/// Sizes offered on the preferences screen.
pub const SIZE_OPTIONS: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Clothing categories offered on the preferences screen.
pub const CATEGORY_OPTIONS: [&str; 9] = [
    "Shorts", "Pants", "Jackets", "Shoes", "Shirts", "Hats", "Tops", "Jeans", "Other",
];

/// Genders offered on the preferences screen.
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Neutral"];

/// Price ceiling used when nothing has been stored yet.
pub const DEFAULT_MAX_PRICE: u32 = 200;

/// Accepted values per filter dimension plus an inclusive price ceiling.
///
/// An empty list places no constraint on its dimension. A `None` ceiling is
/// unbounded. The serialized form keeps the key names of the stored blob
/// (`clothingTypes`, `gender`, `price`). A blob without a `price` key reads
/// as the default ceiling; an explicit `null` is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(rename = "clothingTypes", default)]
    pub categories: Vec<String>,
    #[serde(rename = "gender", default)]
    pub genders: Vec<String>,
    #[serde(
        rename = "price",
        default = "default_max_price",
        serialize_with = "serialize_price",
        deserialize_with = "deserialize_price"
    )]
    pub max_price: Option<Decimal>,
}

impl Default for PreferenceSet {
    /// Every option selected, ceiling at [`DEFAULT_MAX_PRICE`].
    fn default() -> Self {
        Self {
            sizes: to_owned(&SIZE_OPTIONS),
            categories: to_owned(&CATEGORY_OPTIONS),
            genders: to_owned(&GENDER_OPTIONS),
            max_price: default_max_price(),
        }
    }
}

impl PreferenceSet {
    /// No constraint on any dimension.
    pub fn unconstrained() -> Self {
        Self {
            sizes: Vec::new(),
            categories: Vec::new(),
            genders: Vec::new(),
            max_price: None,
        }
    }

    pub fn with_sizes<S: AsRef<str>>(mut self, sizes: &[S]) -> Self {
        self.sizes = to_owned(sizes);
        self
    }

    pub fn with_categories<S: AsRef<str>>(mut self, categories: &[S]) -> Self {
        self.categories = to_owned(categories);
        self
    }

    pub fn with_genders<S: AsRef<str>>(mut self, genders: &[S]) -> Self {
        self.genders = to_owned(genders);
        self
    }

    pub fn with_max_price(mut self, max_price: Option<Decimal>) -> Self {
        self.max_price = max_price;
        self
    }
}

fn to_owned<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_string()).collect()
}

fn default_max_price() -> Option<Decimal> {
    Some(Decimal::from(DEFAULT_MAX_PRICE))
}

/// Whole ceilings that fit an `i64` are written as JSON integers, everything
/// else as a canonical decimal string, so no value passes through `f64`.
fn serialize_price<S>(price: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let Some(price) = price else {
        return serializer.serialize_none();
    };
    let inner = price.inner();
    match inner.fract().is_zero().then(|| inner.to_i64()).flatten() {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_str(&price.to_canonical_string()),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let price = match &value {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Number(n) => Decimal::from_json_number(n),
        serde_json::Value::String(s) => Decimal::from_str_canonical(s).ok(),
        _ => None,
    };
    match price {
        Some(p) if !p.is_negative() => Ok(Some(p)),
        _ => {
            warn!("Unreadable stored price ceiling {}; using default", value);
            Ok(default_max_price())
        }
    }
}
