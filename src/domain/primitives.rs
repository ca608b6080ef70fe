//! Domain primitives: ProductId, EntryId, OrderSerial, TimeMs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Time in milliseconds since Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeMs(pub i64);

impl TimeMs {
    /// Create a TimeMs from milliseconds.
    pub fn new(ms: i64) -> Self {
        TimeMs(ms)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        TimeMs(chrono::Utc::now().timestamp_millis())
    }

    /// Get the underlying milliseconds value.
    pub fn as_ms(&self) -> i64 {
        self.0
    }
}

/// Identifier assigned to a catalog entry at ingestion.
///
/// Sequential in catalog order and unique within one catalog, so two products
/// sharing a display name stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        ProductId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one favorites or cart entry.
///
/// Generated when the entry is inserted; the same product can be held by
/// several entries, each removable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(EntryId)
    }
}

/// Short human-facing order number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderSerial(pub String);

impl OrderSerial {
    /// Length of a generated serial.
    pub const LEN: usize = 8;

    /// Generate a serial from the leading characters of a random UUID.
    pub fn generate() -> Self {
        let mut serial = Uuid::new_v4().simple().to_string().to_uppercase();
        serial.truncate(Self::LEN);
        OrderSerial(serial)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
