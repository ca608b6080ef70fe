//! Orders placed at checkout.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Decimal, OrderSerial, Product, TimeMs};

/// Immutable snapshot of a completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: Uuid,
    serial: OrderSerial,
    items: Vec<Product>,
    total_price: Decimal,
    placed_at: TimeMs,
}

impl Order {
    /// Snapshot `items` under a freshly generated serial.
    pub fn new(items: Vec<Product>, total_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            serial: OrderSerial::generate(),
            items,
            total_price,
            placed_at: TimeMs::now(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn serial(&self) -> &OrderSerial {
        &self.serial
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn placed_at(&self) -> TimeMs {
        self.placed_at
    }
}
