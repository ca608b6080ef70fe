use crate::domain::{Decimal, Order, Product};
use tracing::info;

/// Orders placed this session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an order for `items` at `total_price`.
    ///
    /// No validation: the checkout caller guarantees a non-empty cart and
    /// valid payment details.
    pub fn create_order(&mut self, items: Vec<Product>, total_price: Decimal) -> &Order {
        let order = Order::new(items, total_price);
        info!(
            "Placed order {} with {} items, total {}",
            order.serial(),
            order.items().len(),
            order.total_price()
        );
        self.orders.push(order);
        let last = self.orders.len() - 1;
        &self.orders[last]
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, serial: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.serial().as_str() == serial)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
