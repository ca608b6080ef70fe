use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::{AppState, ProductDto};
use crate::domain::Order;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub serial: String,
    pub items: Vec<ProductDto>,
    pub total_price: String,
    pub placed_at_ms: i64,
}

impl From<&Order> for OrderDto {
    fn from(o: &Order) -> Self {
        Self {
            serial: o.serial().to_string(),
            items: o.items().iter().map(ProductDto::from).collect(),
            total_price: o.total_price().to_canonical_string(),
            placed_at_ms: o.placed_at().as_ms(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub orders: Vec<OrderDto>,
}

/// Orders in the order they were placed.
pub async fn get_orders(State(state): State<AppState>) -> Json<OrdersResponse> {
    let shop = state.storefront.lock().await;
    Json(OrdersResponse {
        orders: shop.orders().list().iter().map(OrderDto::from).collect(),
    })
}
