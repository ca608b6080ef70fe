use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::orders::OrderDto;
use super::{parse_entry_id, AppState, EntryDto};
use crate::domain::ProductId;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<EntryDto>,
    pub item_count: usize,
    /// `null` when the prices sum past the representable range.
    pub total: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub cart_entry_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub credit_card: String,
    #[serde(default)]
    pub address: String,
}

impl CheckoutRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.credit_card.trim().is_empty() {
            return Err(AppError::BadRequest("creditCard is required".to_string()));
        }
        if self.address.trim().is_empty() {
            return Err(AppError::BadRequest("address is required".to_string()));
        }
        Ok(())
    }
}

pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let shop = state.storefront.lock().await;
    let cart = shop.cart();
    Json(CartResponse {
        items: cart.list().iter().map(EntryDto::from).collect(),
        item_count: cart.len(),
        total: cart.total().map(|t| t.to_canonical_string()),
    })
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>, AppError> {
    let id = state
        .storefront
        .lock()
        .await
        .add_to_cart(ProductId::new(req.product_id))?;
    Ok(Json(AddToCartResponse {
        cart_entry_id: id.to_string(),
    }))
}

pub async fn delete_cart_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntryDto>, AppError> {
    let id = parse_entry_id(&id)?;
    let removed = state.storefront.lock().await.remove_from_cart(id)?;
    Ok(Json(EntryDto::from(&removed)))
}

/// Place an order for everything in the cart.
///
/// Payment and address are only checked for presence; nothing is charged
/// or stored.
pub async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<OrderDto>, AppError> {
    req.validate()?;
    let order = state.storefront.lock().await.checkout()?;
    Ok(Json(OrderDto::from(&order)))
}
