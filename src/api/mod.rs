pub mod cart;
pub mod deck;
pub mod favorites;
pub mod health;
pub mod orders;
pub mod preferences;

use crate::domain::{EntryId, Product};
use crate::error::AppError;
use crate::orchestration::Storefront;
use crate::store::Entry;
use axum::{
    routing::{delete, get, post},
    Router,
};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// Shared handler state.
///
/// The storefront is single-writer; the mutex serializes every request that
/// touches it.
#[derive(Clone)]
pub struct AppState {
    pub storefront: Arc<Mutex<Storefront>>,
}

impl AppState {
    pub fn new(storefront: Storefront) -> Self {
        Self {
            storefront: Arc::new(Mutex::new(storefront)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/deck", get(deck::get_deck))
        .route("/v1/deck/swipe", post(deck::swipe))
        .route("/v1/deck/refresh", post(deck::refresh))
        .route(
            "/v1/preferences",
            get(preferences::get_preferences).put(preferences::put_preferences),
        )
        .route("/v1/favorites", get(favorites::get_favorites))
        .route("/v1/favorites/:id", delete(favorites::delete_favorite))
        .route("/v1/favorites/:id/cart", post(favorites::move_to_cart))
        .route("/v1/cart", get(cart::get_cart).post(cart::add_to_cart))
        .route("/v1/cart/:id", delete(cart::delete_cart_item))
        .route("/v1/checkout", post(cart::checkout))
        .route("/v1/orders", get(orders::get_orders))
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub sizes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.as_u64(),
            name: p.name.clone(),
            brand: p.brand.clone(),
            description: p.description.clone(),
            gender: p.gender.clone(),
            price: p.price.map(|d| d.to_canonical_string()),
            category: p.category.clone(),
            sizes: p.size_tokens().into_iter().map(str::to_string).collect(),
            image_url: p.image_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDto {
    pub id: String,
    pub product: ProductDto,
    pub added_at_ms: i64,
}

impl From<&Entry> for EntryDto {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id.to_string(),
            product: ProductDto::from(&e.product),
            added_at_ms: e.added_at.as_ms(),
        }
    }
}

pub(crate) fn parse_entry_id(raw: &str) -> Result<EntryId, AppError> {
    EntryId::from_str(raw).map_err(|_| AppError::BadRequest("Invalid entry id".into()))
}
