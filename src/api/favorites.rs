use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::{parse_entry_id, AppState, EntryDto};
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub favorites: Vec<EntryDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveToCartResponse {
    pub cart_entry_id: String,
}

pub async fn get_favorites(State(state): State<AppState>) -> Json<FavoritesResponse> {
    let shop = state.storefront.lock().await;
    Json(FavoritesResponse {
        favorites: shop.favorites().list().iter().map(EntryDto::from).collect(),
    })
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntryDto>, AppError> {
    let id = parse_entry_id(&id)?;
    let removed = state.storefront.lock().await.remove_favorite(id)?;
    Ok(Json(EntryDto::from(&removed)))
}

pub async fn move_to_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MoveToCartResponse>, AppError> {
    let id = parse_entry_id(&id)?;
    let cart_id = state.storefront.lock().await.move_to_cart(id)?;
    Ok(Json(MoveToCartResponse {
        cart_entry_id: cart_id.to_string(),
    }))
}
