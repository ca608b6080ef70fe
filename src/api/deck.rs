use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{AppState, ProductDto};
use crate::engine::{SessionStatus, SwipeDirection, SwipeOutcome};
use crate::error::AppError;
use crate::orchestration::Storefront;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckResponse {
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductDto>,
    pub cursor: usize,
    pub remaining: usize,
    pub deck_size: usize,
}

impl DeckResponse {
    fn from_storefront(shop: &Storefront) -> Self {
        let session = shop.session();
        Self {
            status: session.status(),
            product: session.current().map(ProductDto::from),
            cursor: session.cursor(),
            remaining: session.remaining(),
            deck_size: session.deck().len(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    pub direction: SwipeDirection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeResponse {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_id: Option<String>,
    pub deck: DeckResponse,
}

pub async fn get_deck(State(state): State<AppState>) -> Json<DeckResponse> {
    let shop = state.storefront.lock().await;
    Json(DeckResponse::from_storefront(&shop))
}

pub async fn swipe(
    State(state): State<AppState>,
    Json(req): Json<SwipeRequest>,
) -> Json<SwipeResponse> {
    let mut shop = state.storefront.lock().await;
    let (outcome, favorite_id) = match shop.swipe(req.direction) {
        SwipeOutcome::Liked { entry, .. } => ("liked", Some(entry.to_string())),
        SwipeOutcome::Disliked { .. } => ("disliked", None),
        SwipeOutcome::Ignored => ("ignored", None),
    };
    Json(SwipeResponse {
        outcome,
        favorite_id,
        deck: DeckResponse::from_storefront(&shop),
    })
}

/// Re-filter with the stored preferences, loading the catalog first if an
/// earlier load failed.
pub async fn refresh(State(state): State<AppState>) -> Result<Json<DeckResponse>, AppError> {
    let mut shop = state.storefront.lock().await;
    if shop.catalog().is_none() {
        shop.start().await?;
    } else {
        shop.refresh().await?;
    }
    Ok(Json(DeckResponse::from_storefront(&shop)))
}
