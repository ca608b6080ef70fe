use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::engine::SessionStatus;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once the catalog has loaded.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let session = state.storefront.lock().await.status();
    let status = if session == SessionStatus::Loading {
        "loading"
    } else {
        "ready"
    };
    Json(serde_json::json!({"status": status, "session": session}))
}
