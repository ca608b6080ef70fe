use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use styleswipe::api;
use styleswipe::catalog::{DataSourceError, MockCatalogSource};
use styleswipe::db::init_db;
use styleswipe::orchestration::Storefront;
use styleswipe::preferences::SqlitePreferenceStore;
use styleswipe::Repository;
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    _temp: TempDir,
}

fn tee_and_boots() -> Arc<MockCatalogSource> {
    Arc::new(
        MockCatalogSource::new()
            .with_json(json!({
                "Tee": {"Brand": "Acme", "Sizes": "S,M", "Category": "Shirts", "Gender": "Unisex", "Price": 20},
                "Boots": {"Sizes": "M,L", "Category": "Shoes", "Gender": "Men", "Price": 150.5}
            }))
            .unwrap(),
    )
}

async fn setup_test_app(source: Arc<MockCatalogSource>, start: bool) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));
    let prefs = Arc::new(SqlitePreferenceStore::new(repo));

    let mut storefront = Storefront::new(source, prefs);
    if start {
        storefront.start().await.unwrap();
    }
    let app = api::create_router(api::AppState::new(storefront));

    TestApp {
        app,
        _temp: temp_dir,
    }
}

async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn swipe(app: &axum::Router, direction: &str) -> Value {
    let (status, body) = request(
        app,
        "POST",
        "/v1/deck/swipe",
        Some(json!({"direction": direction})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_health_and_ready() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let (status, body) = request(&test_app.app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = request(&test_app.app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["session"], "ready");
}

#[tokio::test]
async fn test_deck_shows_first_card() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let (status, body) = request(&test_app.app, "GET", "/v1/deck", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["deckSize"], 2);
    assert_eq!(body["remaining"], 2);
    assert_eq!(body["product"]["name"], "Tee");
    assert_eq!(body["product"]["brand"], "Acme");
    assert_eq!(body["product"]["price"], "20");
    assert_eq!(body["product"]["sizes"], json!(["S", "M"]));
}

#[tokio::test]
async fn test_swipe_to_exhaustion() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let liked = swipe(&test_app.app, "right").await;
    assert_eq!(liked["outcome"], "liked");
    assert!(liked["favoriteId"].is_string());
    assert_eq!(liked["deck"]["product"]["name"], "Boots");

    let disliked = swipe(&test_app.app, "left").await;
    assert_eq!(disliked["outcome"], "disliked");
    assert_eq!(disliked["deck"]["status"], "exhausted");
    assert!(disliked["deck"].get("product").is_none());

    let ignored = swipe(&test_app.app, "right").await;
    assert_eq!(ignored["outcome"], "ignored");

    let (_, favorites) = request(&test_app.app, "GET", "/v1/favorites", None).await;
    let favorites = favorites["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["product"]["name"], "Tee");
}

#[tokio::test]
async fn test_invalid_swipe_direction_rejected() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let (status, _) = request(
        &test_app.app,
        "POST",
        "/v1/deck/swipe",
        Some(json!({"direction": "up"})),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_preferences_roundtrip_refilters_deck() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let (status, body) = request(&test_app.app, "GET", "/v1/preferences", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["preferences"]["maxPrice"], "200");
    assert_eq!(body["options"]["genders"], json!(["Male", "Female", "Neutral"]));

    let (status, body) = request(
        &test_app.app,
        "PUT",
        "/v1/preferences",
        Some(json!({"sizes": ["L"], "genders": ["Male"], "maxPrice": "1000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    let (_, deck) = request(&test_app.app, "GET", "/v1/deck", None).await;
    assert_eq!(deck["deckSize"], 1);
    assert_eq!(deck["product"]["name"], "Boots");
    assert_eq!(deck["product"]["price"], "150.5");

    let (_, body) = request(
        &test_app.app,
        "PUT",
        "/v1/preferences",
        Some(json!({"categories": ["Hats"]})),
    )
    .await;
    assert_eq!(body["status"], "noMatches");
}

#[tokio::test]
async fn test_preferences_reject_bad_ceiling() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let (status, body) = request(
        &test_app.app,
        "PUT",
        "/v1/preferences",
        Some(json!({"maxPrice": "cheap"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("maxPrice"));
}

#[tokio::test]
async fn test_favorite_to_cart_to_order() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let tee = swipe(&test_app.app, "right").await["favoriteId"]
        .as_str()
        .unwrap()
        .to_string();
    let boots = swipe(&test_app.app, "right").await["favoriteId"]
        .as_str()
        .unwrap()
        .to_string();

    for id in [&tee, &boots] {
        let (status, body) =
            request(&test_app.app, "POST", &format!("/v1/favorites/{}/cart", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["cartEntryId"].is_string());
    }

    let (_, favorites) = request(&test_app.app, "GET", "/v1/favorites", None).await;
    assert_eq!(favorites["favorites"], json!([]));

    let (_, cart) = request(&test_app.app, "GET", "/v1/cart", None).await;
    assert_eq!(cart["itemCount"], 2);
    assert_eq!(cart["total"], "170.5");

    let (status, order) = request(
        &test_app.app,
        "POST",
        "/v1/checkout",
        Some(json!({"creditCard": "4111111111111111", "address": "1 Main St"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["totalPrice"], "170.5");
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    let serial = order["serial"].as_str().unwrap();
    assert_eq!(serial.len(), 8);
    assert!(serial.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));

    let (_, cart) = request(&test_app.app, "GET", "/v1/cart", None).await;
    assert_eq!(cart["itemCount"], 0);
    assert_eq!(cart["total"], "0");

    let (_, orders) = request(&test_app.app, "GET", "/v1/orders", None).await;
    assert_eq!(orders["orders"].as_array().unwrap().len(), 1);
    assert_eq!(orders["orders"][0]["serial"], serial);
}

#[tokio::test]
async fn test_checkout_validation() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let (status, _) = request(
        &test_app.app,
        "POST",
        "/v1/checkout",
        Some(json!({"creditCard": "4111111111111111", "address": "1 Main St"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let id = swipe(&test_app.app, "right").await["favoriteId"]
        .as_str()
        .unwrap()
        .to_string();
    request(&test_app.app, "POST", &format!("/v1/favorites/{}/cart", id), None).await;

    let (status, body) = request(
        &test_app.app,
        "POST",
        "/v1/checkout",
        Some(json!({"creditCard": " ", "address": "1 Main St"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("creditCard"));

    let (_, cart) = request(&test_app.app, "GET", "/v1/cart", None).await;
    assert_eq!(cart["itemCount"], 1);
}

#[tokio::test]
async fn test_remove_entries() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let id = swipe(&test_app.app, "right").await["favoriteId"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, removed) =
        request(&test_app.app, "DELETE", &format!("/v1/favorites/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["product"]["name"], "Tee");

    let (status, _) =
        request(&test_app.app, "DELETE", &format!("/v1/favorites/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&test_app.app, "DELETE", "/v1/cart/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_retries_failed_load() {
    let failing = Arc::new(MockCatalogSource::new().failing(DataSourceError::RateLimited));
    let test_app = setup_test_app(failing.clone(), false).await;

    let (_, deck) = request(&test_app.app, "GET", "/v1/deck", None).await;
    assert_eq!(deck["status"], "loading");

    let (status, body) = request(&test_app.app, "POST", "/v1/deck/refresh", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
    assert_eq!(failing.fetch_count(), 1);

    let (_, ready) = request(&test_app.app, "GET", "/ready", None).await;
    assert_eq!(ready["status"], "loading");
}

#[tokio::test]
async fn test_refresh_after_start_keeps_catalog() {
    let source = tee_and_boots();
    let test_app = setup_test_app(source.clone(), true).await;

    swipe(&test_app.app, "left").await;
    let (status, deck) = request(&test_app.app, "POST", "/v1/deck/refresh", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deck["cursor"], 0);
    assert_eq!(deck["product"]["name"], "Tee");
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_add_catalog_product_to_cart() {
    let test_app = setup_test_app(tee_and_boots(), true).await;

    let (_, deck) = request(&test_app.app, "GET", "/v1/deck", None).await;
    let tee_id = deck["product"]["id"].clone();

    let (status, body) = request(
        &test_app.app,
        "POST",
        "/v1/cart",
        Some(json!({"productId": tee_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["cartEntryId"].is_string());

    let (status, _) = request(
        &test_app.app,
        "POST",
        "/v1/cart",
        Some(json!({"productId": 99})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, cart) = request(&test_app.app, "GET", "/v1/cart", None).await;
    assert_eq!(cart["itemCount"], 1);
    assert_eq!(cart["total"], "20");
    assert_eq!(cart["items"][0]["product"]["name"], "Tee");
}

#[tokio::test]
async fn test_cart_total_past_decimal_range() {
    let pricey = Arc::new(
        MockCatalogSource::new()
            .with_json(json!({
                "Gold Tee": {"Price": "50000000000000000000000000000"},
                "Gold Cap": {"Price": "50000000000000000000000000000"}
            }))
            .unwrap(),
    );
    let test_app = setup_test_app(pricey, true).await;

    for id in [0, 1] {
        let (status, _) = request(
            &test_app.app,
            "POST",
            "/v1/cart",
            Some(json!({"productId": id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, cart) = request(&test_app.app, "GET", "/v1/cart", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["itemCount"], 2);
    assert!(cart["total"].is_null());

    let (status, body) = request(
        &test_app.app,
        "POST",
        "/v1/checkout",
        Some(json!({"creditCard": "4111111111111111", "address": "1 Main St"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, orders) = request(&test_app.app, "GET", "/v1/orders", None).await;
    assert_eq!(orders["orders"], json!([]));
}

#[tokio::test]
async fn test_refresh_recovers_after_failed_start() {
    let flaky = Arc::new(
        MockCatalogSource::new()
            .with_json(json!({
                "Tee": {"Sizes": "S,M", "Category": "Shirts", "Gender": "Unisex", "Price": 20},
                "Boots": {"Sizes": "M,L", "Category": "Shoes", "Gender": "Men", "Price": 150.5}
            }))
            .unwrap()
            .fail_times(DataSourceError::RateLimited, 1),
    );
    let test_app = setup_test_app(flaky.clone(), false).await;

    let (status, _) = request(&test_app.app, "POST", "/v1/deck/refresh", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let (_, deck) = request(&test_app.app, "GET", "/v1/deck", None).await;
    assert_eq!(deck["status"], "loading");

    let (status, deck) = request(&test_app.app, "POST", "/v1/deck/refresh", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deck["status"], "ready");
    assert_eq!(deck["cursor"], 0);
    assert_eq!(deck["deckSize"], 2);
    assert_eq!(deck["product"]["name"], "Tee");
    assert_eq!(flaky.fetch_count(), 2);

    let (_, ready) = request(&test_app.app, "GET", "/ready", None).await;
    assert_eq!(ready["status"], "ready");
}
