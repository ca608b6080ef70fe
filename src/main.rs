use std::net::SocketAddr;
use std::sync::Arc;
use styleswipe::config::{CatalogLocation, Config};
use styleswipe::{
    api, init_db, CatalogSource, FileCatalogSource, HttpCatalogSource, PreferenceStore,
    Repository, SqlitePreferenceStore, Storefront,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let port = config.port;

    // Initialize database and dependencies
    let pool = match init_db(&config.database_path).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let repo = Arc::new(Repository::new(pool));
    let preference_store: Arc<dyn PreferenceStore> = Arc::new(SqlitePreferenceStore::with_key(
        repo,
        config.preferences_key.clone(),
    ));
    let catalog_source: Arc<dyn CatalogSource> = match &config.catalog {
        CatalogLocation::Url(url) => Arc::new(
            HttpCatalogSource::new(url.clone()).with_max_elapsed(config.catalog_fetch_timeout),
        ),
        CatalogLocation::Path(path) => Arc::new(FileCatalogSource::new(path.clone())),
    };

    // A failed first load leaves the deck loading; POST /v1/deck/refresh retries.
    let mut storefront = Storefront::new(catalog_source, preference_store);
    match storefront.start().await {
        Ok(status) => tracing::info!("Storefront started ({:?})", status),
        Err(e) => tracing::warn!("Initial catalog load failed: {}", e),
    }

    // Create router
    let app = api::create_router(api::AppState::new(storefront));

    // Bind to address
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
