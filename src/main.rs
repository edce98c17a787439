use std::net::SocketAddr;
use std::sync::Arc;
use storefront_cart::cart::state::{load_catalog, AppState};
use storefront_cart::router::create_app_router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging (RUST_LOG overrides the default)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the catalog snapshot and initialize application state
    let catalog = load_catalog().await;
    tracing::info!(products = catalog.len(), "catalog loaded");
    let state = Arc::new(AppState::new(catalog));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
