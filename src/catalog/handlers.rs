//! REST API handlers for the product catalog

use crate::cart::state::SharedState;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/products", get(list_products))
}

/// Endpoint: GET /products
/// Returns every product in the catalog.
async fn list_products(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.catalog.clone())
}
