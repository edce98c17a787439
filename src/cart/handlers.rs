//! REST API handlers for shopping cart operations
//!
//! This module implements the HTTP endpoints for reading the merged cart,
//! committing quantity writes, applying the quantity-mutation contract, and
//! the read-only order summary.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::{
    helpers::{cart_total, line_items_from, order_summary, resolve_session_id},
    models::{CartView, QuantityChangeInput, UpdateCartInput},
    mutation::{plan_change, CartMode},
    state::SharedState,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(view_cart).post(update_cart))
        .route("/cart/change", post(change_quantity))
        .route("/cart/summary", get(view_summary))
}

/// Endpoint: GET /cart
/// Returns the merged line items and total for the session's cart.
async fn view_cart(State(state): State<SharedState>, headers: HeaderMap) -> impl IntoResponse {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let response = Json(build_view(&state, &session_id)).into_response();
    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: POST /cart
/// Commits an absolute quantity for one product (0 removes the entry) and
/// returns the refreshed cart view. This is the raw collaborator write.
async fn update_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateCartInput>,
) -> impl IntoResponse {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    state.update_quantity(&session_id, &payload.product_id, payload.quantity);

    let response = Json(build_view(&state, &session_id)).into_response();
    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: POST /cart/change
/// Applies the quantity-mutation contract (increment / decrement) to one
/// product and commits the planned quantity. Read-only views are rejected.
async fn change_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<QuantityChangeInput>,
) -> impl IntoResponse {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let mode = if payload.read_only {
        CartMode::ReadOnly
    } else {
        CartMode::Interactive
    };
    let current = state.quantity_of(&session_id, &payload.product_id);

    let response = match plan_change(mode, current, payload.change) {
        Err(err) => {
            (StatusCode::FORBIDDEN, Json(json!({ "error": err.to_string() }))).into_response()
        }
        Ok(planned) => {
            if let Some(quantity) = planned {
                state.update_quantity(&session_id, &payload.product_id, quantity);
            }
            // A planner no-op still answers with the (unchanged) cart view.
            Json(build_view(&state, &session_id)).into_response()
        }
    };

    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: GET /cart/summary
/// Read-only order summary projection for the checkout view. A cart with
/// unresolved lines cannot be summarized; a corrupt total must never reach
/// checkout presentation.
async fn view_summary(State(state): State<SharedState>, headers: HeaderMap) -> impl IntoResponse {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let entries = state.entries(&session_id);
    let items = line_items_from(Some(&entries), &state.catalog);

    let response = match order_summary(&items) {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => {
            tracing::warn!(cart_id = %session_id, %err, "cart cannot be summarized");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    };

    with_session_cookie(response, &session_id, is_new_session)
}

/// Merges and prices the session's cart. When an unresolved line blocks
/// pricing, the view still carries the items; `total` stays empty and the
/// condition is logged for the catalog sync to catch up.
fn build_view(state: &SharedState, session_id: &str) -> CartView {
    let entries = state.entries(session_id);
    let items = line_items_from(Some(&entries), &state.catalog);

    let total = match cart_total(&items) {
        Ok(total) => Some(total),
        Err(err) => {
            tracing::warn!(cart_id = %session_id, %err, "cart total unavailable");
            None
        }
    };

    CartView {
        cart_id: session_id.to_string(),
        items,
        total,
    }
}

/// Attaches the session cookie to first-contact responses.
fn with_session_cookie(mut response: Response, session_id: &str, is_new_session: bool) -> Response {
    if is_new_session {
        let cookie_val = format!("cart_session={}; Path=/; HttpOnly", session_id);
        response
            .headers_mut()
            .insert(SET_COOKIE, cookie_val.parse().unwrap());
    }
    response
}
