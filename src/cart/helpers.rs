//! Shopping Cart Business Logic Helpers
//!
//! Pure functions that make up the cart core: merging raw cart entries
//! against the catalog, pricing the result, and projecting the read-only
//! order summary. No I/O, no shared state; each call works on the snapshots
//! it is handed.

use axum::http::HeaderMap;
use uuid::Uuid;

use super::models::{CartEntry, LineItem, OrderSummary, PricingError, SHIPPING_CHARGE};
use crate::catalog::Product;

/// Enriches raw cart entries with their catalog descriptions.
///
/// The result has the same length and order as `entries`. An entry whose
/// product id has no catalog match becomes [`LineItem::Unresolved`] rather
/// than an error; callers must tolerate entries added before the catalog
/// snapshot caught up.
///
/// `None` or an empty slice means the cart data simply is not there yet, so
/// the merge yields an empty list instead of failing.
pub fn line_items_from(entries: Option<&[CartEntry]>, catalog: &[Product]) -> Vec<LineItem> {
    let entries = match entries {
        Some(entries) if !entries.is_empty() => entries,
        // No cart data: early exit, not an error.
        _ => return Vec::new(),
    };

    entries
        .iter()
        .map(|entry| {
            match catalog.iter().find(|product| product.id == entry.product_id) {
                Some(product) => LineItem::Resolved {
                    product_id: entry.product_id.clone(),
                    name: product.name.clone(),
                    category: product.category.clone(),
                    cost: product.cost,
                    rating: product.rating,
                    image: product.image.clone(),
                    quantity: entry.quantity,
                },
                None => LineItem::Unresolved {
                    product_id: entry.product_id.clone(),
                    quantity: entry.quantity,
                },
            }
        })
        .collect()
}

/// Total value of all line items: sum of cost × quantity.
///
/// An unresolved line has no price; letting it through would corrupt the
/// total silently, so the aggregator rejects it and leaves the decision to
/// the caller. An empty list prices to 0.
pub fn cart_total(items: &[LineItem]) -> Result<u64, PricingError> {
    items.iter().try_fold(0u64, |acc, item| {
        let line = item.line_total().ok_or_else(|| PricingError::UnresolvedItem {
            product_id: item.product_id().to_string(),
        })?;
        Ok(acc + line)
    })
}

/// Read-only order summary projection: line count, subtotal, shipping and
/// grand total for the checkout view.
pub fn order_summary(items: &[LineItem]) -> Result<OrderSummary, PricingError> {
    let subtotal = cart_total(items)?;
    Ok(OrderSummary {
        item_count: items.len(),
        subtotal,
        shipping: SHIPPING_CHARGE,
        total: subtotal + SHIPPING_CHARGE,
    })
}

/// Extracts the `cart_session` cookie, minting a fresh id when absent.
///
/// Returns the session id and whether it was newly minted (so the handler
/// knows to set the cookie on the response).
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get(axum::http::header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                cookie
                    .trim()
                    .strip_prefix("cart_session=")
                    .map(|id| id.to_string())
            })
        });

    match existing {
        Some(id) if !id.is_empty() => (id, false),
        _ => (Uuid::new_v4().simple().to_string(), true),
    }
}
