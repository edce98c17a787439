//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain, along with the error types the cart core can surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mutation::QuantityChange;

// =============================================================================
// Constants
// =============================================================================

/// Flat shipping charge applied by the order summary, in the smallest
/// currency unit. Free shipping in the current scope.
pub const SHIPPING_CHARGE: u64 = 0;

/// Returns the default quantity (1) for cart entries
fn default_quantity() -> u32 {
    1
}

// =============================================================================
// Cart Domain Models
// =============================================================================

/// The minimal persisted representation of a product in a cart.
///
/// This is the shape the cart store owns; everything richer is derived by
/// merging against the catalog. A quantity of 0 is only ever a removal
/// request on the wire and never appears in a materialized cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Identifier of the product this entry refers to
    pub product_id: String,

    /// Quantity of this product (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// A cart entry enriched with its catalog description, or tagged as
/// unresolved when the catalog has no matching product.
///
/// The explicit tag forces consumers to handle the unresolved case instead
/// of reading half-populated fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LineItem {
    /// Entry matched against the catalog; carries the full product record.
    #[serde(rename_all = "camelCase")]
    Resolved {
        product_id: String,
        name: String,
        category: String,
        /// Price in the smallest currency unit
        cost: u64,
        rating: u8,
        image: String,
        quantity: u32,
    },

    /// Entry whose product id has no catalog match yet (e.g. added before
    /// the catalog snapshot caught up).
    #[serde(rename_all = "camelCase")]
    Unresolved { product_id: String, quantity: u32 },
}

impl LineItem {
    /// Identifier of the product this line refers to.
    pub fn product_id(&self) -> &str {
        match self {
            LineItem::Resolved { product_id, .. } => product_id,
            LineItem::Unresolved { product_id, .. } => product_id,
        }
    }

    /// Quantity carried over from the raw cart entry.
    pub fn quantity(&self) -> u32 {
        match self {
            LineItem::Resolved { quantity, .. } => *quantity,
            LineItem::Unresolved { quantity, .. } => *quantity,
        }
    }

    /// cost × quantity, or `None` when the line has no catalog match and
    /// therefore no price.
    pub fn line_total(&self) -> Option<u64> {
        match self {
            LineItem::Resolved { cost, quantity, .. } => Some(cost * u64::from(*quantity)),
            LineItem::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, LineItem::Resolved { .. })
    }
}

/// Derived scalars for the read-only order summary view.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Number of distinct lines in the cart
    pub item_count: usize,

    /// Sum of cost × quantity over all lines
    pub subtotal: u64,

    /// Flat shipping charge (currently always 0)
    pub shipping: u64,

    /// subtotal + shipping
    pub total: u64,
}

// =============================================================================
// Wire Inputs / Responses
// =============================================================================

/// Input for the absolute-quantity cart write.
///
/// A quantity of 0 means "remove this product from the cart".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartInput {
    pub product_id: String,
    pub quantity: u32,
}

/// Input for a quantity-mutation request (increment / decrement).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityChangeInput {
    pub product_id: String,

    /// Which direction to move the quantity
    pub change: QuantityChange,

    /// Display mode of the requesting view; read-only views may not mutate
    #[serde(default)]
    pub read_only: bool,
}

/// Response for cart read and write operations: the merged line items plus
/// the cart total.
///
/// `total` is `None` when the cart contains unresolved lines that cannot be
/// priced; the editable cart view still renders, the caller decides how to
/// surface the gap.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Cart identifier
    pub cart_id: String,

    /// Line items in raw-cart order
    pub items: Vec<LineItem>,

    /// Cart total, absent while any line is unresolved
    pub total: Option<u64>,
}

// =============================================================================
// Errors
// =============================================================================

/// Failure to price a line item list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A line reached the aggregator without a catalog match; pricing it
    /// would silently corrupt the total, so it is rejected instead.
    #[error("cart entry for product {product_id} has no catalog match")]
    UnresolvedItem { product_id: String },
}
