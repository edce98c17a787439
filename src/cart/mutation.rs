//! Quantity Mutation Contract
//!
//! Pure planning logic for quantity changes. These functions only decide the
//! quantity that should be requested from the cart store; committing it (and
//! interpreting 0 as removal) is the store's job. Keeping the planner free of
//! I/O lets the same contract back both the editable cart view and the
//! read-only order summary.

use serde::Deserialize;
use thiserror::Error;

/// Direction of a user-requested quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityChange {
    Increment,
    Decrement,
}

/// Display/interaction mode of the view issuing the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartMode {
    /// Full interactive mode: + / - transitions are available.
    Interactive,
    /// Quantity is a static label; every transition is rejected.
    ReadOnly,
}

/// Rejected quantity mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("cart is in read-only mode; quantity changes are disabled")]
    ReadOnlyCart,
}

/// Computes the quantity to request from the cart store for a change against
/// the current state of one product.
///
/// * `current` is the entry's present quantity, or `None` when the product is
///   not in the cart.
/// * Returns `Some(new_quantity)` to forward to the store (0 means "remove"),
///   or `None` when the change is a no-op (decrementing an absent entry).
pub fn requested_quantity(current: Option<u32>, change: QuantityChange) -> Option<u32> {
    match (current, change) {
        (Some(quantity), QuantityChange::Increment) => Some(quantity.saturating_add(1)),
        (None, QuantityChange::Increment) => Some(1),
        (Some(quantity), QuantityChange::Decrement) if quantity > 1 => Some(quantity - 1),
        // Quantity 1: request removal, never a zero-quantity entry.
        (Some(_), QuantityChange::Decrement) => Some(0),
        // Nothing to decrement; must not go negative.
        (None, QuantityChange::Decrement) => None,
    }
}

/// Mode-gated planner: rejects every transition in read-only mode, otherwise
/// delegates to [`requested_quantity`].
pub fn plan_change(
    mode: CartMode,
    current: Option<u32>,
    change: QuantityChange,
) -> Result<Option<u32>, MutationError> {
    match mode {
        CartMode::ReadOnly => Err(MutationError::ReadOnlyCart),
        CartMode::Interactive => Ok(requested_quantity(current, change)),
    }
}
