//! Storefront Cart Library
//!
//! This library provides the cart reconciliation and pricing core for a
//! storefront backend: merging raw carts against the product catalog,
//! computing totals, and the quantity-mutation contract shared by the
//! editable cart view and the read-only order summary.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod session;

// Infrastructure
pub mod router;
