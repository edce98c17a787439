//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartEntry, LineItem, inputs, responses)
//! - The pure cart core (catalog merge, pricing, order summary)
//! - The quantity-mutation contract
//! - Application state management (the in-process cart store)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod mutation;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use helpers::{cart_total, line_items_from, order_summary};
pub use models::{CartEntry, CartView, LineItem, OrderSummary, PricingError};
pub use mutation::{plan_change, requested_quantity, CartMode, MutationError, QuantityChange};
pub use state::{AppState, SharedState};
