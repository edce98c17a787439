//! Shopping Cart State Management
//!
//! This module owns the in-process cart store (the write boundary the
//! mutation contract delegates to) and catalog loading at startup.

use dashmap::DashMap;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::models::CartEntry;
use crate::catalog::Product;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the catalog snapshot and all live carts.
pub struct AppState {
    /// In-memory storage for raw carts, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Vec<CartEntry>>,

    /// Catalog snapshot, read-only after startup.
    pub catalog: Vec<Product>,
}

impl AppState {
    /// Creates a new AppState with no carts and the given catalog.
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            carts: DashMap::new(),
            catalog,
        }
    }

    /// Snapshot of a cart's raw entries; empty when the cart does not exist.
    pub fn entries(&self, cart_id: &str) -> Vec<CartEntry> {
        self.carts
            .get(cart_id)
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Current quantity of one product in a cart, `None` when absent.
    pub fn quantity_of(&self, cart_id: &str, product_id: &str) -> Option<u32> {
        self.carts.get(cart_id).and_then(|entries| {
            entries
                .iter()
                .find(|entry| entry.product_id == product_id)
                .map(|entry| entry.quantity)
        })
    }

    /// Commits an absolute quantity for one product and returns the
    /// refreshed entry list.
    ///
    /// A quantity of 0 removes the entry entirely; a zero-quantity entry
    /// never survives a commit. Unknown product ids with a positive quantity
    /// are inserted.
    pub fn update_quantity(
        &self,
        cart_id: &str,
        product_id: &str,
        quantity: u32,
    ) -> Vec<CartEntry> {
        let mut entries = self.carts.entry(cart_id.to_string()).or_default();

        if quantity == 0 {
            entries.retain(|entry| entry.product_id != product_id);
        } else if let Some(existing) = entries
            .iter_mut()
            .find(|entry| entry.product_id == product_id)
        {
            existing.quantity = quantity;
        } else {
            entries.push(CartEntry {
                product_id: product_id.to_string(),
                quantity,
            });
        }

        entries.clone()
    }
}

// =============================================================================
// Catalog Loading
// =============================================================================

/// Attempts to locate the assets directory using a multi-step strategy
fn locate_assets_directory(current_dir: &Path) -> PathBuf {
    // Strategy to locate assets:
    // 1. ./assets
    // 2. ../assets (if running from a subdir)
    // 3. Fallback to "assets" relative path

    if current_dir.join("assets").exists() {
        return current_dir.join("assets");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("assets").exists() {
            return parent.join("assets");
        }
    }

    PathBuf::from("assets") // Fallback
}

/// Reads the catalog from `assets/catalog.json`.
///
/// A missing or malformed file degrades to an empty catalog with a warning;
/// the server still starts and every cart entry merges as unresolved until a
/// catalog is supplied.
pub async fn load_catalog() -> Vec<Product> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let path = locate_assets_directory(&current_dir).join("catalog.json");

    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(%err, path = %path.display(), "catalog file unavailable, starting with an empty catalog");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!(%err, path = %path.display(), "catalog file is malformed, starting with an empty catalog");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_quantity_inserts_updates_and_removes() {
        let state = AppState::new(Vec::new());

        let entries = state.update_quantity("cart-1", "p1", 2);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 2);

        let entries = state.update_quantity("cart-1", "p1", 5);
        assert_eq!(entries[0].quantity, 5);
        assert_eq!(state.quantity_of("cart-1", "p1"), Some(5));

        let entries = state.update_quantity("cart-1", "p1", 0);
        assert!(entries.is_empty());
        assert_eq!(state.quantity_of("cart-1", "p1"), None);
    }

    #[test]
    fn zero_quantity_never_materializes() {
        let state = AppState::new(Vec::new());

        // Removing a product that was never added leaves no trace either.
        let entries = state.update_quantity("cart-1", "ghost", 0);
        assert!(entries.is_empty());
        assert!(state.entries("cart-1").iter().all(|e| e.quantity > 0));
    }

    #[test]
    fn carts_are_isolated_by_id() {
        let state = AppState::new(Vec::new());
        state.update_quantity("cart-1", "p1", 1);
        state.update_quantity("cart-2", "p2", 3);

        assert_eq!(state.quantity_of("cart-1", "p2"), None);
        assert_eq!(state.quantity_of("cart-2", "p2"), Some(3));
    }
}
