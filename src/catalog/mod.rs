//! Product Catalog Domain Module
//!
//! The catalog is a read-only external source from the cart core's
//! perspective: it is loaded once at startup and only ever queried.

pub mod handlers;
pub mod models;

pub use handlers::routes;
pub use models::Product;
