//! Product Catalog Models

use serde::{Deserialize, Serialize};

/// A product available to buy, as supplied by the catalog source.
///
/// Immutable from the cart core's perspective; the core only reads these
/// records when enriching raw cart entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// The name or title of the product
    pub name: String,

    /// The category that the product belongs to
    pub category: String,

    /// The price to buy the product, in the smallest currency unit
    pub cost: u64,

    /// Aggregate rating of the product (integer out of five)
    pub rating: u8,

    /// URL for the product image
    pub image: String,
}
