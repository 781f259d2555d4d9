//! Domain DTOs for the inventory API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Identifiers stay opaque strings on the client side: the server assigns
//! them and the client only ever compares them for equality.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single product returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub description: String,
    pub stock: u32,
    pub price: f64,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Request payload for creating or replacing a product. A `Product` without
/// its server-assigned `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProductData {
    pub description: String,
    pub stock: u32,
    pub price: f64,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Product {
    /// Strip the identity, e.g. to resubmit an edited product.
    pub fn data(&self) -> NewProductData {
        NewProductData {
            description: self.description.clone(),
            stock: self.stock,
            price: self.price,
            categories: self.categories.clone(),
        }
    }
}
