//! Product catalog records.
//!
//! Products are owned by the storefront's document store; this crate only
//! reads them. Field names follow the store's camelCase documents
//! (`productCode`, `categoryName`), and every field defaults to empty so a
//! sparse record deserializes and scores without special-casing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorelensError};

/// A single named attribute on a product (e.g. cuff size, battery type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAttribute {
    /// Attribute name.
    pub name: String,
    /// Attribute description or value.
    pub description: String,
}

/// A catalog product record, read-only to the search core.
///
/// Absent fields are empty strings/vectors, never `None`, so scoring
/// degrades to zero contributions instead of branching on presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Human-readable title.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Stock-keeping unit identifier.
    pub sku: String,
    /// Secondary product identifier.
    pub product_code: String,
    /// Manufacturer or brand name.
    pub manufacturer: String,
    /// Category identifier.
    pub category: String,
    /// Display category label (some records carry this instead of `category`).
    pub category_name: String,
    /// Free-form tags, matched case-insensitively.
    pub tags: Vec<String>,
    /// Structured attributes.
    pub attributes: Vec<ProductAttribute>,
}

impl Product {
    /// The category string used for matching: `category` when set,
    /// otherwise `categoryName`.
    pub fn category_text(&self) -> &str {
        if !self.category.is_empty() {
            &self.category
        } else {
            &self.category_name
        }
    }
}

/// Load a product catalog from a JSON file containing an array of products.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let raw = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw).map_err(|e| {
        StorelensError::Catalog(format!("{} is not a product array: {}", path.display(), e))
    })?;
    Ok(products)
}
