//! Storelens - weighted relevance search for storefront product catalogs
//!
//! A small, stateless library: given product records from the storefront's
//! document store and a free-text or conversational query, it scores every
//! candidate against weighted match signals and returns the top results in
//! descending relevance order.

pub mod catalog;
pub mod error;
pub mod search;

pub use catalog::{load_catalog, Product, ProductAttribute};
pub use error::{Result, StorelensError};
