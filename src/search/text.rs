//! Searchable-text construction and word tokenization.
//!
//! Every substring signal in the scorer runs against the same flattened,
//! lowercased rendering of a product's textual fields, built here.

use crate::catalog::Product;

/// Minimum token length kept by [`words`]; shorter tokens are noise.
pub const MIN_WORD_LEN: usize = 2;

/// Build the flattened, lowercase searchable string for a product.
///
/// Concatenates name, description, sku, product code, manufacturer, tags,
/// and attributes in a fixed order. Empty fields contribute nothing, so the
/// result is stable for sparse records, and calling this twice on the same
/// product yields the same string.
pub fn searchable_text(product: &Product) -> String {
    let mut parts: Vec<&str> = Vec::new();

    push_nonempty(&mut parts, &product.name);
    push_nonempty(&mut parts, &product.description);
    push_nonempty(&mut parts, &product.sku);
    push_nonempty(&mut parts, &product.product_code);
    push_nonempty(&mut parts, &product.manufacturer);

    for tag in &product.tags {
        push_nonempty(&mut parts, tag);
    }
    for attribute in &product.attributes {
        push_nonempty(&mut parts, &attribute.name);
        push_nonempty(&mut parts, &attribute.description);
    }

    parts.join(" ").to_lowercase()
}

/// Split text on whitespace into lowercase words, discarding tokens shorter
/// than [`MIN_WORD_LEN`].
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.len() >= MIN_WORD_LEN)
        .map(str::to_string)
        .collect()
}

fn push_nonempty<'a>(parts: &mut Vec<&'a str>, field: &'a str) {
    let field = field.trim();
    if !field.is_empty() {
        parts.push(field);
    }
}
