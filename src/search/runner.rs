//! Search orchestration: score, rank, filter, truncate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;

use super::scorer::{score_product, SearchCriteria};

/// Default cap on returned results.
pub const DEFAULT_TOP_N: usize = 50;
/// Default minimum relevance score for a product to qualify.
pub const DEFAULT_MIN_SCORE: u32 = 20;

/// A search request as supplied by a caller: a raw or extracted phrase, its
/// significant words, and any auxiliary keywords.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Product-type phrase.
    pub phrase: String,
    /// Significant words of the phrase.
    pub words: Vec<String>,
    /// Auxiliary keywords (brand names, extracted nouns).
    pub keywords: Vec<String>,
}

impl SearchQuery {
    /// Query for a raw string typed into a search bar.
    pub fn from_text(query: &str) -> Self {
        Self {
            phrase: query.trim().to_string(),
            ..Default::default()
        }
    }

    /// True when there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.phrase.trim().is_empty() && self.words.is_empty() && self.keywords.is_empty()
    }
}

/// Ranking limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of results returned.
    pub top_n: usize,
    /// Minimum relevance score a result must reach.
    pub min_score: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

// Working-set entry; the score never leaves this module.
struct ScoredProduct {
    score: u32,
    product: Product,
}

/// Run a relevance search over a product collection.
///
/// An empty query passes the collection through untouched, in order. For a
/// non-empty query every product is scored, the working set is stably
/// sorted by descending score, entries below `min_score` are dropped, and
/// the first `top_n` survivors are returned as plain products. The input
/// slice is never mutated.
pub fn search(products: &[Product], query: &SearchQuery, options: &SearchOptions) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }

    let criteria = SearchCriteria {
        name: query.phrase.clone(),
        keywords: query.keywords.clone(),
        ..Default::default()
    };

    let mut scored: Vec<ScoredProduct> = products
        .iter()
        .map(|product| ScoredProduct {
            score: score_product(product, &criteria),
            product: product.clone(),
        })
        .collect();

    // Stable sort of the full working set; filtering happens afterwards so
    // that equal-score survivors keep their original relative order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let results: Vec<Product> = scored
        .into_iter()
        .filter(|entry| entry.score >= options.min_score)
        .take(options.top_n)
        .map(|entry| entry.product)
        .collect();

    debug!(
        phrase = %query.phrase,
        keywords = query.keywords.len(),
        candidates = products.len(),
        kept = results.len(),
        "search complete"
    );

    results
}

/// Rank products related to a reference product.
///
/// The criteria come from the reference itself (name, category,
/// manufacturer, tags) instead of free text. The reference is excluded from
/// the candidates, matched by SKU when both sides have one, otherwise by
/// name. Only products with a nonzero score are returned.
pub fn related_products(products: &[Product], reference: &Product, top_n: usize) -> Vec<Product> {
    let criteria = SearchCriteria {
        name: reference.name.clone(),
        category: reference.category_text().to_string(),
        manufacturer: reference.manufacturer.clone(),
        tags: reference.tags.clone(),
        keywords: Vec::new(),
    };

    let mut scored: Vec<ScoredProduct> = products
        .iter()
        .filter(|candidate| !is_same_product(candidate, reference))
        .map(|product| ScoredProduct {
            score: score_product(product, &criteria),
            product: product.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored
        .into_iter()
        .filter(|entry| entry.score > 0)
        .take(top_n)
        .map(|entry| entry.product)
        .collect()
}

fn is_same_product(a: &Product, b: &Product) -> bool {
    if !a.sku.is_empty() && !b.sku.is_empty() {
        a.sku == b.sku
    } else {
        !a.name.is_empty() && a.name.eq_ignore_ascii_case(&b.name)
    }
}
