//! Weighted relevance scoring.
//!
//! A purely additive point system: every signal that qualifies contributes
//! its weight, higher totals rank higher, and nothing is normalized or
//! clamped. Callers threshold and sort on the raw value. The tiered
//! weights approximate a multi-field relevance function without an inverted
//! index, which is enough for catalogs of tens to low hundreds of products.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

use super::text::{searchable_text, words};

/// Scoring weights, named in one place so ranking can be tuned without
/// touching the scorer's control flow.
pub mod weights {
    /// Criteria-name word appears verbatim among product-name words.
    pub const EXACT_NAME_WORD: u32 = 100;
    /// At least one exact name-word overlap.
    pub const NAME_OVERLAP_BONUS: u32 = 80;
    /// Two or more exact name-word overlaps.
    pub const STRONG_NAME_OVERLAP_BONUS: u32 = 60;
    /// Full criteria name is a substring of the product name.
    pub const NAME_PHRASE: u32 = 120;
    /// Criteria-name word partially overlaps a product-name word.
    pub const PARTIAL_NAME_WORD: u32 = 40;
    /// Keyword found in the searchable text, primary pass.
    pub const KEYWORD: u32 = 50;
    /// Category strings equal, case-insensitive.
    pub const CATEGORY_EXACT: u32 = 30;
    /// Shared category word when the category strings differ.
    pub const CATEGORY_WORD: u32 = 15;
    /// Criteria tag present among product tags.
    pub const TAG: u32 = 25;
    /// At least one tag overlap.
    pub const TAG_OVERLAP_BONUS: u32 = 20;
    /// Criteria-name word found among description words.
    pub const DESCRIPTION_WORD: u32 = 20;
    /// Full criteria name is a substring of the description.
    pub const DESCRIPTION_PHRASE: u32 = 30;
    /// Manufacturer strings equal, case-insensitive.
    pub const MANUFACTURER_EXACT: u32 = 15;
    /// Full criteria name found in the searchable text.
    pub const SEARCHABLE_PHRASE: u32 = 25;
    /// Keyword found in the searchable text, secondary pass.
    pub const KEYWORD_SECONDARY: u32 = 10;
}

/// The criteria bundle a product is scored against.
///
/// Built fresh for every query and discarded when the call returns. Every
/// field defaults to empty; empty fields contribute nothing to the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Product-type phrase to match (e.g. "BP machine").
    pub name: String,
    /// Optional category signal.
    pub category: String,
    /// Optional exact-match manufacturer signal.
    pub manufacturer: String,
    /// Optional tag-overlap signal.
    pub tags: Vec<String>,
    /// Auxiliary terms (brand names, extracted nouns) matched as substrings
    /// of the searchable text.
    pub keywords: Vec<String>,
}

/// Compute the relevance score of one product against one criteria bundle.
///
/// Deterministic and total: missing product fields degrade to zero
/// contributions, and an empty criteria scores every product 0.
pub fn score_product(product: &Product, criteria: &SearchCriteria) -> u32 {
    let mut score = 0u32;

    let criteria_name = criteria.name.trim().to_lowercase();
    let criteria_words = words(&criteria_name);
    let product_name = product.name.to_lowercase();
    let name_words = words(&product.name);
    let searchable = searchable_text(product);

    // Name-word overlap, the dominant signal tier.
    let mut exact_matches = 0usize;
    for word in &criteria_words {
        if name_words.contains(word) {
            score += weights::EXACT_NAME_WORD;
            exact_matches += 1;
        }
    }
    if exact_matches >= 1 {
        score += weights::NAME_OVERLAP_BONUS;
    }
    if exact_matches >= 2 {
        score += weights::STRONG_NAME_OVERLAP_BONUS;
    }

    if !criteria_name.is_empty() && product_name.contains(&criteria_name) {
        score += weights::NAME_PHRASE;
    }

    // Partial overlap for criteria words without an exact name match.
    for word in &criteria_words {
        if name_words.contains(word) {
            continue;
        }
        let partial = name_words
            .iter()
            .any(|name_word| name_word.contains(word.as_str()) || word.contains(name_word.as_str()));
        if partial {
            score += weights::PARTIAL_NAME_WORD;
        }
    }

    // Keywords against the searchable text, primary pass.
    for keyword in &criteria.keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && searchable.contains(&keyword) {
            score += weights::KEYWORD;
        }
    }

    score += category_score(product, criteria);
    score += tag_score(product, criteria);

    // Description signals.
    let description = product.description.to_lowercase();
    let description_words = words(&description);
    for word in &criteria_words {
        if description_words.contains(word) {
            score += weights::DESCRIPTION_WORD;
        }
    }
    if !criteria_name.is_empty() && description.contains(&criteria_name) {
        score += weights::DESCRIPTION_PHRASE;
    }

    let criteria_manufacturer = criteria.manufacturer.trim();
    if !criteria_manufacturer.is_empty()
        && criteria_manufacturer.eq_ignore_ascii_case(product.manufacturer.trim())
    {
        score += weights::MANUFACTURER_EXACT;
    }

    if !criteria_name.is_empty() && searchable.contains(&criteria_name) {
        score += weights::SEARCHABLE_PHRASE;
    }
    // Same substring test as the primary keyword pass, at a lower weight.
    // Existing callers rank against the combined value, so both passes stay.
    for keyword in &criteria.keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && searchable.contains(&keyword) {
            score += weights::KEYWORD_SECONDARY;
        }
    }

    score
}

fn category_score(product: &Product, criteria: &SearchCriteria) -> u32 {
    let criteria_category = criteria.category.trim().to_lowercase();
    let product_category = product.category_text().trim().to_lowercase();
    if criteria_category.is_empty() || product_category.is_empty() {
        return 0;
    }
    if criteria_category == product_category {
        return weights::CATEGORY_EXACT;
    }

    // Distinct words shared by the two category strings.
    let product_words = words(&product_category);
    let mut shared: Vec<String> = Vec::new();
    for word in words(&criteria_category) {
        if product_words.contains(&word) && !shared.contains(&word) {
            shared.push(word);
        }
    }
    shared.len() as u32 * weights::CATEGORY_WORD
}

fn tag_score(product: &Product, criteria: &SearchCriteria) -> u32 {
    if criteria.tags.is_empty() || product.tags.is_empty() {
        return 0;
    }

    let product_tags: Vec<String> = product
        .tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .collect();

    let mut overlap = 0u32;
    for tag in &criteria.tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && product_tags.contains(&tag) {
            overlap += 1;
        }
    }

    if overlap == 0 {
        0
    } else {
        overlap * weights::TAG + weights::TAG_OVERLAP_BONUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp_machine() -> Product {
        Product {
            name: "BP Machine Pro".to_string(),
            description: "blood pressure monitor by AlphaMed".to_string(),
            ..Default::default()
        }
    }

    fn criteria_named(name: &str) -> SearchCriteria {
        SearchCriteria {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_strong_name_match_with_keyword() {
        let criteria = SearchCriteria {
            name: "BP machine".to_string(),
            keywords: vec!["AlphaMed".to_string()],
            ..Default::default()
        };

        let expected = weights::EXACT_NAME_WORD * 2
            + weights::NAME_OVERLAP_BONUS
            + weights::STRONG_NAME_OVERLAP_BONUS
            + weights::NAME_PHRASE
            + weights::KEYWORD
            + weights::SEARCHABLE_PHRASE
            + weights::KEYWORD_SECONDARY;
        let score = score_product(&bp_machine(), &criteria);
        assert_eq!(score, expected);
        assert!(score > 300);
    }

    #[test]
    fn test_unrelated_product_scores_zero() {
        let product = Product {
            name: "Thermometer".to_string(),
            ..Default::default()
        };
        assert_eq!(score_product(&product, &criteria_named("BP machine")), 0);
    }

    #[test]
    fn test_empty_criteria_scores_zero() {
        assert_eq!(score_product(&bp_machine(), &SearchCriteria::default()), 0);
    }

    #[test]
    fn test_empty_product_scores_zero() {
        let criteria = SearchCriteria {
            name: "BP machine".to_string(),
            category: "Medical Devices".to_string(),
            manufacturer: "AlphaMed".to_string(),
            tags: vec!["health".to_string()],
            keywords: vec!["alphamed".to_string()],
            ..Default::default()
        };
        assert_eq!(score_product(&Product::default(), &criteria), 0);
    }

    #[test]
    fn test_partial_word_overlap() {
        let product = Product {
            name: "Machine".to_string(),
            ..Default::default()
        };
        // "machines" contains "machine" but is not an exact word match.
        assert_eq!(
            score_product(&product, &criteria_named("machines")),
            weights::PARTIAL_NAME_WORD
        );
    }

    #[test]
    fn test_category_exact_match() {
        let product = Product {
            category: "Medical Devices".to_string(),
            ..Default::default()
        };
        let criteria = SearchCriteria {
            category: "medical devices".to_string(),
            ..Default::default()
        };
        assert_eq!(score_product(&product, &criteria), weights::CATEGORY_EXACT);
    }

    #[test]
    fn test_category_partial_match_shares_words() {
        let product = Product {
            category_name: "Medical Devices".to_string(),
            ..Default::default()
        };
        let criteria = SearchCriteria {
            category: "Medical Equipment".to_string(),
            ..Default::default()
        };
        assert_eq!(score_product(&product, &criteria), weights::CATEGORY_WORD);
    }

    #[test]
    fn test_tag_overlap_with_bonus() {
        let product = Product {
            tags: vec!["Health".to_string(), "monitoring".to_string()],
            ..Default::default()
        };
        let criteria = SearchCriteria {
            tags: vec!["health".to_string(), "MONITORING".to_string()],
            ..Default::default()
        };
        assert_eq!(
            score_product(&product, &criteria),
            weights::TAG * 2 + weights::TAG_OVERLAP_BONUS
        );
    }

    #[test]
    fn test_description_word_and_phrase_hits() {
        let product = Product {
            description: "Measures blood pressure automatically".to_string(),
            ..Default::default()
        };
        let score = score_product(&product, &criteria_named("blood pressure"));
        assert_eq!(
            score,
            weights::DESCRIPTION_WORD * 2
                + weights::DESCRIPTION_PHRASE
                + weights::SEARCHABLE_PHRASE
        );
    }

    #[test]
    fn test_manufacturer_exact_match_is_case_insensitive() {
        let product = Product {
            manufacturer: "AlphaMed".to_string(),
            ..Default::default()
        };
        let criteria = SearchCriteria {
            manufacturer: "alphamed".to_string(),
            ..Default::default()
        };
        assert_eq!(
            score_product(&product, &criteria),
            weights::MANUFACTURER_EXACT
        );
    }

    #[test]
    fn test_keyword_counts_in_both_passes() {
        let product = Product {
            name: "Nitrile Gloves".to_string(),
            ..Default::default()
        };
        let criteria = SearchCriteria {
            keywords: vec!["nitrile".to_string()],
            ..Default::default()
        };
        assert_eq!(
            score_product(&product, &criteria),
            weights::KEYWORD + weights::KEYWORD_SECONDARY
        );
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let product = bp_machine();
        let criteria = SearchCriteria {
            name: "BP machine".to_string(),
            keywords: vec!["AlphaMed".to_string()],
            ..Default::default()
        };
        assert_eq!(
            score_product(&product, &criteria),
            score_product(&product, &criteria)
        );
    }
}
