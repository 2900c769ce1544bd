//! Intelligent product search and relevance ranking.
//!
//! The pipeline is a pure, synchronous chain: flatten a product's fields
//! into a searchable string ([`text`]), pull a product-type phrase out of
//! conversational input ([`extract`]), expand phrase/keywords into
//! normalized terms ([`terms`]), score each candidate against the criteria
//! ([`scorer`]), then rank, threshold, and truncate ([`runner`]). Nothing
//! here holds state, so every function is safe to call concurrently.

pub mod extract;
pub mod runner;
pub mod scorer;
pub mod terms;
pub mod text;

pub use extract::{extract_product_phrase, ExtractedPhrase};
pub use runner::{
    related_products, search, SearchOptions, SearchQuery, DEFAULT_MIN_SCORE, DEFAULT_TOP_N,
};
pub use scorer::{score_product, SearchCriteria};
pub use terms::build_search_terms;
pub use text::searchable_text;

/// Build a [`SearchQuery`] from a conversational message.
///
/// Runs the phrase extractor over the message and normalizes any brand
/// keywords the caller recognized on its own, so plural brand forms
/// ("AlphaMeds") also match their singular catalog spelling. The resulting
/// query is empty when the message contains no product request and no
/// brands were supplied; [`search`] treats that as pass-through.
pub fn query_from_message(message: &str, brand_keywords: &[String]) -> SearchQuery {
    let extracted = extract_product_phrase(message);
    let keywords = build_search_terms("", &[], brand_keywords);

    SearchQuery {
        phrase: extracted.phrase,
        words: extracted.words,
        keywords,
    }
}
