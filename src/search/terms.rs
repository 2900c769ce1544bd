//! Search term expansion.

use super::text::MIN_WORD_LEN;

/// Keywords longer than this get a singular variant when they end in "s".
const PLURAL_MIN_LEN: usize = 3;

/// Expand a phrase, its words, and auxiliary keywords into a deduplicated
/// list of normalized search terms.
///
/// Terms are lowercased, trimmed, and at least two characters long;
/// insertion order is preserved so the output is deterministic. Keywords
/// ending in "s" also contribute their singular form, because users
/// pluralize brand and product names inconsistently ("AlphaMeds" must match
/// a catalog that says "AlphaMed").
pub fn build_search_terms(phrase: &str, words: &[String], keywords: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    push_term(&mut terms, phrase);
    for word in words {
        push_term(&mut terms, word);
    }
    for keyword in keywords {
        push_term(&mut terms, keyword);
        let keyword = keyword.trim().to_lowercase();
        if keyword.len() >= PLURAL_MIN_LEN {
            if let Some(singular) = keyword.strip_suffix('s') {
                push_term(&mut terms, singular);
            }
        }
    }

    terms
}

fn push_term(terms: &mut Vec<String>, raw: &str) {
    let term = raw.trim().to_lowercase();
    if term.len() >= MIN_WORD_LEN && !terms.contains(&term) {
        terms.push(term);
    }
}
