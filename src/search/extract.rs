//! Conversational phrase extraction.
//!
//! Pulls a candidate product-type phrase out of free-form chat text
//! ("do you have a BP machine by AlphaMed" -> "BP machine"). Rule-based and
//! deterministic: an ordered list of trigger patterns is tried in priority
//! order, the first rule that matches wins, and within a rule the first
//! match in the text is used. No match is not an error; callers treat the
//! empty result as "no query".

use once_cell::sync::Lazy;
use regex::Regex;

use serde::Serialize;

use super::text::MIN_WORD_LEN;

/// Trigger phrases that introduce a product request, in priority order.
const TRIGGER_PHRASES: &[&str] = &[
    "do you have",
    "looking for",
    "find me",
    "show me",
    "i need",
    "search for",
    "any",
    "products like",
];

/// Words that terminate a captured phrase ("BP machine **by** AlphaMed").
const BOUNDARY_WORDS: &[&str] = &["by", "from", "with"];

/// Filler words dropped when splitting an extracted phrase into match words.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "you", "have", "with", "from", "that", "this",
];

// One compiled rule per trigger. The capture is 3-60 alphanumeric, space, or
// hyphen characters, ended by a boundary word, punctuation, or end of input;
// a leading article is consumed so "a BP machine" captures as "BP machine".
static PHRASE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    let boundary = BOUNDARY_WORDS.join("|");
    TRIGGER_PHRASES
        .iter()
        .map(|trigger| {
            let pattern = format!(
                r"(?i)\b{trigger}\s+(?:(?:a|an|the|some)\s+)?([0-9a-z][0-9a-z \-]{{2,59}}?)(?:\s+(?:{boundary})\b|[.,!?;:]|$)"
            );
            Regex::new(&pattern).expect("trigger rule must compile")
        })
        .collect()
});

/// A product-type phrase extracted from conversational text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedPhrase {
    /// The captured phrase, trimmed, original casing preserved.
    pub phrase: String,
    /// Lowercase significant words of the phrase (stopwords and
    /// single-character tokens removed).
    pub words: Vec<String>,
}

impl ExtractedPhrase {
    /// True when no trigger rule matched the input.
    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty() && self.words.is_empty()
    }
}

/// Extract a product-type phrase and its significant words from free text.
///
/// Returns the empty [`ExtractedPhrase`] when no trigger rule matches. When
/// stopword filtering would leave no words for a non-empty phrase, the whole
/// lowercased phrase is kept as the single match word so phrase-level
/// matching still has a term to work with.
pub fn extract_product_phrase(text: &str) -> ExtractedPhrase {
    for rule in PHRASE_RULES.iter() {
        let Some(captures) = rule.captures(text) else {
            continue;
        };
        let Some(capture) = captures.get(1) else {
            continue;
        };

        let phrase = capture.as_str().trim().to_string();
        if phrase.is_empty() {
            continue;
        }

        let mut words: Vec<String> = phrase
            .to_lowercase()
            .split_whitespace()
            .filter(|word| word.len() >= MIN_WORD_LEN && !STOP_WORDS.contains(word))
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            words.push(phrase.to_lowercase());
        }

        return ExtractedPhrase { phrase, words };
    }

    ExtractedPhrase::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_phrase_before_boundary_word() {
        let result = extract_product_phrase("do you have a BP machine by AlphaMed");
        assert_eq!(result.phrase, "BP machine");
        assert_eq!(result.words, vec!["bp", "machine"]);
    }

    #[test]
    fn test_no_trigger_yields_empty_result() {
        let result = extract_product_phrase("hello, how are you");
        assert_eq!(result, ExtractedPhrase::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_phrase_ends_at_punctuation() {
        let result = extract_product_phrase("do you have gauze?");
        assert_eq!(result.phrase, "gauze");
        assert_eq!(result.words, vec!["gauze"]);
    }

    #[test]
    fn test_phrase_ends_at_end_of_input() {
        let result = extract_product_phrase("I'm looking for blood pressure monitors");
        assert_eq!(result.phrase, "blood pressure monitors");
        assert_eq!(result.words, vec!["blood", "pressure", "monitors"]);
    }

    #[test]
    fn test_rule_priority_beats_text_order() {
        // "any" appears first in the text, but "looking for" is the
        // higher-priority rule and wins.
        let result = extract_product_phrase("any luck? I am looking for a BP machine");
        assert_eq!(result.phrase, "BP machine");
    }

    #[test]
    fn test_hyphenated_phrase_is_kept() {
        let result = extract_product_phrase("find me an x-ray apron");
        assert_eq!(result.phrase, "x-ray apron");
        assert_eq!(result.words, vec!["x-ray", "apron"]);
    }

    #[test]
    fn test_stopword_only_phrase_falls_back_to_whole_phrase() {
        let result = extract_product_phrase("show me this and that");
        assert_eq!(result.phrase, "this and that");
        assert_eq!(result.words, vec!["this and that"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "do you have any nitrile gloves from MedCo";
        assert_eq!(extract_product_phrase(text), extract_product_phrase(text));
    }

    #[test]
    fn test_stopwords_filtered_from_words() {
        let result = extract_product_phrase("search for bandages and gauze");
        assert_eq!(result.phrase, "bandages and gauze");
        assert_eq!(result.words, vec!["bandages", "gauze"]);
    }
}
