//! Tokenizer shared by documents and queries
//!
//! Lowercases, splits on every non-alphanumeric character, drops
//! single-character tokens and English stop words.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
        "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
        "here", "hers", "herself", "him", "himself", "his", "how", "if", "in", "into", "is",
        "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not",
        "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
        "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
        "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
        "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
        "would", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Whether a lowercased term is on the stop list
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(term)
}

/// Split text into index terms, in order of appearance
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() > 1 && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        let tokens = tokenize("Kyoto, Japan: Fushimi-Inari!");
        assert_eq!(tokens, vec!["kyoto", "japan", "fushimi", "inari"]);
    }

    #[test]
    fn test_tokenize_removes_stop_words() {
        let tokens = tokenize("The city of temples and technology");
        assert_eq!(tokens, vec!["city", "temples", "technology"]);
    }

    #[test]
    fn test_only_stop_words() {
        assert!(tokenize("the of and").is_empty());
    }

    #[test]
    fn test_single_characters_dropped() {
        assert_eq!(tokenize("a b c 5 day trip"), vec!["day", "trip"]);
    }

    #[test]
    fn test_keeps_repeats() {
        assert_eq!(tokenize("sushi Sushi SUSHI"), vec!["sushi", "sushi", "sushi"]);
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(tokenize("Park Güell"), vec!["park", "güell"]);
    }
}
