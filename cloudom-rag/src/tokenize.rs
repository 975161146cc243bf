//! Term normalization shared by queries and documents.
//!
//! Text is lower-cased, every character outside `[a-z0-9]` acts as a
//! separator, and tokens outside the configured length bounds are dropped.

use std::collections::HashSet;

use crate::config::{DEFAULT_MAX_TERM_LEN, DEFAULT_MIN_TERM_LEN, RetrievalConfig};

/// Splits text into normalized terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_len: usize,
    max_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { min_len: DEFAULT_MIN_TERM_LEN, max_len: DEFAULT_MAX_TERM_LEN }
    }
}

impl Tokenizer {
    /// Create a tokenizer keeping tokens whose length lies in `min_len..=max_len`.
    ///
    /// Empty tokens are never kept, so a `min_len` of zero behaves like one.
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len: min_len.max(1), max_len }
    }

    /// Create a tokenizer from the term bounds of a [`RetrievalConfig`].
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.min_term_len, config.max_term_len)
    }

    /// Tokenize `text` in order, keeping duplicates.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
            .filter(|token| (self.min_len..=self.max_len).contains(&token.len()))
            .map(str::to_owned)
            .collect()
    }

    /// Tokenize `text` into a set; repeated terms collapse.
    pub fn term_set(&self, text: &str) -> HashSet<String> {
        self.tokens(text).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        let tokens = Tokenizer::default().tokens("UI/UX Design: Mobile-App!");
        assert_eq!(tokens, vec!["ui", "ux", "design", "mobile", "app"]);
    }

    #[test]
    fn drops_short_and_long_tokens() {
        let long = "x".repeat(33);
        let text = format!("a an {long} {}", "y".repeat(32));
        let tokens = Tokenizer::default().tokens(&text);
        assert_eq!(tokens, vec!["an".to_string(), "y".repeat(32)]);
    }

    #[test]
    fn non_ascii_letters_act_as_separators() {
        let tokens = Tokenizer::default().tokens("café price €2,000");
        assert_eq!(tokens, vec!["caf", "price", "000"]);
    }

    #[test]
    fn empty_and_symbol_only_input_yield_nothing() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokens("").is_empty());
        assert!(tokenizer.tokens("?! -- ...").is_empty());
    }

    #[test]
    fn zero_min_len_never_yields_empty_tokens() {
        let tokens = Tokenizer::new(0, 32).tokens("a,, b");
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn term_set_collapses_duplicates() {
        let set = Tokenizer::default().term_set("app app APP apps");
        assert_eq!(set.len(), 2);
        assert!(set.contains("app"));
        assert!(set.contains("apps"));
    }
}
