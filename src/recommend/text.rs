// Text helpers for keyword matching
//
// Everything is lexical: lower-cased substring checks and a simple tokenizer.

use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;

// Anything that isn't an ASCII word char or whitespace becomes a space
const NON_WORD: &str = r"[^A-Za-z0-9_\s]";

/// First vocabulary entry found in `text`, if any
pub fn find_any<'v>(text: &str, vocabulary: &'v [String]) -> Option<&'v str> {
    vocabulary
        .iter()
        .find(|word| text.contains(word.as_str()))
        .map(String::as_str)
}

pub fn contains_any(text: &str, vocabulary: &[String]) -> bool {
    find_any(text, vocabulary).is_some()
}

/// Splits card text into significant tokens
pub struct Tokenizer {
    non_word: Regex,
    stop_words: HashSet<String>,
    min_len: usize,
}

impl Tokenizer {
    pub fn new(stop_words: &[String], min_len: usize) -> Result<Self> {
        Ok(Self {
            non_word: Regex::new(NON_WORD)?,
            stop_words: stop_words.iter().cloned().collect(),
            min_len,
        })
    }

    /// Tokens in order of appearance, duplicates kept
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = self.non_word.replace_all(text, " ");

        cleaned
            .split_whitespace()
            .filter(|w| w.chars().count() >= self.min_len && !self.stop_words.contains(*w))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelatedCardsConfig;

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_find_any() {
        let v = vocab(&["asap", "working on"]);
        assert_eq!(find_any("please fix asap", &v), Some("asap"));
        assert_eq!(find_any("i am working on it", &v), Some("working on"));
        assert_eq!(find_any("nothing here", &v), None);
        assert!(!contains_any("", &v));
    }

    #[test]
    fn test_tokenize_strips_punctuation_and_stop_words() {
        let config = RelatedCardsConfig::default();
        let tokenizer = Tokenizer::new(&config.stop_words, config.min_token_len).unwrap();

        let tokens = tokenizer.tokenize("fix the login-page: users can't log in!");
        assert_eq!(tokens, vec!["fix", "login", "page", "users", "can", "log"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates_and_underscores() {
        let tokenizer = Tokenizer::new(&[], 3).unwrap();
        let tokens = tokenizer.tokenize("api_key api_key ok");
        assert_eq!(tokens, vec!["api_key", "api_key"]);
    }

    #[test]
    fn test_tokenize_drops_non_ascii_letters() {
        let tokenizer = Tokenizer::new(&[], 3).unwrap();
        // é is not an ASCII word char, so "café" splits into "caf"
        assert_eq!(tokenizer.tokenize("café menu"), vec!["caf", "menu"]);
    }
}
