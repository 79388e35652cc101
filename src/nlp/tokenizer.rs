//! Whitespace tokenization
//!
//! Splits raw text into word tokens on whitespace boundaries. No sub-token
//! splitting is performed; punctuation stays attached to its word and is
//! filtered later by the collocation pattern rules.

/// A whitespace tokenizer with optional lowercasing
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Whether to lowercase tokens during tokenization
    lowercase: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer that preserves case
    pub fn new() -> Self {
        Self { lowercase: false }
    }

    /// Set whether tokens are lowercased
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Split text into word tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let tokens = Tokenizer::new().tokenize("the quick brown fox");
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_collapses_runs_of_whitespace() {
        let tokens = Tokenizer::new().tokenize("  one \t two\nthree  ");
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_lowercasing() {
        let tokens = Tokenizer::new()
            .with_lowercase(true)
            .tokenize("New York City");
        assert_eq!(tokens, vec!["new", "york", "city"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::new().tokenize("").is_empty());
        assert!(Tokenizer::new().tokenize("   ").is_empty());
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let tokens = Tokenizer::new().tokenize("hello, world.");
        assert_eq!(tokens, vec!["hello,", "world."]);
    }
}
