//! Regex word tokenizer.

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{DoshaError, Result};

/// Words of two or more word characters; single letters are ignored.
pub const WORD_PATTERN: &str = r"\b\w\w+\b";

/// Emits one token per regex match.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Tokenizer over [`WORD_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| DoshaError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(RegexTokenizer { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, m)| Token::at(m.as_str(), position, m.start()))
            .collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        RegexTokenizer::new()
            .unwrap()
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_positions_and_offsets() {
        let tokens: Vec<Token> = RegexTokenizer::new()
            .unwrap()
            .tokenize("dry skin")
            .unwrap()
            .collect();
        assert_eq!(tokens, vec![Token::at("dry", 0, 0), Token::at("skin", 1, 4)]);
    }

    #[test]
    fn test_single_characters_are_skipped() {
        assert_eq!(texts("vitamin b deficiency, x"), vec!["vitamin", "deficiency"]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(texts("cough-with_mucus!"), vec!["cough", "with_mucus"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("(").is_err());
    }
}
