//! Analyzer for symptom documents.
//!
//! ```
//! use dosha::analysis::analyzer::{Analyzer, SymptomAnalyzer};
//!
//! let analyzer = SymptomAnalyzer::new().unwrap();
//! assert_eq!(analyzer.terms("Cough with Mucus").unwrap(), vec!["cough", "mucus"]);
//! ```

use std::fmt;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Word tokenizer, lowercasing, then English stop-word removal.
pub struct SymptomAnalyzer {
    tokenizer: RegexTokenizer,
    filters: Vec<Box<dyn Filter>>,
}

impl SymptomAnalyzer {
    pub fn new() -> Result<Self> {
        let mut analyzer = Self::without_stop_words()?;
        analyzer.filters.push(Box::new(StopFilter::english()));
        Ok(analyzer)
    }

    /// Keeps function words such as "with" and "in".
    pub fn without_stop_words() -> Result<Self> {
        Ok(SymptomAnalyzer {
            tokenizer: RegexTokenizer::new()?,
            filters: vec![Box::new(LowercaseFilter)],
        })
    }

    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl Analyzer for SymptomAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &'static str {
        "symptom"
    }
}

impl fmt::Debug for SymptomAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymptomAnalyzer")
            .field("pattern", &self.tokenizer.pattern())
            .field("filters", &self.filter_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_and_case() {
        let analyzer = SymptomAnalyzer::new().unwrap();
        assert_eq!(
            analyzer.terms("Pain in the Joints and Dry Skin").unwrap(),
            vec!["pain", "joints", "dry", "skin"]
        );
        assert_eq!(analyzer.filter_names(), vec!["lowercase", "stop"]);
    }

    #[test]
    fn test_without_stop_words() {
        let analyzer = SymptomAnalyzer::without_stop_words().unwrap();
        assert_eq!(
            analyzer.terms("Cough WITH Mucus").unwrap(),
            vec!["cough", "with", "mucus"]
        );
    }

    #[test]
    fn test_capitalized_stop_words_are_removed() {
        // Lowercasing runs before the stop list.
        let analyzer = SymptomAnalyzer::new().unwrap();
        assert_eq!(analyzer.terms("THE Heat").unwrap(), vec!["heat"]);
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        let analyzer = SymptomAnalyzer::new().unwrap();
        assert!(analyzer.terms("").unwrap().is_empty());
        assert!(analyzer.terms("a, b, c").unwrap().is_empty());
    }
}
