//! Splitting raw text into tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// First stage of analysis.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}

pub mod regex;

pub use regex::RegexTokenizer;
