//! Symptom text analysis.
//!
//! ```text
//! Raw Text → RegexTokenizer → LowercaseFilter → StopFilter → Terms
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
