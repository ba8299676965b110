//! Case folding.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lower-cases every token.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| token.map_text(str::to_lowercase))))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
