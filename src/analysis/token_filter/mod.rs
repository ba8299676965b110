//! Token stream transformations applied after tokenizing.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A stage that rewrites or drops tokens.
pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
