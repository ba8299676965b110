use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Turns a document into the terms the vectorizer counts.
///
/// Fitted vectorizers hold their analyzer behind an `Arc`, and loaded models
/// are shared across request handlers, hence `Send + Sync`.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;

    /// Collect the token texts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
