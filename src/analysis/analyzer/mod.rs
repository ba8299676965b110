//! Analyzers: a tokenizer followed by filters.

mod analyzer;
mod symptom;

pub use analyzer::Analyzer;
pub use symptom::SymptomAnalyzer;
