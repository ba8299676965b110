//! Machine learning components of the prediction pipeline.
//!
//! # Architecture
//!
//! - [`TfIdfVectorizer`]: feature extraction over analyzed symptom text
//! - [`RandomForest`]: bagged CART trees producing class probabilities
//! - [`evaluation`]: stratified split, accuracy and per-class report
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dosha::analysis::SymptomAnalyzer;
//! use dosha::ml::{ForestParams, RandomForest, TfIdfVectorizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let documents = vec!["dry skin anxiety".to_string(), "acidity anger".to_string()];
//! let labels = vec!["vata".to_string(), "pitta".to_string()];
//!
//! let mut vectorizer = TfIdfVectorizer::new(Arc::new(SymptomAnalyzer::new()?), 1000);
//! let features = vectorizer.fit_transform(&documents)?;
//! let forest = RandomForest::fit(&features, &labels, &ForestParams::default())?;
//!
//! let probabilities = forest.predict_proba(&vectorizer.transform("anxiety")?)?;
//! # Ok(())
//! # }
//! ```

pub mod evaluation;
pub mod forest;
pub mod tfidf;

pub use evaluation::{ClassMetrics, ClassificationReport, accuracy, stratified_split};
pub use forest::{ClassifierState, DecisionTree, ForestParams, RandomForest, TreeNode};
pub use tfidf::{TfIdfVectorizer, VectorizerState};
