//! TF-IDF vectorizer for text feature extraction.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::{DoshaError, Result};

/// Fitted parameters of a [`TfIdfVectorizer`].
///
/// This is what gets persisted; the analyzer is rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerState {
    /// Vocabulary: term -> column index. Columns follow term order.
    pub vocabulary: BTreeMap<String, usize>,
    /// Inverse document frequency for each column.
    pub idf: Vec<f64>,
    /// Upper bound on the vocabulary size used at fit time.
    pub max_features: usize,
    /// Total number of documents seen during training.
    pub n_documents: usize,
}

/// TF-IDF vectorizer for text feature extraction.
///
/// Keeps the `max_features` most frequent terms of the training corpus,
/// weights raw term counts by smoothed IDF and L2-normalizes every row.
pub struct TfIdfVectorizer {
    state: VectorizerState,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.state.vocabulary.len())
            .field("max_features", &self.state.max_features)
            .field("n_documents", &self.state.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>, max_features: usize) -> Self {
        Self {
            state: VectorizerState {
                vocabulary: BTreeMap::new(),
                idf: Vec::new(),
                max_features,
                n_documents: 0,
            },
            analyzer,
        }
    }

    /// Rebuild a fitted vectorizer from persisted state.
    pub fn from_state(state: VectorizerState, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        if state.vocabulary.len() != state.idf.len() {
            return Err(DoshaError::model(format!(
                "vectorizer state is inconsistent: {} terms but {} idf weights",
                state.vocabulary.len(),
                state.idf.len()
            )));
        }
        Ok(Self { state, analyzer })
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let mut term_frequency: AHashMap<String, usize> = AHashMap::new();
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = self.analyzer.terms(doc)?;
            let unique_tokens: HashSet<&String> = tokens.iter().collect();

            for token in unique_tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
            }
            for token in tokens {
                *term_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if term_frequency.is_empty() {
            return Err(DoshaError::model(
                "empty vocabulary; documents contain only stop words",
            ));
        }

        // Most frequent terms first, ties broken alphabetically.
        let mut ranked: Vec<(String, usize)> = term_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.state.max_features);

        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let n_documents = documents.len();
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(terms.len());
        for (idx, term) in terms.into_iter().enumerate() {
            let df = document_frequency.get(&term).copied().unwrap_or(0);
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        log::debug!(
            "Fitted TF-IDF vocabulary of {} terms over {} documents",
            vocabulary.len(),
            n_documents
        );

        self.state.vocabulary = vocabulary;
        self.state.idf = idf;
        self.state.n_documents = n_documents;

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Documents without any known term map to the zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let mut features = vec![0.0; self.state.vocabulary.len()];

        for token in self.analyzer.terms(document)? {
            if let Some(&idx) = self.state.vocabulary.get(&token) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.state.idf[idx];
        }

        let norm = features.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        Ok(features)
    }

    /// Transform many documents.
    pub fn transform_batch(&self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Fit on `documents`, then transform them.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        self.transform_batch(documents)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.state.vocabulary.len()
    }

    /// Terms in column order.
    pub fn feature_names(&self) -> Vec<&str> {
        // BTreeMap iteration is alphabetical, which is also column order.
        self.state.vocabulary.keys().map(String::as_str).collect()
    }

    /// Fitted parameters.
    pub fn state(&self) -> &VectorizerState {
        &self.state
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}
