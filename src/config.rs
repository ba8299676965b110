//! Training configuration and artifact locations.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DoshaError, Result};

/// File name of the serialized classifier.
pub const CLASSIFIER_FILE: &str = "ayurvedic_classifier.bin";
/// File name of the serialized vectorizer.
pub const VECTORIZER_FILE: &str = "symptoms_vectorizer.bin";
/// Default file name of the generated dataset.
pub const DATASET_FILE: &str = "symptoms_dataset.csv";

/// Hyper-parameters for training the vectorizer and the forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Vocabulary bound: the most frequent terms kept by the vectorizer.
    pub max_features: usize,
    /// Number of trees in the forest.
    pub n_estimators: usize,
    /// Minimum number of samples required to split an internal node.
    pub min_samples_split: usize,
    /// Seed for the train/test split and tree bootstraps.
    pub random_state: u64,
    /// Fraction of records held out for evaluation.
    pub test_size: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_features: 1000,
            n_estimators: 100,
            min_samples_split: 2,
            random_state: 42,
            test_size: 0.2,
        }
    }
}

impl ModelConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ModelConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can drive a training run.
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(DoshaError::invalid_config("max_features must be positive"));
        }
        if self.n_estimators == 0 {
            return Err(DoshaError::invalid_config("n_estimators must be positive"));
        }
        if self.min_samples_split < 2 {
            return Err(DoshaError::invalid_config(
                "min_samples_split must be at least 2",
            ));
        }
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(DoshaError::invalid_config(
                "test_size must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Paths of the two training artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub classifier: PathBuf,
    pub vectorizer: PathBuf,
}

impl ArtifactPaths {
    /// Artifacts with their default file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            classifier: dir.join(CLASSIFIER_FILE),
            vectorizer: dir.join(VECTORIZER_FILE),
        }
    }

    /// Whether both files are present.
    pub fn exist(&self) -> bool {
        self.classifier.exists() && self.vectorizer.exists()
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
