//! Outcome of a training run.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ml::ClassificationReport;

/// Training statistics and held-out evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Accuracy on the held-out split.
    pub accuracy: f64,
    pub n_train: usize,
    pub n_test: usize,
    /// Vocabulary size of the fitted vectorizer.
    pub n_features: usize,
    /// Fitted labels, sorted.
    pub classes: Vec<String>,
    /// Records per label in the whole dataset.
    pub label_counts: BTreeMap<String, usize>,
    pub evaluation: ClassificationReport,
    pub trained_at: DateTime<Utc>,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model trained successfully!")?;
        writeln!(f, "Accuracy: {:.2}", self.accuracy)?;
        writeln!(
            f,
            "Samples: {} train / {} test, {} features",
            self.n_train, self.n_test, self.n_features
        )?;
        writeln!(f)?;
        writeln!(f, "Classification Report:")?;
        write!(f, "{}", self.evaluation)
    }
}
