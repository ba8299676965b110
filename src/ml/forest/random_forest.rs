//! Bagged ensemble of [`DecisionTree`]s.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::tree::{DecisionTree, TreeParams};
use crate::config::ModelConfig;
use crate::error::{DoshaError, Result};

/// Training parameters for a [`RandomForest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub min_samples_split: usize,
    /// Features examined per split. `None` means `sqrt(n_features)`.
    pub max_features: Option<usize>,
    /// Draw each tree's rows with replacement.
    pub bootstrap: bool,
    /// Tree `i` is grown from the seed `random_state + i`.
    pub random_state: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            min_samples_split: 2,
            max_features: None,
            bootstrap: true,
            random_state: 42,
        }
    }
}

impl From<&ModelConfig> for ForestParams {
    fn from(config: &ModelConfig) -> Self {
        Self {
            n_estimators: config.n_estimators,
            min_samples_split: config.min_samples_split,
            random_state: config.random_state,
            ..Self::default()
        }
    }
}

/// Random forest classifier over dense feature vectors.
///
/// Class names are kept sorted; probability vectors follow that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    classes: Vec<String>,
    n_features: usize,
    trees: Vec<DecisionTree>,
}

/// Persisted form of the fitted classifier.
pub type ClassifierState = RandomForest;

impl RandomForest {
    /// Fit a forest on feature rows and their labels.
    ///
    /// Trees are grown in parallel, each from its own seeded generator, so
    /// the result does not depend on the thread count.
    pub fn fit(features: &[Vec<f64>], labels: &[String], params: &ForestParams) -> Result<Self> {
        if features.is_empty() {
            return Err(DoshaError::model("cannot fit a forest on zero samples"));
        }
        if features.len() != labels.len() {
            return Err(DoshaError::model(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if params.n_estimators == 0 {
            return Err(DoshaError::invalid_config("n_estimators must be positive"));
        }

        let n_features = features[0].len();
        if features.iter().any(|row| row.len() != n_features) {
            return Err(DoshaError::model("feature rows differ in length"));
        }

        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let targets: Vec<usize> = labels
            .iter()
            .map(|label| classes.binary_search(label).unwrap_or_default())
            .collect();

        let sqrt_features = (n_features as f64).sqrt() as usize;
        let tree_params = TreeParams {
            max_features: params
                .max_features
                .unwrap_or(sqrt_features)
                .clamp(1, n_features.max(1)),
            min_samples_split: params.min_samples_split,
        };

        log::debug!(
            "Growing {} trees over {} samples, {} features, {} classes",
            params.n_estimators,
            features.len(),
            n_features,
            classes.len()
        );

        let n_samples = features.len();
        let n_classes = classes.len();
        let trees = (0..params.n_estimators)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(params.random_state.wrapping_add(i as u64));
                let samples: Vec<usize> = if params.bootstrap {
                    (0..n_samples)
                        .map(|_| rng.random_range(0..n_samples))
                        .collect()
                } else {
                    (0..n_samples).collect()
                };
                DecisionTree::fit(features, &targets, &samples, n_classes, &tree_params, &mut rng)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            classes,
            n_features,
            trees,
        })
    }

    /// Class probabilities for one feature vector, averaged over all trees.
    pub fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.n_features {
            return Err(DoshaError::model(format!(
                "expected {} features, got {}",
                self.n_features,
                x.len()
            )));
        }

        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (acc, p) in proba.iter_mut().zip(tree.predict_proba(x)) {
                *acc += p;
            }
        }
        let n_trees = self.trees.len() as f64;
        for p in &mut proba {
            *p /= n_trees;
        }
        Ok(proba)
    }

    /// Most probable class. Ties go to the class that sorts first.
    pub fn predict(&self, x: &[f64]) -> Result<&str> {
        let proba = self.predict_proba(x)?;
        let best = argmax(&proba);
        Ok(&self.classes[best])
    }

    /// Predict many rows in parallel.
    pub fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<String>> {
        rows.par_iter()
            .map(|row| self.predict(row).map(str::to_string))
            .collect()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_estimators(&self) -> usize {
        self.trees.len()
    }
}

/// Index of the first maximum.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}
