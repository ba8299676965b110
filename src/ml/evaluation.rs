//! Held-out evaluation: stratified splitting and classification metrics.

use std::collections::BTreeMap;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{DoshaError, Result};

/// Split row indices into `(train, test)` preserving label proportions.
///
/// Each label contributes `round(count * test_size)` rows to the test set,
/// bounded so both sides keep at least one row of it. Labels with a single
/// row cannot be stratified and are rejected.
pub fn stratified_split(
    labels: &[String],
    test_size: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(DoshaError::invalid_argument(
            "test_size must be between 0 and 1",
        ));
    }

    let mut by_label: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, label) in labels.iter().enumerate() {
        by_label.entry(label.as_str()).or_default().push(idx);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::with_capacity(labels.len());
    let mut test = Vec::new();

    for (label, mut indices) in by_label {
        if indices.len() < 2 {
            return Err(DoshaError::dataset(format!(
                "label '{label}' has only {} record; at least 2 are needed to stratify",
                indices.len()
            )));
        }
        indices.shuffle(&mut rng);

        let n_test = ((indices.len() as f64 * test_size).round() as usize)
            .clamp(1, indices.len() - 1);
        test.extend_from_slice(&indices[..n_test]);
        train.extend_from_slice(&indices[n_test..]);
    }

    train.shuffle(&mut rng);
    test.shuffle(&mut rng);
    Ok((train, test))
}

/// Fraction of positions where `predicted` equals `actual`.
pub fn accuracy(actual: &[String], predicted: &[String]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let correct = actual
        .iter()
        .zip(predicted)
        .filter(|(a, p)| a == p)
        .count();
    correct as f64 / actual.len() as f64
}

/// Metrics of one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Rows whose true label is this class.
    pub support: usize,
}

/// Per-class precision, recall and F1 with overall accuracy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub total: usize,
}

impl ClassificationReport {
    /// Build a report over the union of labels seen in either sequence.
    pub fn new(actual: &[String], predicted: &[String]) -> Self {
        let mut labels: Vec<&str> = actual
            .iter()
            .chain(predicted)
            .map(String::as_str)
            .collect();
        labels.sort_unstable();
        labels.dedup();

        let classes = labels
            .into_iter()
            .map(|label| {
                let mut tp = 0usize;
                let mut fp = 0usize;
                let mut fn_ = 0usize;
                for (a, p) in actual.iter().zip(predicted) {
                    match (a == label, p == label) {
                        (true, true) => tp += 1,
                        (false, true) => fp += 1,
                        (true, false) => fn_ += 1,
                        (false, false) => {}
                    }
                }

                let precision = ratio(tp, tp + fp);
                let recall = ratio(tp, tp + fn_);
                let f1 = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };

                ClassMetrics {
                    label: label.to_string(),
                    precision,
                    recall,
                    f1,
                    support: tp + fn_,
                }
            })
            .collect();

        Self {
            classes,
            accuracy: accuracy(actual, predicted),
            total: actual.len(),
        }
    }

    pub fn class(&self, label: &str) -> Option<&ClassMetrics> {
        self.classes.iter().find(|c| c.label == label)
    }

    /// Unweighted mean of per-class F1.
    pub fn macro_f1(&self) -> f64 {
        if self.classes.is_empty() {
            return 0.0;
        }
        self.classes.iter().map(|c| c.f1).sum::<f64>() / self.classes.len() as f64
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for c in &self.classes {
            writeln!(
                f,
                "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                c.label, c.precision, c.recall, c.f1, c.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy", "", "", self.accuracy, self.total
        )?;
        write!(
            f,
            "{:>12} {:>10} {:>10} {:>10.2} {:>10}",
            "macro avg", "", "", self.macro_f1(), self.total
        )
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
