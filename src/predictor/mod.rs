//! Predictor facade: training, artifact loading and inference.
//!
//! A [`Predictor`] is either unloaded or holds a fitted [`DoshaModel`].
//! Loading failures leave it unloaded; callers report them and continue,
//! and every prediction on an unloaded predictor fails with
//! [`DoshaError::ModelNotLoaded`].
//!
//! ```rust,no_run
//! use dosha::config::ArtifactPaths;
//! use dosha::predictor::Predictor;
//!
//! # fn main() -> dosha::error::Result<()> {
//! let predictor = Predictor::from_artifacts(&ArtifactPaths::in_dir("models"));
//! let result = predictor.predict(&["dry skin".to_string(), "anxiety".to_string()])?;
//! println!("{} ({})", result.prediction, result.confidence);
//! # Ok(())
//! # }
//! ```

mod input;
mod model;
mod report;

pub use input::{clean_symptoms, parse_symptom_line};
pub use model::DoshaModel;
pub use report::TrainingReport;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::SymptomAnalyzer;
use crate::config::{ArtifactPaths, ModelConfig};
use crate::dataset::{TrainingRecord, label_counts, read_dataset};
use crate::dosha::{Label, Prediction};
use crate::error::{DoshaError, Result};
use crate::ml::forest::argmax;
use crate::ml::{ClassificationReport, ForestParams, RandomForest, TfIdfVectorizer, stratified_split};
use crate::recommendation::{Recommendation, recommend};

/// Minimum probability for the best label to count as a match.
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Confidence text reported with the no-match outcome.
pub const LOW_CONFIDENCE: &str = "Low confidence - symptoms don't clearly match known patterns";

/// Result of a single prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Prediction,
    /// `"NN.NN%"`, or [`LOW_CONFIDENCE`] for the no-match outcome.
    pub confidence: String,
    /// Probability per fitted label, in percent with two decimals.
    pub dosha_percentages: BTreeMap<String, f64>,
    /// The symptoms as supplied.
    pub symptoms_analyzed: Vec<String>,
    pub recommendation: Recommendation,
}

/// Two-state predictor.
#[derive(Debug, Default)]
pub enum Predictor {
    #[default]
    Unloaded,
    Loaded(Box<DoshaModel>),
}

impl Predictor {
    pub fn new() -> Self {
        Self::Unloaded
    }

    /// Try to load the artifacts, logging instead of failing when they are
    /// missing or unreadable.
    pub fn from_artifacts(paths: &ArtifactPaths) -> Self {
        let mut predictor = Self::Unloaded;
        if let Err(e) = predictor.load(paths) {
            if e.is_not_found() {
                log::warn!("Model files not found. Please train the model first.");
            } else {
                log::warn!("Failed to load model: {e}");
            }
        }
        predictor
    }

    /// Load both artifacts. On failure the current state is kept.
    pub fn load(&mut self, paths: &ArtifactPaths) -> Result<()> {
        let model = DoshaModel::load(paths)?;
        log::info!(
            "Model loaded successfully ({} classes, {} features)",
            model.classes().len(),
            model.vectorizer().vocabulary_size()
        );
        *self = Self::Loaded(Box::new(model));
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn model(&self) -> Option<&DoshaModel> {
        match self {
            Self::Loaded(model) => Some(model.as_ref()),
            Self::Unloaded => None,
        }
    }

    /// Train on a dataset CSV, persist the artifacts and load them back.
    pub fn train<P: AsRef<Path>>(
        &mut self,
        dataset_path: P,
        paths: &ArtifactPaths,
        config: &ModelConfig,
    ) -> Result<TrainingReport> {
        let records = read_dataset(dataset_path)?;
        let (model, report) = fit_model(&records, config)?;
        model.save(paths)?;
        self.load(paths)?;
        Ok(report)
    }

    /// Predict the dosha for a list of symptoms.
    ///
    /// An empty list is accepted and yields whatever the model makes of an
    /// all-zero feature vector.
    pub fn predict(&self, symptoms: &[String]) -> Result<PredictionResult> {
        let Self::Loaded(model) = self else {
            return Err(DoshaError::ModelNotLoaded);
        };

        let proba = model.predict_proba(&preprocess(symptoms))?;
        let classes = model.classes();

        let dosha_percentages = classes
            .iter()
            .zip(&proba)
            .map(|(label, p)| (label.clone(), round2(p * 100.0)))
            .collect();

        let best = argmax(&proba);
        let label = classes
            .get(best)
            .ok_or_else(|| DoshaError::model("classifier has no classes"))?;
        let (prediction, confidence) = resolve(label, proba[best])?;

        Ok(PredictionResult {
            prediction,
            confidence,
            dosha_percentages,
            symptoms_analyzed: symptoms.to_vec(),
            recommendation: recommend(prediction, symptoms),
        })
    }

    /// Predict every list independently, keeping the input order.
    pub fn predict_batch(&self, symptoms_list: &[Vec<String>]) -> Result<Vec<PredictionResult>> {
        symptoms_list
            .iter()
            .map(|symptoms| self.predict(symptoms))
            .collect()
    }
}

/// Space-join the symptoms and lower-case the result.
pub fn preprocess(symptoms: &[String]) -> String {
    symptoms.join(" ").to_lowercase()
}

/// Map the best label and its probability to the reported outcome.
///
/// Below [`CONFIDENCE_THRESHOLD`], or when the best label is `no_match`,
/// the outcome is [`Prediction::NoMatch`].
pub fn resolve(label: &str, probability: f64) -> Result<(Prediction, String)> {
    if probability < CONFIDENCE_THRESHOLD {
        return Ok((Prediction::NoMatch, LOW_CONFIDENCE.to_string()));
    }
    match label.parse::<Label>()? {
        Label::Dosha(dosha) => Ok((
            Prediction::Dosha(dosha),
            format!("{:.2}%", probability * 100.0),
        )),
        Label::NoMatch => Ok((Prediction::NoMatch, LOW_CONFIDENCE.to_string())),
    }
}

/// Fit the vectorizer on all records, then the forest on a stratified
/// training split, and evaluate on the rest.
pub fn fit_model(
    records: &[TrainingRecord],
    config: &ModelConfig,
) -> Result<(DoshaModel, TrainingReport)> {
    config.validate()?;
    if records.is_empty() {
        return Err(DoshaError::dataset("no training records"));
    }

    let documents: Vec<String> = records.iter().map(|r| r.symptoms.clone()).collect();
    let labels: Vec<String> = records.iter().map(|r| r.dosha.to_string()).collect();

    let mut vectorizer =
        TfIdfVectorizer::new(Arc::new(SymptomAnalyzer::new()?), config.max_features);
    let features = vectorizer.fit_transform(&documents)?;

    let (train_idx, test_idx) = stratified_split(&labels, config.test_size, config.random_state)?;
    let x_train: Vec<Vec<f64>> = train_idx.iter().map(|&i| features[i].clone()).collect();
    let y_train: Vec<String> = train_idx.iter().map(|&i| labels[i].clone()).collect();
    let x_test: Vec<Vec<f64>> = test_idx.iter().map(|&i| features[i].clone()).collect();
    let y_test: Vec<String> = test_idx.iter().map(|&i| labels[i].clone()).collect();

    log::info!(
        "Training on {} records, evaluating on {}",
        x_train.len(),
        x_test.len()
    );

    let forest = RandomForest::fit(&x_train, &y_train, &ForestParams::from(config))?;
    let y_pred = forest.predict_batch(&x_test)?;
    let evaluation = ClassificationReport::new(&y_test, &y_pred);

    log::info!("Held-out accuracy: {:.2}", evaluation.accuracy);

    let report = TrainingReport {
        accuracy: evaluation.accuracy,
        n_train: x_train.len(),
        n_test: x_test.len(),
        n_features: vectorizer.vocabulary_size(),
        classes: forest.classes().to_vec(),
        label_counts: label_counts(records),
        evaluation,
        trained_at: chrono::Utc::now(),
    };

    Ok((DoshaModel::new(vectorizer, forest), report))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
