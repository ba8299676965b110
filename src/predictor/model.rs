//! Fitted vectorizer and forest, with artifact persistence.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::analysis::analyzer::SymptomAnalyzer;
use crate::config::ArtifactPaths;
use crate::error::Result;
use crate::ml::{ClassifierState, RandomForest, TfIdfVectorizer, VectorizerState};

/// A trained model: text features plus the classifier over them.
#[derive(Debug)]
pub struct DoshaModel {
    vectorizer: TfIdfVectorizer,
    forest: RandomForest,
}

impl DoshaModel {
    pub fn new(vectorizer: TfIdfVectorizer, forest: RandomForest) -> Self {
        Self { vectorizer, forest }
    }

    /// Read both artifacts. Fails if either is missing or unreadable.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let forest: ClassifierState = read_artifact(&paths.classifier)?;
        let state: VectorizerState = read_artifact(&paths.vectorizer)?;
        let vectorizer = TfIdfVectorizer::from_state(state, Arc::new(SymptomAnalyzer::new()?))?;
        Ok(Self { vectorizer, forest })
    }

    /// Write both artifacts, creating the parent directories.
    pub fn save(&self, paths: &ArtifactPaths) -> Result<()> {
        write_artifact(&paths.classifier, &self.forest)?;
        write_artifact(&paths.vectorizer, self.vectorizer.state())?;
        log::info!(
            "Model and vectorizer saved to {} and {}",
            paths.classifier.display(),
            paths.vectorizer.display()
        );
        Ok(())
    }

    /// Class probabilities for preprocessed text, in class order.
    pub fn predict_proba(&self, text: &str) -> Result<Vec<f64>> {
        let features = self.vectorizer.transform(text)?;
        self.forest.predict_proba(&features)
    }

    pub fn classes(&self) -> &[String] {
        self.forest.classes()
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn forest(&self) -> &RandomForest {
        &self.forest
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
