#![allow(dead_code)]

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use dosha::config::{ArtifactPaths, ModelConfig};
use dosha::dataset::{DatasetGenerator, TrainingRecord, expert_records, write_dataset};
use dosha::predictor::{Predictor, TrainingReport};

const DATASET_SEED: u64 = 0;

/// The dataset `dosha-train` writes by default, from a fixed seed.
pub fn generated_records() -> Vec<TrainingRecord> {
    DatasetGenerator::new(StdRng::seed_from_u64(DATASET_SEED)).create_comprehensive()
}

/// The generated dataset plus the curated cases, as with `--with-expert-cases`.
pub fn records_with_expert_cases() -> Vec<TrainingRecord> {
    let mut records = generated_records();
    records.extend(expert_records());
    records
}

/// Train on the generated dataset in `dir` and return the loaded predictor.
pub fn train_in(dir: &Path) -> (Predictor, ArtifactPaths, TrainingReport) {
    train_on(dir, &generated_records())
}

pub fn train_on(dir: &Path, records: &[TrainingRecord]) -> (Predictor, ArtifactPaths, TrainingReport) {
    let dataset = dir.join("symptoms_dataset.csv");
    write_dataset(&dataset, records).unwrap();

    let paths = ArtifactPaths::in_dir(dir.join("model"));
    let mut predictor = Predictor::new();
    let report = predictor
        .train(&dataset, &paths, &ModelConfig::default())
        .unwrap();
    (predictor, paths, report)
}

pub fn symptoms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
