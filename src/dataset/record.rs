//! Training record type and CSV persistence.
//!
//! ```csv
//! symptoms,dosha,num_symptoms,mixed
//! dry skin anxiety,vata,2,
//! acidity congestion anger,pitta,3,true
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dosha::Label;
use crate::error::{DoshaError, Result};

/// One labeled row of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Space-joined symptom text.
    pub symptoms: String,
    /// Dosha label, or `no_match`.
    pub dosha: Label,
    /// Number of symptoms sampled into the text.
    pub num_symptoms: usize,
    /// Set on records mixing two doshas.
    #[serde(default)]
    pub mixed: Option<bool>,
}

impl TrainingRecord {
    pub fn new<S: Into<String>>(symptoms: S, dosha: Label, num_symptoms: usize) -> Self {
        Self {
            symptoms: symptoms.into(),
            dosha,
            num_symptoms,
            mixed: None,
        }
    }

    pub fn mixed(mut self) -> Self {
        self.mixed = Some(true);
        self
    }

    pub fn is_mixed(&self) -> bool {
        self.mixed.unwrap_or(false)
    }
}

/// Write records to a CSV file with a header row.
pub fn write_dataset<P: AsRef<Path>>(path: P, records: &[TrainingRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    log::info!(
        "Wrote {} records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read records from a CSV file written by [`write_dataset`].
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<TrainingRecord>, csv::Error>>()?;

    if records.is_empty() {
        return Err(DoshaError::dataset(format!(
            "{} contains no records",
            path.as_ref().display()
        )));
    }

    log::info!(
        "Dataset loaded successfully with {} records",
        records.len()
    );
    Ok(records)
}

/// Count records per label.
pub fn label_counts(records: &[TrainingRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.dosha.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dosha::Dosha;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");
        let records = vec![
            TrainingRecord::new("dry skin anxiety", Label::Dosha(Dosha::Vata), 2),
            TrainingRecord::new("acidity congestion anger", Label::Dosha(Dosha::Pitta), 3).mixed(),
            TrainingRecord::new("broken bone", Label::NoMatch, 1),
        ];

        write_dataset(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("symptoms,dosha,num_symptoms,mixed"));
        assert!(content.contains("broken bone,no_match,1,"));

        let loaded = read_dataset(&path).unwrap();
        assert_eq!(loaded, records);
        assert!(loaded[1].is_mixed());
        assert!(!loaded[0].is_mixed());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_dataset("/nonexistent/dataset.csv").unwrap_err();
        assert!(matches!(err, DoshaError::Csv(_)));
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "symptoms,dosha,num_symptoms,mixed\nfoo,tridosha,1,\n").unwrap();

        assert!(read_dataset(&path).is_err());
    }

    #[test]
    fn test_label_counts() {
        let records = vec![
            TrainingRecord::new("a b", Label::Dosha(Dosha::Vata), 2),
            TrainingRecord::new("c d", Label::Dosha(Dosha::Vata), 2),
            TrainingRecord::new("e", Label::NoMatch, 1),
        ];
        let counts = label_counts(&records);
        assert_eq!(counts["vata"], 2);
        assert_eq!(counts["no_match"], 1);
    }
}
