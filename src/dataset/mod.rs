//! Synthetic training data.
//!
//! - [`corpus`]: hand-authored symptom lists per dosha plus the unrelated
//!   injury/disease list
//! - [`generator`]: randomized sampling of labeled records
//! - [`record`]: the CSV record type and file I/O

pub mod corpus;
pub mod generator;
pub mod record;

pub use generator::{DatasetGenerator, expert_records};
pub use record::{TrainingRecord, label_counts, read_dataset, write_dataset};
