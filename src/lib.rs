//! # Dosha
//!
//! Symptom-based Ayurvedic dosha classification.
//!
//! ## Features
//!
//! - Synthetic training corpus generation
//! - TF-IDF text features with an English stop-word analyzer
//! - Random forest classifier trained in parallel
//! - Confidence thresholding with a no-match outcome
//! - Per-dosha recommendations
//! - Command line, interactive and HTTP front ends

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod dosha;
pub mod error;
pub mod ml;
pub mod predictor;
pub mod recommendation;
pub mod selftest;
pub mod server;

pub mod prelude {
    pub use crate::config::{ArtifactPaths, ModelConfig};
    pub use crate::dosha::{Dosha, Label, Prediction};
    pub use crate::error::{DoshaError, Result};
    pub use crate::predictor::{PredictionResult, Predictor};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
