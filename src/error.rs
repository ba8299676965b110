//! Error types for the dosha library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`DoshaError`] enum. Constructor helpers keep call sites short.
//!
//! # Examples
//!
//! ```
//! use dosha::error::{DoshaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DoshaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for dosha operations.
#[derive(Error, Debug)]
pub enum DoshaError {
    /// I/O errors (artifact files, dataset files, report files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dataset-related errors (empty or malformed training data)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Model fitting or inference errors
    #[error("Model error: {0}")]
    Model(String),

    /// Prediction requested before a model was loaded or trained
    #[error("Model not loaded. Please load model first.")]
    ModelNotLoaded,

    /// Artifacts absent from the model directory
    #[error("Model not found in {}. Run dosha-train first to train the model.", .0.display())]
    ModelNotFound(PathBuf),

    /// Binary artifact (de)serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Rejected input, such as a blank symptom list
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Out-of-range training parameters
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Ad-hoc failures raised with `anyhow!`
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DoshaError.
pub type Result<T> = std::result::Result<T, DoshaError>;

impl DoshaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DoshaError::Analysis(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        DoshaError::Dataset(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        DoshaError::Model(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DoshaError::InvalidArgument(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DoshaError::Config(msg.into())
    }

    /// Whether this error means a file was missing on disk.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DoshaError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}
