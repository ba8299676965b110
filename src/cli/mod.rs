//! Command Line Interface for dosha prediction.

pub mod args;
pub mod commands;
pub mod interactive;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use interactive::*;
pub use output::*;
