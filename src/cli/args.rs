//! Command line argument parsing for the dosha CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  dosha --symptoms \"dry skin\" \"anxiety\" \"joint pain\"
  dosha -s \"acidity\" \"anger\" \"burning sensation\"
  dosha --interactive
  dosha --info

Doshas:
  VATA (Vatham):  Air & Space - Movement, nervous system
  PITTA (Pitham): Fire & Water - Metabolism, digestion
  KAPHA (Kapham): Water & Earth - Structure, immunity";

/// Dosha - predict the dominant Ayurvedic dosha from symptoms
#[derive(Parser, Debug, Clone)]
#[command(name = "dosha")]
#[command(about = "Ayurvedic health monitoring: predict doshas from symptoms")]
#[command(disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
pub struct DoshaArgs {
    /// List of symptoms to analyze
    #[arg(short, long, num_args = 1.., value_name = "SYMPTOM")]
    pub symptoms: Vec<String>,

    /// Run in interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Show information about doshas
    #[arg(long)]
    pub info: bool,

    /// Show version information
    #[arg(long)]
    pub version: bool,

    /// Directory holding the trained model artifacts
    #[arg(long, env = "DOSHA_MODEL_DIR", default_value = ".", value_name = "DIR")]
    pub model_dir: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl DoshaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// What the invocation asks for, in order of precedence.
    pub fn mode(&self) -> Mode {
        if self.version {
            Mode::Version
        } else if self.info {
            Mode::Info
        } else if self.interactive {
            Mode::Interactive
        } else if !self.symptoms.is_empty() {
            Mode::Predict(self.symptoms.clone())
        } else {
            Mode::HelpThenInteractive
        }
    }
}

/// Action selected by the command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Version,
    Info,
    Interactive,
    Predict(Vec<String>),
    /// No action flag: print the help text, then start the console.
    HelpThenInteractive,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    #[default]
    Human,
    /// JSON format
    Json,
}

/// Verbosity to log level, shared by every binary.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error, // Quiet mode
        1 => log::LevelFilter::Warn,  // Default
        2 => log::LevelFilter::Info,  // Verbose
        _ => log::LevelFilter::Debug, // Very verbose (3+)
    }
}

/// Initialize `env_logger` with the `[LEVEL] message` format.
pub fn init_logger(verbosity: u8) {
    use std::io::Write;

    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptoms_flag() {
        let args =
            DoshaArgs::try_parse_from(["dosha", "-s", "dry skin", "anxiety", "joint pain"]).unwrap();
        assert_eq!(args.symptoms, vec!["dry skin", "anxiety", "joint pain"]);
        assert_eq!(
            args.mode(),
            Mode::Predict(vec![
                "dry skin".to_string(),
                "anxiety".to_string(),
                "joint pain".to_string()
            ])
        );
    }

    #[test]
    fn test_mode_precedence() {
        let args = DoshaArgs::try_parse_from(["dosha", "--info", "-i"]).unwrap();
        assert_eq!(args.mode(), Mode::Info);

        let args = DoshaArgs::try_parse_from(["dosha", "--version", "--info"]).unwrap();
        assert_eq!(args.mode(), Mode::Version);

        let args = DoshaArgs::try_parse_from(["dosha", "-i", "-s", "anger"]).unwrap();
        assert_eq!(args.mode(), Mode::Interactive);

        let args = DoshaArgs::try_parse_from(["dosha"]).unwrap();
        assert_eq!(args.mode(), Mode::HelpThenInteractive);
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = DoshaArgs::try_parse_from(["dosha"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = DoshaArgs::try_parse_from(["dosha", "-vv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = DoshaArgs::try_parse_from(["dosha", "--quiet", "-vvv"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0), log::LevelFilter::Error);
        assert_eq!(log_level(1), log::LevelFilter::Warn);
        assert_eq!(log_level(2), log::LevelFilter::Info);
        assert_eq!(log_level(5), log::LevelFilter::Debug);
    }

    #[test]
    fn test_output_format() {
        let args = DoshaArgs::try_parse_from(["dosha", "--format", "json"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);

        let args = DoshaArgs::try_parse_from(["dosha"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_model_dir() {
        let args = DoshaArgs::try_parse_from(["dosha", "--model-dir", "/tmp/models"]).unwrap();
        assert_eq!(args.model_dir, PathBuf::from("/tmp/models"));
    }
}
