//! Command implementations for the dosha CLI.

use std::io::{self, BufRead, Write};

use clap::CommandFactory;

use crate::cli::args::{DoshaArgs, Mode, OutputFormat};
use crate::cli::interactive::run_interactive;
use crate::cli::output::{write_dosha_info, write_prediction, write_version};
use crate::config::ArtifactPaths;
use crate::error::{DoshaError, Result};
use crate::predictor::{Predictor, clean_symptoms};

/// Execute the CLI against the process's stdin and stdout.
pub fn execute_command(args: DoshaArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_with_io(args, stdin.lock(), &mut stdout.lock())
}

/// Execute the CLI with explicit input and output streams.
pub fn execute_with_io<R: BufRead, W: Write>(args: DoshaArgs, input: R, out: &mut W) -> Result<()> {
    let mode = args.mode();
    match mode {
        Mode::Version => return write_version(out),
        Mode::Info => return write_dosha_info(out),
        _ => {}
    }

    let predictor = load_predictor(&args, out)?;

    match mode {
        Mode::Interactive => run_interactive(&predictor, input, out, args.output_format),
        Mode::Predict(symptoms) => predict_symptoms(&predictor, &symptoms, &args, out),
        Mode::HelpThenInteractive => {
            writeln!(out, "{}", DoshaArgs::command().render_help())?;
            writeln!(out)?;
            writeln!(out, "No symptoms provided. Starting interactive mode...")?;
            run_interactive(&predictor, input, out, args.output_format)
        }
        Mode::Version | Mode::Info => Ok(()),
    }
}

fn load_predictor<W: Write>(args: &DoshaArgs, out: &mut W) -> Result<Predictor> {
    let human = args.output_format == OutputFormat::Human;
    if human && args.verbosity() > 0 {
        writeln!(out, "AYURVEDIC HEALTH MONITORING SYSTEM")?;
        writeln!(out, "{}", "═".repeat(50))?;
        writeln!(out, "Loading model from {}...", args.model_dir.display())?;
    }

    let mut predictor = Predictor::new();
    match predictor.load(&ArtifactPaths::in_dir(&args.model_dir)) {
        Ok(()) => {}
        Err(e) if e.is_not_found() => {
            return Err(DoshaError::ModelNotFound(args.model_dir.clone()));
        }
        Err(e) => return Err(e),
    }

    if human && args.verbosity() > 0 {
        writeln!(out, "Model loaded successfully!")?;
    }
    Ok(predictor)
}

fn predict_symptoms<W: Write>(
    predictor: &Predictor,
    symptoms: &[String],
    args: &DoshaArgs,
    out: &mut W,
) -> Result<()> {
    let symptoms: Vec<String> = clean_symptoms(symptoms)?
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect();

    if args.output_format == OutputFormat::Human {
        writeln!(out, "ANALYZING SYMPTOMS...")?;
        writeln!(out, "Input: {}", symptoms.join(", "))?;
        writeln!(out, "{}", "─".repeat(50))?;
    }

    let result = predictor.predict(&symptoms)?;
    write_prediction(out, &result, args.output_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(argv: &[&str]) -> (Result<()>, String) {
        let args = DoshaArgs::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let result = execute_with_io(args, Cursor::new(""), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_version() {
        let (result, output) = run(&["dosha", "--version"]);
        assert!(result.is_ok());
        assert!(output.contains("Ayurvedic Health Monitoring System v"));
    }

    #[test]
    fn test_info_does_not_need_a_model() {
        let dir = TempDir::new().unwrap();
        let model_dir = dir.path().to_str().unwrap();
        let (result, output) = run(&["dosha", "--info", "--model-dir", model_dir]);
        assert!(result.is_ok());
        assert!(output.contains("PITTA (Pitham)"));
    }

    #[test]
    fn test_missing_model_is_an_error() {
        let dir = TempDir::new().unwrap();
        let model_dir = dir.path().to_str().unwrap();
        let (result, output) = run(&["dosha", "-s", "anger", "--model-dir", model_dir]);
        let Err(error) = result else {
            panic!("expected a missing-model error");
        };
        let DoshaError::ModelNotFound(missing) = &error else {
            panic!("expected ModelNotFound, got {error:?}");
        };
        assert_eq!(missing.to_str(), Some(model_dir));
        // The hint travels in the error alone; the binary prints it once.
        assert!(error.to_string().contains("Run dosha-train first"));
        assert!(!output.contains("Run dosha-train"));
    }
}
