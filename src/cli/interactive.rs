//! Line-oriented console for repeated predictions.

use std::io::{BufRead, Write};

use crate::cli::args::OutputFormat;
use crate::cli::output::{write_dosha_info, write_examples, write_prediction};
use crate::error::Result;
use crate::predictor::{Predictor, parse_symptom_line};

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Quit,
    Help,
    Info,
    Empty,
    Symptoms(String),
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "exit" | "q" => Self::Quit,
            "help" | "h" => Self::Help,
            "info" | "doshas" => Self::Info,
            "" => Self::Empty,
            _ => Self::Symptoms(line.to_string()),
        }
    }
}

/// Run the console until `quit` or end of input.
///
/// Prediction errors are reported on `out` and the loop continues.
pub fn run_interactive<R: BufRead, W: Write>(
    predictor: &Predictor,
    mut input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "INTERACTIVE MODE")?;
    writeln!(out, "{}", "═".repeat(50))?;
    writeln!(out, "Enter symptoms separated by commas (or 'help' for examples)")?;
    writeln!(out, "Type 'info' for dosha information, 'quit' to exit")?;

    let mut line = String::new();
    loop {
        write!(out, "\nEnter symptoms: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "Goodbye!")?;
            break;
        }

        match ConsoleCommand::parse(&line) {
            ConsoleCommand::Quit => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            ConsoleCommand::Help => write_examples(out)?,
            ConsoleCommand::Info => write_dosha_info(out)?,
            ConsoleCommand::Empty => writeln!(out, "Please enter some symptoms.")?,
            ConsoleCommand::Symptoms(text) => {
                let Ok(symptoms) = parse_symptom_line(&text) else {
                    writeln!(out, "Please enter valid symptoms.")?;
                    continue;
                };
                let symptoms: Vec<String> = symptoms.iter().map(|s| s.to_lowercase()).collect();

                writeln!(out)?;
                writeln!(out, "Analyzing: {}", symptoms.join(", "))?;
                writeln!(out, "{}", "─".repeat(50))?;

                match predictor.predict(&symptoms) {
                    Ok(result) => write_prediction(out, &result, format)?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let predictor = Predictor::new();
        let mut out = Vec::new();
        run_interactive(&predictor, Cursor::new(input), &mut out, OutputFormat::Human).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse("  QUIT \n"), ConsoleCommand::Quit);
        assert_eq!(ConsoleCommand::parse("q"), ConsoleCommand::Quit);
        assert_eq!(ConsoleCommand::parse("h"), ConsoleCommand::Help);
        assert_eq!(ConsoleCommand::parse("Doshas"), ConsoleCommand::Info);
        assert_eq!(ConsoleCommand::parse("   "), ConsoleCommand::Empty);
        assert_eq!(
            ConsoleCommand::parse(" Dry Skin, anxiety\n"),
            ConsoleCommand::Symptoms("Dry Skin, anxiety".to_string())
        );
    }

    #[test]
    fn test_session_commands() {
        let output = run("help\ninfo\n\n , \nquit\nanger\n");
        assert!(output.contains("EXAMPLE SYMPTOM COMBINATIONS"));
        assert!(output.contains("AYURVEDIC DOSHAS (VPK) INFORMATION"));
        assert!(output.contains("Please enter some symptoms."));
        assert!(output.contains("Please enter valid symptoms."));
        assert!(output.contains("Goodbye!"));
        // Nothing after quit is processed.
        assert!(!output.contains("Analyzing: anger"));
    }

    #[test]
    fn test_prediction_errors_do_not_stop_the_loop() {
        let output = run("Dry Skin, Anxiety\nexit\n");
        assert!(output.contains("Analyzing: dry skin, anxiety"));
        assert!(output.contains("Error: Model not loaded. Please load model first."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let output = run("");
        assert!(output.contains("Goodbye!"));
    }
}
