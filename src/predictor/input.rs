//! Input cleanup shared by the CLI, the interactive console and the server.

use crate::error::{DoshaError, Result};

/// Trim each symptom and drop the empty ones.
///
/// Returns an error when nothing is left, so presentation layers can reject
/// blank input before it reaches the predictor.
pub fn clean_symptoms<I, S>(symptoms: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cleaned: Vec<String> = symptoms
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(DoshaError::invalid_argument("No valid symptoms provided"));
    }
    Ok(cleaned)
}

/// Split a comma-separated line into cleaned symptoms.
pub fn parse_symptom_line(line: &str) -> Result<Vec<String>> {
    clean_symptoms(line.split(','))
}
