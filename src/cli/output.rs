//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::dosha::Dosha;
use crate::error::Result;
use crate::predictor::PredictionResult;
use crate::recommendation::Recommendation;

/// Output a prediction in the specified format.
pub fn write_prediction<W: Write>(
    out: &mut W,
    result: &PredictionResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_prediction_human(out, result),
        OutputFormat::Json => write_json(out, result),
    }
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Output a prediction in human format.
fn write_prediction_human<W: Write>(out: &mut W, result: &PredictionResult) -> Result<()> {
    let prediction = result.prediction.as_str().to_uppercase();
    writeln!(out, "PREDICTION: {prediction}")?;
    if result.prediction.is_no_match() {
        writeln!(out, "   (Symptoms don't clearly match known Ayurvedic patterns)")?;
    }
    writeln!(out, "CONFIDENCE: {}", result.confidence)?;

    writeln!(out, "DOSHA PERCENTAGES:")?;
    for (label, percentage) in &result.dosha_percentages {
        writeln!(
            out,
            "   {:<8}: {:5.1}% {}",
            label.to_uppercase(),
            percentage,
            percentage_bar(*percentage)
        )?;
    }

    writeln!(out, "RECOMMENDATION:")?;
    write_recommendation_human(out, &result.recommendation)
}

/// One block character per five percent.
pub fn percentage_bar(percentage: f64) -> String {
    let blocks = (percentage / 5.0).max(0.0) as usize;
    "█".repeat(blocks)
}

fn write_recommendation_human<W: Write>(out: &mut W, recommendation: &Recommendation) -> Result<()> {
    match recommendation {
        Recommendation::Advisory {
            general,
            advice,
            note,
        } => {
            writeln!(out, "   {general}")?;
            writeln!(out, "   {advice}")?;
            writeln!(out, "   Note: {note}")?;
        }
        Recommendation::Guidance {
            dosha,
            diet,
            lifestyle,
            herbs,
            yoga,
            specific_recommendations,
            remedies,
            note,
        } => {
            writeln!(out, "   Balancing {dosha}")?;
            write_list(out, "Diet", diet)?;
            write_list(out, "Lifestyle", lifestyle)?;
            writeln!(out, "   Herbs: {}", herbs.join(", "))?;
            writeln!(out, "   Yoga: {}", yoga.join(", "))?;
            write_list(out, "Specific", specific_recommendations)?;
            writeln!(out, "   Remedies:")?;
            for remedy in remedies {
                writeln!(out, "     {remedy}")?;
            }
            writeln!(out, "   Note: {note}")?;
        }
    }
    Ok(())
}

fn write_list<W: Write>(out: &mut W, title: &str, items: &[String]) -> Result<()> {
    writeln!(out, "   {title}:")?;
    for item in items {
        writeln!(out, "     - {item}")?;
    }
    Ok(())
}

/// Descriptions of the three doshas.
pub fn write_dosha_info<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "AYURVEDIC DOSHAS (VPK) INFORMATION")?;
    writeln!(out, "{}", "═".repeat(50))?;

    for dosha in Dosha::ALL {
        let info = dosha.info();
        writeln!(out)?;
        writeln!(
            out,
            "{} ({}) - {} Elements",
            dosha.upper(),
            info.traditional_name,
            info.elements
        )?;
        writeln!(out, "   Governs: {}", info.governs)?;
        writeln!(out, "   Balanced: {}", info.balanced)?;
        writeln!(out, "   Imbalanced: {}", info.imbalanced)?;
        writeln!(out, "   Common symptoms: {}", info.common_symptoms.join(", "))?;
    }
    Ok(())
}

pub fn write_version<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Ayurvedic Health Monitoring System v{}", crate::VERSION)?;
    writeln!(out, "Based on traditional Ayurvedic principles from Charaka Samhita")?;
    Ok(())
}

/// Example symptom combinations for the interactive help.
pub fn write_examples<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "EXAMPLE SYMPTOM COMBINATIONS:")?;
    writeln!(out, "Vata: dry skin, anxiety, constipation, joint pain")?;
    writeln!(out, "Pitta: acidity, anger, burning sensation, yellow urine")?;
    writeln!(out, "Kapha: congestion, weight gain, lethargy, cold limbs")?;
    writeln!(out, "Mixed: headache, fatigue, stress")?;
    writeln!(out, "Non-Ayurvedic: broken bone, car accident, covid symptoms")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dosha::{NO_MATCH_PREDICTION, Prediction};
    use crate::recommendation::recommend;
    use std::collections::BTreeMap;

    fn result(prediction: Prediction) -> PredictionResult {
        let symptoms = vec!["dry skin".to_string()];
        let mut percentages = BTreeMap::new();
        percentages.insert("kapha".to_string(), 10.0);
        percentages.insert("no_match".to_string(), 5.0);
        percentages.insert("pitta".to_string(), 15.0);
        percentages.insert("vata".to_string(), 70.0);
        PredictionResult {
            prediction,
            confidence: "70.00%".to_string(),
            dosha_percentages: percentages,
            recommendation: recommend(prediction, &symptoms),
            symptoms_analyzed: symptoms,
        }
    }

    fn render(result: &PredictionResult, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_prediction(&mut buf, result, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_percentage_bar() {
        assert_eq!(percentage_bar(70.0), "█".repeat(14));
        assert_eq!(percentage_bar(4.9), "");
    }

    #[test]
    fn test_human_output() {
        let text = render(&result(Prediction::Dosha(Dosha::Vata)), OutputFormat::Human);
        assert!(text.starts_with("PREDICTION: VATA"));
        assert!(text.contains("CONFIDENCE: 70.00%"));
        assert!(text.contains("VATA    :  70.0% ██████████████"));
        assert!(text.contains("NO_MATCH:   5.0% █"));
        assert!(text.contains("Herbs: Ashwagandha, Triphala, Brahmi, Shatavari"));
    }

    #[test]
    fn test_human_output_no_match() {
        let text = render(&result(Prediction::NoMatch), OutputFormat::Human);
        assert!(text.starts_with("PREDICTION: NOT VATHAM PITHAM OR KAPHAM"));
        assert!(text.contains("don't clearly match"));
        assert!(text.contains("qualified Ayurvedic practitioner"));
    }

    #[test]
    fn test_json_output() {
        let text = render(&result(Prediction::NoMatch), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["prediction"], NO_MATCH_PREDICTION);
        assert_eq!(value["dosha_percentages"]["vata"], 70.0);
        assert!(value["recommendation"]["advice"].is_string());
    }

    #[test]
    fn test_dosha_info() {
        let mut buf = Vec::new();
        write_dosha_info(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("VATA (Vatham) - Air & Space Elements"));
        assert!(text.contains("KAPHA (Kapham) - Water & Earth Elements"));
    }
}
