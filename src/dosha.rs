//! Dosha categories, training labels and prediction outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DoshaError, Result};

/// Prediction text reported when no dosha is matched with enough confidence.
pub const NO_MATCH_PREDICTION: &str = "not vatham pitham or kapham";

/// Label used in training data for symptoms unrelated to any dosha.
pub const NO_MATCH_LABEL: &str = "no_match";

/// One of the three physiological categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

/// Static description of a dosha, shown by `--info`.
#[derive(Debug, Clone, Copy)]
pub struct DoshaInfo {
    pub traditional_name: &'static str,
    pub elements: &'static str,
    pub governs: &'static str,
    pub balanced: &'static str,
    pub imbalanced: &'static str,
    pub common_symptoms: &'static [&'static str],
}

const VATA_INFO: DoshaInfo = DoshaInfo {
    traditional_name: "Vatham",
    elements: "Air & Space",
    governs: "Movement, circulation, breathing, nervous system",
    balanced: "Creativity, flexibility, quick thinking",
    imbalanced: "Anxiety, dry skin, constipation, joint pain",
    common_symptoms: &[
        "dry skin",
        "constipation",
        "anxiety",
        "joint pain",
        "irregular digestion",
        "insomnia",
        "nervousness",
    ],
};

const PITTA_INFO: DoshaInfo = DoshaInfo {
    traditional_name: "Pitham",
    elements: "Fire & Water",
    governs: "Metabolism, digestion, body temperature, intelligence",
    balanced: "Good digestion, sharp intellect, courage",
    imbalanced: "Anger, acidity, inflammation, excessive heat",
    common_symptoms: &[
        "acidity",
        "burning sensation",
        "anger",
        "yellow urine",
        "skin inflammation",
        "excessive sweating",
    ],
};

const KAPHA_INFO: DoshaInfo = DoshaInfo {
    traditional_name: "Kapham",
    elements: "Water & Earth",
    governs: "Structure, immunity, lubrication, stability",
    balanced: "Strong immunity, calm mind, stable emotions",
    imbalanced: "Weight gain, lethargy, congestion, depression",
    common_symptoms: &[
        "congestion",
        "weight gain",
        "lethargy",
        "cold limbs",
        "excessive sleep",
        "sluggishness",
    ],
};

impl Dosha {
    /// All doshas in canonical order.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    /// Lowercase name, as used in datasets and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    /// Upper-case display name.
    pub fn upper(&self) -> &'static str {
        match self {
            Dosha::Vata => "VATA",
            Dosha::Pitta => "PITTA",
            Dosha::Kapha => "KAPHA",
        }
    }

    /// Descriptive information about this dosha.
    pub fn info(&self) -> &'static DoshaInfo {
        match self {
            Dosha::Vata => &VATA_INFO,
            Dosha::Pitta => &PITTA_INFO,
            Dosha::Kapha => &KAPHA_INFO,
        }
    }

    /// The other two doshas.
    pub fn others(&self) -> [Dosha; 2] {
        match self {
            Dosha::Vata => [Dosha::Pitta, Dosha::Kapha],
            Dosha::Pitta => [Dosha::Vata, Dosha::Kapha],
            Dosha::Kapha => [Dosha::Vata, Dosha::Pitta],
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dosha {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            other => Err(DoshaError::invalid_argument(format!("unknown dosha '{other}'"))),
        }
    }
}

/// Label attached to a training record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Label {
    Dosha(Dosha),
    NoMatch,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Dosha(dosha) => dosha.as_str(),
            Label::NoMatch => NO_MATCH_LABEL,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() == NO_MATCH_LABEL {
            Ok(Label::NoMatch)
        } else {
            Ok(Label::Dosha(s.parse()?))
        }
    }
}

impl TryFrom<String> for Label {
    type Error = DoshaError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_string()
    }
}

impl From<Dosha> for Label {
    fn from(dosha: Dosha) -> Self {
        Label::Dosha(dosha)
    }
}

/// The resolved outcome of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Prediction {
    Dosha(Dosha),
    /// No dosha crossed the confidence threshold.
    NoMatch,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Dosha(dosha) => dosha.as_str(),
            Prediction::NoMatch => NO_MATCH_PREDICTION,
        }
    }

    pub fn dosha(&self) -> Option<Dosha> {
        match self {
            Prediction::Dosha(dosha) => Some(*dosha),
            Prediction::NoMatch => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Prediction::NoMatch)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Prediction {
    type Error = DoshaError;

    fn try_from(value: String) -> Result<Self> {
        if value == NO_MATCH_PREDICTION {
            Ok(Prediction::NoMatch)
        } else {
            Ok(Prediction::Dosha(value.parse()?))
        }
    }
}

impl From<Prediction> for String {
    fn from(prediction: Prediction) -> Self {
        prediction.as_str().to_string()
    }
}
