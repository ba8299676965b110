//! Guidance attached to every prediction.
//!
//! A confident prediction gets the dosha's diet, lifestyle, herb and yoga
//! lists plus advice for each recognized symptom. The no-match outcome gets a
//! fixed advisory pointing to a practitioner.

use serde::{Deserialize, Serialize};

use crate::dosha::{Dosha, Prediction};

const NO_SPECIFIC_FALLBACK: &str = "Maintain balanced lifestyle according to general dosha guidelines";
const NO_REMEDY_FALLBACK: &str = "Follow general dosha-balancing practices";

const ADVISORY_GENERAL: &str = "Your symptoms don't clearly match traditional Ayurvedic dosha patterns. This could indicate a complex imbalance or non-Ayurvedic condition.";
const ADVISORY_ADVICE: &str = "We strongly recommend consulting with a qualified Ayurvedic practitioner for personalized assessment and treatment plan.";
const ADVISORY_NOTE: &str = "Professional guidance is essential for accurate diagnosis and treatment.";

/// Recommendation bundle. Serialized without a tag, so clients see either
/// the guidance fields or the advisory fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    Guidance {
        /// Upper-case dosha name.
        dosha: String,
        diet: Vec<String>,
        lifestyle: Vec<String>,
        herbs: Vec<String>,
        yoga: Vec<String>,
        specific_recommendations: Vec<String>,
        remedies: Vec<String>,
        note: String,
    },
    Advisory {
        general: String,
        advice: String,
        note: String,
    },
}

impl Recommendation {
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::Advisory { .. })
    }

    pub fn note(&self) -> &str {
        match self {
            Self::Guidance { note, .. } | Self::Advisory { note, .. } => note,
        }
    }
}

/// Whom a symptom's advice is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceTarget {
    Dosha(Dosha),
    All,
}

/// Advice for one recognized symptom.
#[derive(Debug, Clone, Copy)]
pub struct SymptomAdvice {
    pub symptom: &'static str,
    pub target: AdviceTarget,
    pub text: &'static str,
    pub remedy: &'static str,
}

const fn advice(
    symptom: &'static str,
    target: AdviceTarget,
    text: &'static str,
    remedy: &'static str,
) -> SymptomAdvice {
    SymptomAdvice {
        symptom,
        target,
        text,
        remedy,
    }
}

use AdviceTarget::All;

const VATA: AdviceTarget = AdviceTarget::Dosha(Dosha::Vata);
const PITTA: AdviceTarget = AdviceTarget::Dosha(Dosha::Pitta);
const KAPHA: AdviceTarget = AdviceTarget::Dosha(Dosha::Kapha);

pub static SYMPTOM_ADVICE: &[SymptomAdvice] = &[
    advice(
        "dry skin",
        VATA,
        "Apply warm sesame oil massage daily, use oil-based moisturizers",
        "Stay hydrated, consume healthy fats like ghee and nuts",
    ),
    advice(
        "constipation",
        VATA,
        "Drink warm water in morning, consume fiber-rich foods, take triphala at night",
        "Include cooked vegetables, warm soups, and avoid cold/dry foods",
    ),
    advice(
        "anxiety",
        VATA,
        "Practice meditation and pranayama, maintain regular sleep schedule",
        "Use calming herbs like ashwagandha, reduce caffeine intake",
    ),
    advice(
        "joint pain",
        VATA,
        "Perform gentle yoga, apply warm oil massage on affected joints",
        "Consume turmeric milk, avoid cold and raw foods",
    ),
    advice(
        "acidity",
        PITTA,
        "Avoid spicy, oily, and fried foods, eat cooling foods like cucumber",
        "Drink coconut water, consume aloe vera juice before meals",
    ),
    advice(
        "anger",
        PITTA,
        "Practice cooling pranayama (sitali), avoid heated arguments",
        "Use cooling herbs like coriander, reduce exposure to heat and sun",
    ),
    advice(
        "burning sensation",
        PITTA,
        "Consume cooling foods like buttermilk, avoid hot spices",
        "Apply cooling sandalwood paste, drink plenty of water",
    ),
    advice(
        "inflammation",
        PITTA,
        "Use anti-inflammatory herbs like turmeric and neem",
        "Avoid acidic foods, consume sweet fruits and vegetables",
    ),
    advice(
        "congestion",
        KAPHA,
        "Perform steam inhalation with eucalyptus, avoid dairy products",
        "Drink warm ginger tea, use black pepper in meals",
    ),
    advice(
        "weight gain",
        KAPHA,
        "Increase physical activity, eat light and warm foods",
        "Avoid heavy, oily foods, practice intermittent fasting",
    ),
    advice(
        "lethargy",
        KAPHA,
        "Wake up before sunrise, engage in vigorous exercise",
        "Consume stimulating spices like ginger, reduce daytime sleep",
    ),
    advice(
        "cold limbs",
        KAPHA,
        "Keep body warm, perform active movements",
        "Drink warm beverages, use warming spices in cooking",
    ),
    advice(
        "headache",
        All,
        "Apply cooling paste on forehead, practice pranayama",
        "Stay hydrated, get adequate rest, avoid stress triggers",
    ),
    advice(
        "fatigue",
        All,
        "Ensure proper sleep, consume nutritious meals",
        "Practice yoga, take adaptogenic herbs like ashwagandha",
    ),
    advice(
        "insomnia",
        VATA,
        "Establish regular sleep routine, drink warm milk with nutmeg",
        "Practice relaxation techniques, avoid screens before bed",
    ),
    advice(
        "excessive heat",
        PITTA,
        "Stay in cool environment, avoid sun exposure during peak hours",
        "Consume cooling beverages, apply sandalwood paste",
    ),
    advice(
        "excessive sleep",
        KAPHA,
        "Reduce sleep duration gradually, establish wake-up routine",
        "Avoid heavy meals at night, practice morning exercises",
    ),
    advice(
        "irregular digestion",
        VATA,
        "Eat at regular times, consume warm cooked meals",
        "Use digestive spices like cumin, avoid eating in stress",
    ),
];

/// Static balancing guidance of one dosha.
#[derive(Debug)]
pub struct DoshaGuidance {
    pub diet: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
    pub herbs: &'static [&'static str],
    pub yoga: &'static [&'static str],
}

static VATA_GUIDANCE: DoshaGuidance = DoshaGuidance {
    diet: &[
        "Favor warm, cooked, and nourishing foods",
        "Include sweet, sour, and salty tastes",
        "Consume healthy fats like ghee, nuts, and seeds",
        "Avoid cold, raw, and dry foods",
        "Eat at regular times",
    ],
    lifestyle: &[
        "Maintain regular daily routines",
        "Practice oil massage (abhyanga) with warm sesame oil",
        "Ensure adequate rest and avoid overexertion",
        "Keep warm and avoid cold, windy environments",
        "Practice calming yoga and meditation",
    ],
    herbs: &["Ashwagandha", "Triphala", "Brahmi", "Shatavari"],
    yoga: &[
        "Gentle stretching",
        "Grounding poses",
        "Forward bends",
        "Restorative yoga",
    ],
};

static PITTA_GUIDANCE: DoshaGuidance = DoshaGuidance {
    diet: &[
        "Favor cool, fresh, and sweet foods",
        "Include bitter and astringent tastes",
        "Consume cooling vegetables like cucumber, leafy greens",
        "Avoid spicy, oily, fried, and acidic foods",
        "Drink plenty of water and coconut water",
    ],
    lifestyle: &[
        "Avoid excessive heat and sun exposure",
        "Practice stress management techniques",
        "Engage in moderate, not competitive exercise",
        "Take cool showers and wear cooling colors",
        "Maintain work-life balance",
    ],
    herbs: &["Neem", "Coriander", "Aloe vera", "Amla"],
    yoga: &[
        "Cooling pranayama",
        "Moon salutations",
        "Gentle backbends",
        "Meditation",
    ],
};

static KAPHA_GUIDANCE: DoshaGuidance = DoshaGuidance {
    diet: &[
        "Favor light, warm, and dry foods",
        "Include pungent, bitter, and astringent tastes",
        "Consume stimulating spices like ginger, black pepper",
        "Avoid heavy, oily, and dairy-rich foods",
        "Reduce portion sizes and avoid overeating",
    ],
    lifestyle: &[
        "Engage in regular vigorous exercise",
        "Wake up early, preferably before sunrise",
        "Perform dry massage (garshana)",
        "Stay active and avoid excessive sleep",
        "Seek variety and new experiences",
    ],
    herbs: &["Trikatu", "Guggulu", "Turmeric", "Tulsi"],
    yoga: &[
        "Vigorous vinyasa",
        "Sun salutations",
        "Backbends",
        "Inversions",
    ],
};

pub fn guidance_for(dosha: Dosha) -> &'static DoshaGuidance {
    match dosha {
        Dosha::Vata => &VATA_GUIDANCE,
        Dosha::Pitta => &PITTA_GUIDANCE,
        Dosha::Kapha => &KAPHA_GUIDANCE,
    }
}

/// Look up advice by exact, case-insensitive symptom name.
pub fn advice_for(symptom: &str) -> Option<&'static SymptomAdvice> {
    let key = symptom.to_lowercase();
    SYMPTOM_ADVICE.iter().find(|a| a.symptom == key)
}

/// Build the recommendation bundle for a resolved prediction.
pub fn recommend(prediction: Prediction, symptoms: &[String]) -> Recommendation {
    let Some(dosha) = prediction.dosha() else {
        return Recommendation::Advisory {
            general: ADVISORY_GENERAL.to_string(),
            advice: ADVISORY_ADVICE.to_string(),
            note: ADVISORY_NOTE.to_string(),
        };
    };

    let mut specific = Vec::new();
    let mut remedies = Vec::new();
    for symptom in symptoms {
        let Some(entry) = advice_for(symptom) else {
            continue;
        };
        match entry.target {
            AdviceTarget::Dosha(target) if target == dosha => {
                specific.push(format!("For {symptom}: {}", entry.text));
            }
            AdviceTarget::All => specific.push(format!("For {symptom}: {}", entry.text)),
            AdviceTarget::Dosha(_) => {}
        }
        remedies.push(format!("• {}: {}", capitalize(symptom), entry.remedy));
    }

    if specific.is_empty() {
        specific.push(NO_SPECIFIC_FALLBACK.to_string());
    }
    if remedies.is_empty() {
        remedies.push(NO_REMEDY_FALLBACK.to_string());
    }

    let guidance = guidance_for(dosha);
    Recommendation::Guidance {
        dosha: dosha.upper().to_string(),
        diet: to_strings(guidance.diet),
        lifestyle: to_strings(guidance.lifestyle),
        herbs: to_strings(guidance.herbs),
        yoga: to_strings(guidance.yoga),
        specific_recommendations: specific,
        remedies,
        note: format!(
            "These recommendations are for balancing {} dosha. Always consult an Ayurvedic practitioner for personalized treatment.",
            dosha.upper()
        ),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
