//! Hand-authored symptom corpora.

use crate::dosha::{Dosha, Label};

pub const VATA_SYMPTOMS: &[&str] = &[
    "dry skin", "constipation", "anxiety", "joint pain", "irregular digestion",
    "insomnia", "nervousness", "dizziness", "trembling", "muscle twitches",
    "cold hands feet", "dry cough", "hoarse voice", "cracking joints",
    "restlessness", "worry", "fear", "confusion", "memory loss",
    "thin body", "weight loss", "bloating", "gas formation", "abdominal pain",
    "irregular appetite", "scanty urination", "dry hair", "brittle nails",
    "rough skin", "premature aging", "wrinkles", "stiffness", "arthritis",
    "sciatica", "paralysis", "convulsions", "epilepsy", "depression mood swings",
    "rapid speech", "talkativeness", "hyperactivity", "palpitations",
    "irregular heartbeat", "low blood pressure", "fainting", "weakness",
    "fatigue", "exhaustion", "noise sensitivity", "light sensitivity",
    "touch sensitivity", "irregular menstruation", "painful periods",
    "dry vagina", "premature ejaculation", "impotence", "infertility",
];

pub const PITTA_SYMPTOMS: &[&str] = &[
    "acidity", "burning sensation", "anger", "skin inflammation", "excessive heat",
    "irritability", "impatience", "jealousy", "criticism", "perfectionism",
    "hyperacidity", "heartburn", "ulcers", "diarrhea", "loose stools",
    "yellow urine", "excessive urination", "sweating", "body odor",
    "premature graying", "baldness", "red eyes", "yellow eyes",
    "skin rashes", "acne", "eczema", "psoriasis", "hives",
    "fever", "inflammation", "infection", "boils", "abscesses",
    "excessive appetite", "thirst", "craving cold drinks", "aversion to heat",
    "yellow complexion", "red complexion", "hot flashes", "night sweats",
    "sharp hunger", "cannot skip meals", "nausea", "vomiting bile",
    "bitter taste", "sour taste", "metallic taste", "bleeding gums",
    "nose bleeding", "heavy periods", "early periods", "red blood",
    "hypertension", "migraine", "tension headache", "eye strain",
    "photophobia", "conjunctivitis", "stye", "visual disturbances",
    "liver disorders", "gallbladder problems", "jaundice", "hepatitis",
];

pub const KAPHA_SYMPTOMS: &[&str] = &[
    "congestion", "weight gain", "lethargy", "cold limbs", "excessive sleep",
    "sluggishness", "heaviness", "dullness", "attachment", "greed",
    "possessiveness", "depression", "lack motivation", "procrastination",
    "excess mucus", "phlegm", "cough with mucus", "runny nose",
    "sinus congestion", "post nasal drip", "allergies", "asthma",
    "bronchitis", "pneumonia", "fluid retention", "swelling", "edema",
    "obesity", "slow digestion", "slow metabolism", "nausea after eating",
    "sweet taste mouth", "excess saliva", "thick white coating tongue",
    "pale skin", "oily skin", "large pores", "thick hair", "oily hair",
    "slow healing", "slow movements", "slow speech", "monotone voice",
    "cold skin", "cold extremities", "low body temperature", "feeling cold",
    "high cholesterol", "diabetes", "hypothyroid", "low blood pressure",
    "slow pulse", "regular appetite", "craving sweets", "craving dairy",
    "difficulty waking", "oversleeping", "daytime sleepiness", "mental fog",
    "slow comprehension", "good memory", "loyal nature", "calm disposition",
    "delayed periods", "heavy periods", "white discharge", "cysts", "tumors",
];

/// Injuries and acute diseases that belong to no dosha.
pub const NO_MATCH_SYMPTOMS: &[&str] = &[
    "broken bone", "car accident", "gunshot wound", "appendicitis",
    "heart attack", "stroke", "cancer tumor", "chemotherapy side effects",
    "surgical complications", "antibiotic reaction", "food poisoning bacteria",
    "viral pneumonia", "covid symptoms", "influenza fever",
    "malaria parasites", "dengue fever", "typhoid bacteria",
    "kidney stones", "gallstones", "herniated disc",
    "torn ligament", "fractured skull", "concussion brain injury",
    "spinal cord injury", "nerve damage", "muscle tear",
    "dislocated shoulder", "tennis elbow", "carpal tunnel syndrome",
    "sports injury", "workplace accident", "burn injury",
];

/// Symptom corpus of a dosha.
pub fn symptoms_for(dosha: Dosha) -> &'static [&'static str] {
    match dosha {
        Dosha::Vata => VATA_SYMPTOMS,
        Dosha::Pitta => PITTA_SYMPTOMS,
        Dosha::Kapha => KAPHA_SYMPTOMS,
    }
}

/// Curated cases from classical texts, one symptom string per case.
pub fn expert_cases() -> Vec<(&'static str, Label)> {
    vec![
        (
            "dry skin constipation joint pain anxiety irregular digestion insomnia",
            Label::Dosha(Dosha::Vata),
        ),
        (
            "nervousness trembling cold hands feet dry cough restlessness memory loss",
            Label::Dosha(Dosha::Vata),
        ),
        (
            "weight loss bloating gas formation abdominal pain irregular appetite",
            Label::Dosha(Dosha::Vata),
        ),
        (
            "acidity heartburn anger excessive heat irritability yellow urine",
            Label::Dosha(Dosha::Pitta),
        ),
        (
            "skin inflammation burning sensation fever red eyes excessive sweating",
            Label::Dosha(Dosha::Pitta),
        ),
        (
            "ulcers diarrhea sharp hunger bitter taste excessive thirst",
            Label::Dosha(Dosha::Pitta),
        ),
        (
            "congestion weight gain lethargy excessive sleep cold limbs sluggishness",
            Label::Dosha(Dosha::Kapha),
        ),
        (
            "excess mucus cough with mucus runny nose slow digestion sweet taste mouth",
            Label::Dosha(Dosha::Kapha),
        ),
        (
            "fluid retention swelling obesity slow metabolism oily skin thick hair",
            Label::Dosha(Dosha::Kapha),
        ),
    ]
}
