mod common;

use std::sync::OnceLock;

use dosha::config::ArtifactPaths;
use dosha::dosha::{Dosha, Prediction};
use dosha::error::DoshaError;
use dosha::predictor::{CONFIDENCE_THRESHOLD, LOW_CONFIDENCE, Predictor};
use dosha::recommendation::Recommendation;
use tempfile::tempdir;

use common::{records_with_expert_cases, symptoms, train_in, train_on};

fn trained() -> &'static Predictor {
    static PREDICTOR: OnceLock<Predictor> = OnceLock::new();
    PREDICTOR.get_or_init(|| {
        let dir = tempdir().unwrap();
        let (predictor, _, _) = train_in(dir.path());
        predictor
    })
}

#[test]
fn test_training_report() {
    let dir = tempdir().unwrap();
    let (predictor, paths, report) = train_in(dir.path());

    assert!(predictor.is_loaded());
    assert!(paths.exist());
    assert_eq!(report.classes, vec!["kapha", "no_match", "pitta", "vata"]);
    assert_eq!(report.n_train + report.n_test, report.label_counts.values().sum::<usize>());
    assert!(report.n_features > 0 && report.n_features <= 1000);
    assert!(report.accuracy > 0.5);
    assert!(report.to_string().starts_with("Model trained successfully!"));
}

#[test]
fn test_classic_cases() {
    let predictor = trained();
    let cases: [(&[&str], Dosha); 3] = [
        (
            &["dry skin", "constipation", "anxiety", "joint pain", "irregular digestion", "insomnia", "nervousness"],
            Dosha::Vata,
        ),
        (
            &["acidity", "burning sensation", "anger", "excessive heat", "skin inflammation", "yellow urine", "irritability"],
            Dosha::Pitta,
        ),
        (
            &["congestion", "weight gain", "lethargy", "cold limbs", "excessive sleep", "sluggishness", "excess mucus"],
            Dosha::Kapha,
        ),
    ];

    for (list, dosha) in cases {
        let result = predictor.predict(&symptoms(list)).unwrap();
        assert_eq!(result.prediction, Prediction::Dosha(dosha), "{list:?}");
        assert!(result.confidence.ends_with('%'));
        let Recommendation::Guidance { dosha: named, .. } = &result.recommendation else {
            panic!("expected dosha guidance for {list:?}");
        };
        assert_eq!(named, dosha.upper());
    }
}

#[test]
fn test_injuries_are_not_a_dosha() {
    let result = trained()
        .predict(&symptoms(&["broken bone", "car accident", "gunshot wound"]))
        .unwrap();
    assert_eq!(result.prediction, Prediction::NoMatch);
    assert_eq!(result.confidence, LOW_CONFIDENCE);
    assert!(result.recommendation.is_advisory());
}

#[test]
fn test_percentages_cover_fitted_labels() {
    let result = trained()
        .predict(&symptoms(&["headache", "fatigue"]))
        .unwrap();

    let keys: Vec<&str> = result.dosha_percentages.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["kapha", "no_match", "pitta", "vata"]);
    assert!(result.dosha_percentages.values().all(|p| (0.0..=100.0).contains(p)));
    let total: f64 = result.dosha_percentages.values().sum();
    assert!((total - 100.0).abs() < 0.1, "{total}");

    let best = result
        .dosha_percentages
        .values()
        .cloned()
        .fold(f64::MIN, f64::max);
    if best < CONFIDENCE_THRESHOLD * 100.0 {
        assert_eq!(result.prediction, Prediction::NoMatch);
    }
}

#[test]
fn test_predict_is_idempotent() {
    let list = symptoms(&["anxiety", "dry skin", "acidity", "irritability"]);
    let first = trained().predict(&list).unwrap();
    let second = trained().predict(&list).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.symptoms_analyzed, list);
}

#[test]
fn test_batch_keeps_order() {
    let batch = vec![
        symptoms(&["congestion", "lethargy", "weight gain"]),
        symptoms(&["acidity", "anger", "heartburn"]),
        symptoms(&["dry skin", "anxiety", "insomnia"]),
    ];
    let results = trained().predict_batch(&batch).unwrap();
    assert_eq!(results.len(), 3);
    for (input, result) in batch.iter().zip(&results) {
        assert_eq!(&result.symptoms_analyzed, input);
        assert_eq!(result, &trained().predict(input).unwrap());
    }
}

#[test]
fn test_artifacts_reload_to_the_same_model() {
    let dir = tempdir().unwrap();
    let (trained, paths, _) = train_in(dir.path());
    let reloaded = Predictor::from_artifacts(&paths);
    assert!(reloaded.is_loaded());

    let list = symptoms(&["heartburn", "red eyes", "sweating"]);
    assert_eq!(trained.predict(&list).unwrap(), reloaded.predict(&list).unwrap());
}

#[test]
fn test_missing_artifacts_leave_predictor_unloaded() {
    let dir = tempdir().unwrap();
    let predictor = Predictor::from_artifacts(&ArtifactPaths::in_dir(dir.path()));
    assert!(!predictor.is_loaded());
    assert!(matches!(
        predictor.predict(&symptoms(&["anxiety"])),
        Err(DoshaError::ModelNotLoaded)
    ));
    assert!(matches!(
        predictor.predict_batch(&[symptoms(&["anxiety"])]),
        Err(DoshaError::ModelNotLoaded)
    ));
}

#[test]
fn test_failed_load_keeps_loaded_model() {
    let dir = tempdir().unwrap();
    let (mut predictor, _, _) = train_in(dir.path());
    let missing = ArtifactPaths::in_dir(dir.path().join("missing"));
    assert!(predictor.load(&missing).is_err());
    assert!(predictor.is_loaded());
}

#[test]
fn test_vata_case_carries_symptom_remedies() {
    let list = symptoms(&[
        "dry skin",
        "constipation",
        "anxiety",
        "joint pain",
        "irregular digestion",
        "insomnia",
    ]);
    let result = trained().predict(&list).unwrap();
    assert_eq!(result.prediction, Prediction::Dosha(Dosha::Vata));

    let Recommendation::Guidance {
        specific_recommendations,
        remedies,
        ..
    } = &result.recommendation
    else {
        panic!("expected dosha guidance");
    };
    assert!(specific_recommendations.iter().any(|s| s.starts_with("For dry skin:")));
    assert!(specific_recommendations.iter().any(|s| s.starts_with("For constipation:")));
    assert!(remedies.iter().any(|s| s.starts_with("• Dry skin:")));
    assert!(remedies.iter().any(|s| s.starts_with("• Constipation:")));
}

#[test]
fn test_short_pitta_case() {
    let result = trained()
        .predict(&symptoms(&["acidity", "burning sensation", "anger", "excessive heat"]))
        .unwrap();
    assert_eq!(result.prediction, Prediction::Dosha(Dosha::Pitta));
}

#[test]
fn test_training_with_expert_cases() {
    let dir = tempdir().unwrap();
    let records = records_with_expert_cases();
    let (predictor, _, report) = train_on(dir.path(), &records);

    // 80 pure per dosha, 60 mixed and 30 no-match, plus nine curated cases.
    assert_eq!(records.len(), 339);
    assert_eq!(report.n_train + report.n_test, 339);
    assert_eq!(report.label_counts["no_match"], 30);
    // Each dosha has its pure records and three curated ones; mixed records
    // add to whichever dosha they are labeled with.
    let doshas = ["vata", "pitta", "kapha"];
    assert!(doshas.iter().all(|d| report.label_counts[*d] >= 83));
    let dosha_total: usize = doshas.iter().map(|d| report.label_counts[*d]).sum();
    assert_eq!(dosha_total, 240 + 60 + 9);

    let result = predictor
        .predict(&symptoms(&["congestion", "weight gain", "lethargy", "excessive sleep"]))
        .unwrap();
    assert_eq!(result.prediction, Prediction::Dosha(Dosha::Kapha));
}
