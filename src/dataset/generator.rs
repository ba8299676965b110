//! Randomized generation of labeled symptom records.
//!
//! Every record is built by sampling symptoms without replacement from the
//! corpora in [`corpus`](super::corpus) and joining them with spaces.

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::dataset::corpus::{self, NO_MATCH_SYMPTOMS};
use crate::dataset::record::TrainingRecord;
use crate::dosha::{Dosha, Label};

/// Pure records generated per dosha in the full dataset.
pub const PURE_RECORDS_PER_DOSHA: usize = 80;
/// Mixed records in the full dataset.
pub const MIXED_RECORDS: usize = 60;
/// No-match records in the full dataset.
pub const NO_MATCH_RECORDS: usize = 30;

/// Generates training records from the symptom corpora.
#[derive(Debug)]
pub struct DatasetGenerator<R: Rng> {
    rng: R,
}

impl DatasetGenerator<ThreadRng> {
    /// Generator backed by the unseeded thread-local RNG.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> DatasetGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Sample `count` records of 2 to 8 symptoms each from `symptoms`.
    pub fn generate(
        &mut self,
        symptoms: &[&str],
        label: Label,
        count: usize,
    ) -> Vec<TrainingRecord> {
        (0..count)
            .map(|_| {
                let n = self.rng.random_range(2..=8).min(symptoms.len());
                let text = self.sample(symptoms, n).join(" ");
                TrainingRecord::new(text, label, n)
            })
            .collect()
    }

    /// Records mixing a primary dosha (60-80% of symptoms) with one other.
    ///
    /// Each record is labeled with its primary dosha.
    pub fn create_mixed(&mut self, count: usize) -> Vec<TrainingRecord> {
        (0..count).map(|_| self.draw_mixed().to_record()).collect()
    }

    fn draw_mixed(&mut self) -> MixedDraw {
        let primary = Dosha::ALL[self.rng.random_range(0..Dosha::ALL.len())];
        let total: usize = self.rng.random_range(3..=7);
        let share: f64 = self.rng.random_range(0.6..0.8);
        let primary_count = (total as f64 * share).floor() as usize;
        let secondary_count = total - primary_count;

        let others = primary.others();
        let secondary = others[self.rng.random_range(0..others.len())];

        let mut picked: Vec<(&'static str, Dosha)> = self
            .sample(corpus::symptoms_for(primary), primary_count)
            .into_iter()
            .map(|s| (s, primary))
            .collect();
        picked.extend(
            self.sample(corpus::symptoms_for(secondary), secondary_count)
                .into_iter()
                .map(|s| (s, secondary)),
        );
        picked.shuffle(&mut self.rng);

        MixedDraw { primary, picked }
    }

    /// Records of 1 to 3 injury/disease symptoms labeled `no_match`.
    pub fn create_no_match(&mut self, count: usize) -> Vec<TrainingRecord> {
        (0..count)
            .map(|_| {
                let n = self.rng.random_range(1..=3);
                let text = self.sample(NO_MATCH_SYMPTOMS, n).join(" ");
                TrainingRecord::new(text, Label::NoMatch, n)
            })
            .collect()
    }

    /// The full shuffled dataset: 80 pure records per dosha, 60 mixed and
    /// 30 no-match records.
    pub fn create_comprehensive(&mut self) -> Vec<TrainingRecord> {
        let mut records = Vec::with_capacity(
            PURE_RECORDS_PER_DOSHA * Dosha::ALL.len() + MIXED_RECORDS + NO_MATCH_RECORDS,
        );

        for dosha in Dosha::ALL {
            records.extend(self.generate(
                corpus::symptoms_for(dosha),
                Label::Dosha(dosha),
                PURE_RECORDS_PER_DOSHA,
            ));
        }
        records.extend(self.create_mixed(MIXED_RECORDS));
        records.extend(self.create_no_match(NO_MATCH_RECORDS));

        records.shuffle(&mut self.rng);
        log::debug!("Generated {} training records", records.len());
        records
    }

    fn sample<'a>(&mut self, symptoms: &[&'a str], n: usize) -> Vec<&'a str> {
        symptoms.choose_multiple(&mut self.rng, n).copied().collect()
    }
}

/// One mixed record before joining, each symptom tagged with its source dosha.
#[derive(Debug)]
struct MixedDraw {
    primary: Dosha,
    picked: Vec<(&'static str, Dosha)>,
}

impl MixedDraw {
    fn to_record(&self) -> TrainingRecord {
        let text: Vec<&str> = self.picked.iter().map(|(s, _)| *s).collect();
        TrainingRecord::new(text.join(" "), Label::Dosha(self.primary), self.picked.len()).mixed()
    }
}

/// The curated classical cases as training records.
pub fn expert_records() -> Vec<TrainingRecord> {
    corpus::expert_cases()
        .into_iter()
        .map(|(text, label)| {
            let n = text.split_whitespace().count();
            TrainingRecord::new(text, label, n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::label_counts;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn generator() -> DatasetGenerator<StdRng> {
        DatasetGenerator::new(StdRng::seed_from_u64(7))
    }

    fn mentions_corpus(corpus: &[&str], text: &str) -> bool {
        corpus.iter().any(|s| text.contains(*s))
    }

    #[test]
    fn test_generate_counts_and_bounds() {
        let mut generator = generator();
        let records = generator.generate(corpus::VATA_SYMPTOMS, Label::Dosha(Dosha::Vata), 200);

        assert_eq!(records.len(), 200);
        for record in &records {
            assert!((2..=8).contains(&record.num_symptoms));
            assert_eq!(record.dosha, Label::Dosha(Dosha::Vata));
            assert!(!record.is_mixed());
            assert!(mentions_corpus(corpus::VATA_SYMPTOMS, &record.symptoms));
        }
    }

    #[test]
    fn test_samples_without_replacement() {
        let symptoms = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];
        let mut generator = generator();
        let records = generator.generate(&symptoms, Label::Dosha(Dosha::Pitta), 100);

        for record in records {
            let words: Vec<&str> = record.symptoms.split(' ').collect();
            let unique: HashSet<&str> = words.iter().copied().collect();
            assert_eq!(words.len(), record.num_symptoms);
            assert_eq!(unique.len(), words.len());
        }
    }

    #[test]
    fn test_mixed_records() {
        let mut generator = generator();
        let records = generator.create_mixed(100);

        assert_eq!(records.len(), 100);
        for record in &records {
            assert!(record.is_mixed());
            assert!((3..=7).contains(&record.num_symptoms));
            assert!(matches!(record.dosha, Label::Dosha(_)));
        }
    }

    #[test]
    fn test_mixed_split_between_primary_and_one_other() {
        let mut generator = generator();
        let mut secondaries = HashSet::new();

        for _ in 0..300 {
            let draw = generator.draw_mixed();
            let total = draw.picked.len();
            assert!((3..=7).contains(&total));

            let from_primary: Vec<&str> = draw
                .picked
                .iter()
                .filter(|(_, source)| *source == draw.primary)
                .map(|(s, _)| *s)
                .collect();
            let rest: Vec<(&str, Dosha)> = draw
                .picked
                .iter()
                .copied()
                .filter(|(_, source)| *source != draw.primary)
                .collect();

            let low = (total as f64 * 0.6).floor() as usize;
            let high = (total as f64 * 0.8).floor() as usize;
            assert!(
                (low..=high).contains(&from_primary.len()),
                "{} of {total} from the primary dosha",
                from_primary.len()
            );
            let primary_corpus = corpus::symptoms_for(draw.primary);
            assert!(from_primary.iter().all(|s| primary_corpus.contains(s)));

            // The remainder comes from a single other dosha.
            let sources: HashSet<Dosha> = rest.iter().map(|(_, d)| *d).collect();
            assert_eq!(sources.len(), 1);
            let secondary = rest[0].1;
            assert!(draw.primary.others().contains(&secondary));
            let secondary_corpus = corpus::symptoms_for(secondary);
            assert!(rest.iter().all(|(s, _)| secondary_corpus.contains(s)));
            secondaries.insert((draw.primary, secondary));

            let record = draw.to_record();
            assert_eq!(record.dosha, Label::Dosha(draw.primary));
            assert_eq!(record.num_symptoms, total);
            assert!(record.is_mixed());
            let joined: Vec<&str> = draw.picked.iter().map(|(s, _)| *s).collect();
            assert_eq!(record.symptoms, joined.join(" "));
        }

        // Every ordered pair of distinct doshas shows up.
        assert_eq!(secondaries.len(), 6);
    }

    #[test]
    fn test_no_match_records() {
        let mut generator = generator();
        let records = generator.create_no_match(50);

        for record in &records {
            assert_eq!(record.dosha, Label::NoMatch);
            assert!((1..=3).contains(&record.num_symptoms));
            assert!(mentions_corpus(NO_MATCH_SYMPTOMS, &record.symptoms));
        }
    }

    #[test]
    fn test_comprehensive_distribution() {
        let mut generator = generator();
        let records = generator.create_comprehensive();
        assert_eq!(records.len(), 330);

        let mixed = records.iter().filter(|r| r.is_mixed()).count();
        assert_eq!(mixed, MIXED_RECORDS);

        let counts = label_counts(&records);
        assert_eq!(counts["no_match"], NO_MATCH_RECORDS);
        let dosha_total: usize = ["vata", "pitta", "kapha"].iter().map(|d| counts[*d]).sum();
        assert_eq!(dosha_total, 300);
        for dosha in ["vata", "pitta", "kapha"] {
            assert!(counts[dosha] >= PURE_RECORDS_PER_DOSHA);
        }
    }

    #[test]
    fn test_expert_records() {
        let records = expert_records();
        assert_eq!(records.len(), 9);
        assert!(records.iter().all(|r| r.num_symptoms > 0));
    }
}
