//! Dosha training binary: generate the dataset, fit and persist the model.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use dosha::cli::OutputFormat;
use dosha::cli::args::init_logger;
use dosha::cli::output::write_prediction;
use dosha::config::{ArtifactPaths, DATASET_FILE, ModelConfig};
use dosha::dataset::{DatasetGenerator, expert_records, label_counts, write_dataset};
use dosha::error::Result;
use dosha::predictor::Predictor;

const DEMO_CASES: &[(&str, &[&str])] = &[
    (
        "Classic Vata Case",
        &["dry skin", "constipation", "anxiety", "joint pain", "irregular digestion", "insomnia"],
    ),
    (
        "Classic Pitta Case",
        &["acidity", "burning sensation", "anger", "excessive heat", "skin inflammation", "yellow urine"],
    ),
    (
        "Classic Kapha Case",
        &["congestion", "weight gain", "lethargy", "cold limbs", "excessive sleep", "sluggishness"],
    ),
    (
        "Mixed Vata-Pitta",
        &["anxiety", "dry skin", "acidity", "irritability", "joint pain"],
    ),
    (
        "Non-Ayurvedic Symptoms",
        &["broken bone", "car accident", "appendicitis", "covid symptoms"],
    ),
    (
        "Modern Stress Case",
        &["headache", "fatigue", "stress", "muscle tension"],
    ),
];

/// Train the dosha classifier
#[derive(Parser, Debug)]
#[command(name = "dosha-train")]
#[command(about = "Generate the symptom dataset and train the dosha classifier")]
struct TrainArgs {
    /// Dataset CSV to write (or read with --skip-generate)
    #[arg(long, default_value = DATASET_FILE, value_name = "FILE")]
    dataset: PathBuf,

    /// Directory receiving the model artifacts
    #[arg(long, env = "DOSHA_MODEL_DIR", default_value = ".", value_name = "DIR")]
    model_dir: PathBuf,

    /// Train on an existing dataset instead of generating one
    #[arg(long)]
    skip_generate: bool,

    /// Append the curated classical cases to the generated dataset
    #[arg(long)]
    with_expert_cases: bool,

    /// JSON file with training hyper-parameters
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    quiet: bool,
}

impl TrainArgs {
    fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.max(1)
        }
    }
}

fn main() {
    let args = TrainArgs::parse();
    init_logger(args.verbosity());

    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run<W: Write>(args: &TrainArgs, out: &mut W) -> Result<()> {
    let config = match &args.config {
        Some(path) => ModelConfig::from_file(path)?,
        None => ModelConfig::default(),
    };

    writeln!(out, "{}", "═".repeat(60))?;
    writeln!(out, "AYURVEDIC HEALTH MONITORING SYSTEM - MODEL TRAINING")?;
    writeln!(out, "{}", "═".repeat(60))?;

    if args.skip_generate {
        writeln!(out, "\n1. Using existing dataset {}", args.dataset.display())?;
    } else {
        writeln!(out, "\n1. Creating dataset...")?;
        let mut records = DatasetGenerator::from_thread_rng().create_comprehensive();
        if args.with_expert_cases {
            records.extend(expert_records());
        }
        write_dataset(&args.dataset, &records)?;

        let counts = label_counts(&records);
        log::info!("Label distribution: {counts:?}");
        writeln!(out, "Dataset created with {} records", records.len())?;
        for (label, count) in counts {
            writeln!(out, "   {label:<9} {count}")?;
        }
    }

    writeln!(out, "\n2. Training machine learning model...")?;
    let paths = ArtifactPaths::in_dir(&args.model_dir);
    let mut predictor = Predictor::new();
    let report = predictor.train(&args.dataset, &paths, &config)?;
    write!(out, "{report}")?;

    writeln!(out, "\n3. Testing trained model...")?;
    for (name, symptoms) in DEMO_CASES {
        let symptoms: Vec<String> = symptoms.iter().map(|s| s.to_string()).collect();
        writeln!(out)?;
        writeln!(out, "{name}")?;
        writeln!(out, "Input symptoms: {}", symptoms.join(", "))?;
        let result = predictor.predict(&symptoms)?;
        write_prediction(out, &result, OutputFormat::Human)?;
        writeln!(out, "{}", "─".repeat(60))?;
    }

    writeln!(out, "\nTraining completed successfully!")?;
    writeln!(out, "Model saved as: {}", paths.classifier.display())?;
    writeln!(out, "Vectorizer saved as: {}", paths.vectorizer.display())?;
    writeln!(out, "Dataset saved as: {}", args.dataset.display())?;
    Ok(())
}
