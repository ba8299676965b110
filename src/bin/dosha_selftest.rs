//! Dosha self-test binary.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use dosha::cli::args::init_logger;
use dosha::config::ArtifactPaths;
use dosha::error::Result;
use dosha::selftest::{RESULTS_FILE, SelfTestSuite, write_results};

/// Run the end-to-end checks against a trained model
#[derive(Parser, Debug)]
#[command(name = "dosha-selftest")]
#[command(about = "Check a trained dosha model against curated cases")]
struct SelfTestArgs {
    /// Directory holding the trained model artifacts
    #[arg(long, env = "DOSHA_MODEL_DIR", default_value = ".", value_name = "DIR")]
    model_dir: PathBuf,

    /// Where to write the JSON results
    #[arg(short, long, default_value = RESULTS_FILE, value_name = "FILE")]
    output: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = SelfTestArgs::parse();
    init_logger(args.verbose.max(1));

    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run<W: Write>(args: &SelfTestArgs, out: &mut W) -> Result<()> {
    let mut suite = SelfTestSuite::new(ArtifactPaths::in_dir(&args.model_dir));
    suite.run(out)?;
    write_results(&args.output, suite.records())?;
    writeln!(out, "\nDetailed results saved to: {}", args.output.display())?;
    Ok(())
}
