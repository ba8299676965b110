//! Dosha CLI binary.

use std::process;

use clap::Parser;

use dosha::cli::args::*;
use dosha::cli::commands::*;

fn main() {
    let args = DoshaArgs::parse();
    init_logger(args.verbosity());

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
