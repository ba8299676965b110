//! Dosha HTTP server binary.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use dosha::cli::args::init_logger;
use dosha::config::ArtifactPaths;
use dosha::error::Result;
use dosha::predictor::Predictor;

/// Serve dosha predictions over HTTP
#[derive(Parser, Debug)]
#[command(name = "dosha-server")]
#[command(about = "JSON prediction service for the dosha classifier")]
struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Directory holding the trained model artifacts
    #[arg(long, env = "DOSHA_MODEL_DIR", default_value = ".", value_name = "DIR")]
    model_dir: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();
    // Startup and bind messages are informational.
    init_logger(args.verbose.saturating_add(2));

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: ServerArgs) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address {}:{}: {e}", args.host, args.port))?;

    let predictor = Predictor::from_artifacts(&ArtifactPaths::in_dir(&args.model_dir));
    dosha::server::serve(predictor, addr).await
}
