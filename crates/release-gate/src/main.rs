//! Release gate CLI - decide whether a CI deploy stage should run.

use clap::Parser;
use release_gate::config::GateConfig;
use release_gate::gate;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "release-gate")]
#[command(
    author,
    version,
    about = "Check that the environment and tag state are consistent before deploying"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Package manifest to compare the tag against
    #[arg(long, default_value = "Cargo.toml")]
    manifest: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = GateConfig::from_env(cli.manifest);
    let outcome = gate::evaluate(&config);

    outcome.report();
    std::process::exit(outcome.exit_code());
}
