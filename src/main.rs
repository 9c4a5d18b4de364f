//! r0dl1 CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: init logging, parse args,
//! and delegate to the runner. A configuration-file failure is logged and
//! mapped to exit code 1; everything else propagates as an ordinary error.
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => Ok(()),
        Err(e @ cli::AppError::Config(_)) => {
            tracing::error!("Configuration file could not be read: {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
