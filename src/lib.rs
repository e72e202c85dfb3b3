pub mod cli;
pub mod config;
pub mod myths; // Offline myth checker

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use myths::{classify, MythEngine, MythResult, Verdict};

pub fn run() -> ExitCode {
    // Initialize tracing on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = cli::Cli::parse();
    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Myth check failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
