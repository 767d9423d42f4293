//! evemu-rs - Main Entry Point
//!
//! Merges or loops evemu event recordings. Recording data goes to stdout;
//! logs and the completion summary go to stderr.

use std::process::ExitCode;

use anyhow::Context;
use evemu_rs::config::ToolConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Config is read before logging exists, so report any failure afterwards
    let (config, config_error) = match ToolConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ToolConfig::default(), Some(e)),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ToolConfig) -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    tracing::debug!("Arguments: {:?}", args);

    evemu_rs::cli::run(&args, config).context("evemu-rs failed")
}
