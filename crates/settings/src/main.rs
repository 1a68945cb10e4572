//! Truck Signs settings - Application entry point
//!
//! CLI-based entry point that resolves the settings once and dispatches to
//! the requested command.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings_lib::{
    cli::{Cli, Commands},
    commands, Settings, SettingsResult,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let settings = match resolve_base_dir(cli.base_dir).and_then(|dir| Settings::from_env(&dir)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(code = e.code(), "Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, &settings),
        Commands::Check(args) => {
            let report = commands::check::execute(args, &settings);
            if report.failed() {
                std::process::exit(2);
            }
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Use the given base directory, or the working directory.
fn resolve_base_dir(base_dir: Option<PathBuf>) -> SettingsResult<PathBuf> {
    match base_dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
