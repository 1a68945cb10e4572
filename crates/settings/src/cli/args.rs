//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Truck Signs settings - resolve and inspect deployment configuration
#[derive(Parser, Debug)]
#[command(name = "truck-signs-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base directory static and media roots are joined onto; a `.env` file
    /// there takes precedence over one found from the working directory
    /// (defaults to the working directory)
    #[arg(long, global = true, env = "ROOT_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved settings with secrets masked
    Show(ShowArgs),

    /// Report insecure or missing settings
    Check(CheckArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Output formats for the show command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// `NAME=value` lines using the framework's setting names
    Env,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Exit with a failure status when any finding is reported
    #[arg(long)]
    pub strict: bool,
}
