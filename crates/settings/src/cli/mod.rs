//! CLI module - Command-line interface for the settings loader.
//!
//! Provides commands for:
//! - `show` - Print the resolved settings
//! - `check` - Audit the settings for insecure defaults

pub mod args;

pub use args::{Cli, Commands};
