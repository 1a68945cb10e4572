//! Truck Signs settings - deployment configuration for the web backend.
//!
//! Resolves the environment into a single immutable [`Settings`] snapshot
//! that is built once at startup and handed to every consumer.
//!
//! # Layout
//!
//! - **config**: environment source, loader, constants and the audit
//! - **cli**: command-line interface
//! - **commands**: CLI command implementations
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the resolved (redacted) settings
//! cargo run -p settings -- show --format json
//!
//! # Report insecure or missing values, failing on any finding
//! cargo run -p settings -- check --strict
//! ```

pub mod cli;
pub mod commands;
pub mod config;

// Re-export commonly used types at crate root
pub use common::{SettingsError, SettingsResult};
pub use config::{AuditFinding, EnvSource, ProcessEnv, Settings};
