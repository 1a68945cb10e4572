//! Settings configuration module
//!
//! Resolves environment variables into the immutable settings snapshot.

mod audit;
pub mod constants;
mod env;
mod settings;

pub use audit::AuditFinding;
pub use env::{EnvSource, ProcessEnv};
pub use settings::{load_dotenv, parse_debug, Settings};
