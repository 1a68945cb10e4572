//! Common building blocks shared by the settings loader and its consumers.
//!
//! This crate provides:
//! - Configuration records with their deployment defaults
//! - Database connection URL parsing
//! - Unified error handling

pub mod config;
pub mod constants;
pub mod database;
pub mod error;

pub use config::*;
pub use database::DatabaseConfig;
pub use error::{SettingsError, SettingsResult};
