//! Environment sources.
//!
//! The loader reads through [`EnvSource`] so the same code path serves the
//! real process environment and in-memory maps.

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    /// Values that are not valid unicode count as unset.
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
