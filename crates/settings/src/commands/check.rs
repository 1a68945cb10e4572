//! Check command - Audit the settings for insecure defaults.

use crate::cli::args::CheckArgs;
use crate::config::{AuditFinding, Settings};

/// Result of a settings audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub findings: Vec<AuditFinding>,
    pub strict: bool,
}

impl CheckReport {
    /// Whether the process should exit with a failure status.
    pub fn failed(&self) -> bool {
        self.strict && !self.findings.is_empty()
    }
}

/// Execute the check command
pub fn execute(args: CheckArgs, settings: &Settings) -> CheckReport {
    tracing::info!("Auditing settings...");

    let findings = settings.audit();
    for finding in &findings {
        tracing::warn!(code = finding.code(), "{}", finding);
    }

    if findings.is_empty() {
        tracing::info!("No insecure settings found");
    } else {
        tracing::info!("{} finding(s) reported", findings.len());
    }

    CheckReport {
        findings,
        strict: args.strict,
    }
}
