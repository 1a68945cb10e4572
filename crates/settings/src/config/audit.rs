//! Insecure-default audit.
//!
//! The loader accepts every value so a misconfigured deployment still boots.
//! This module reports what such a deployment is running with; acting on the
//! report is left to the operator.

use std::fmt;

use serde::Serialize;

use common::constants::{DEFAULT_DATABASE_PASSWORD, INSECURE_SECRET_KEY_PREFIX};

use super::settings::Settings;

/// A setting that is insecure or non-functional for production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditFinding {
    DefaultSecretKey,
    DebugEnabled,
    MissingCloudStorageCredentials,
    MissingPaymentKeys,
    MissingEmailCredentials,
    DefaultDatabaseCredentials,
}

impl AuditFinding {
    /// Stable finding code
    pub fn code(&self) -> &'static str {
        match self {
            AuditFinding::DefaultSecretKey => "DEFAULT_SECRET_KEY",
            AuditFinding::DebugEnabled => "DEBUG_ENABLED",
            AuditFinding::MissingCloudStorageCredentials => "MISSING_CLOUD_STORAGE_CREDENTIALS",
            AuditFinding::MissingPaymentKeys => "MISSING_PAYMENT_KEYS",
            AuditFinding::MissingEmailCredentials => "MISSING_EMAIL_CREDENTIALS",
            AuditFinding::DefaultDatabaseCredentials => "DEFAULT_DATABASE_CREDENTIALS",
        }
    }

    /// Setting (or settings group) the finding is about
    pub fn setting(&self) -> &'static str {
        match self {
            AuditFinding::DefaultSecretKey => "SECRET_KEY",
            AuditFinding::DebugEnabled => "DEBUG",
            AuditFinding::MissingCloudStorageCredentials => "CLOUDINARY_STORAGE",
            AuditFinding::MissingPaymentKeys => "STRIPE_SECRET_KEY",
            AuditFinding::MissingEmailCredentials => "EMAIL_HOST_USER",
            AuditFinding::DefaultDatabaseCredentials => "DATABASE_URL",
        }
    }
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            AuditFinding::DefaultSecretKey => "signing key is empty or an insecure development key",
            AuditFinding::DebugEnabled => "debug error pages are enabled",
            AuditFinding::MissingCloudStorageCredentials => {
                "media storage credentials are incomplete; uploads will fail"
            }
            AuditFinding::MissingPaymentKeys => {
                "payment keys are incomplete; payment calls will fail at the provider"
            }
            AuditFinding::MissingEmailCredentials => {
                "SMTP credentials are incomplete; outgoing mail will fail"
            }
            AuditFinding::DefaultDatabaseCredentials => "database uses the default password",
        };
        write!(f, "{}: {}", self.setting(), message)
    }
}

impl Settings {
    /// Report insecure or missing values. Never fails.
    pub fn audit(&self) -> Vec<AuditFinding> {
        let mut findings = Vec::new();

        if self.uses_default_secret_key()
            || self.secret_key().is_empty()
            || self.secret_key().starts_with(INSECURE_SECRET_KEY_PREFIX)
        {
            findings.push(AuditFinding::DefaultSecretKey);
        }
        if self.debug {
            findings.push(AuditFinding::DebugEnabled);
        }
        if !self.cloud_storage.is_configured() {
            findings.push(AuditFinding::MissingCloudStorageCredentials);
        }
        if !self.payments.is_configured() {
            findings.push(AuditFinding::MissingPaymentKeys);
        }
        if !self.email.has_credentials() {
            findings.push(AuditFinding::MissingEmailCredentials);
        }
        if self.database.password == DEFAULT_DATABASE_PASSWORD {
            findings.push(AuditFinding::DefaultDatabaseCredentials);
        }

        findings
    }
}
