//! Shared configuration records.
//!
//! Secrets are skipped when serializing and redacted in `Debug` output so a
//! record can be logged or dumped without leaking credentials.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{
    DEFAULT_ADMIN_DOMAIN, DEFAULT_ADMIN_EMAIL, EMAIL_BACKEND, EMAIL_HOST, EMAIL_PORT,
    EMAIL_USE_TLS, MEDIA_DIR, MEDIA_URL, REDACTED, STATIC_DIR, STATIC_URL,
};

/// Redact a secret for `Debug` output, keeping "unset" visible.
pub(crate) fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        REDACTED
    }
}

/// Cloudinary media storage credentials.
///
/// Empty values disable the external upload path.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloudStorageConfig {
    pub cloud_name: String,
    pub api_key: String,
    #[serde(skip_serializing)]
    pub api_secret: String,
}

impl CloudStorageConfig {
    /// All three credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl fmt::Debug for CloudStorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudStorageConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &redact(&self.api_secret))
            .finish()
    }
}

/// Stripe payment keys.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentConfig {
    pub publishable_key: String,
    #[serde(skip_serializing)]
    pub secret_key: String,
}

impl PaymentConfig {
    /// Both keys are present.
    pub fn is_configured(&self) -> bool {
        !self.publishable_key.is_empty() && !self.secret_key.is_empty()
    }
}

impl fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("publishable_key", &self.publishable_key)
            .field("secret_key", &redact(&self.secret_key))
            .finish()
    }
}

/// Admin contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminConfig {
    /// Host (and port) the admin site is served from
    pub domain: String,
    /// Address notifications are sent to
    pub email: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_ADMIN_DOMAIN.to_string(),
            email: DEFAULT_ADMIN_EMAIL.to_string(),
        }
    }
}

/// Outgoing mail transport.
///
/// Backend, host, port and TLS are fixed; only the credentials come from the
/// environment.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EmailConfig {
    pub backend: String,
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl EmailConfig {
    /// Transport with the fixed SMTP settings and the given credentials.
    pub fn smtp(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            backend: EMAIL_BACKEND.to_string(),
            host: EMAIL_HOST.to_string(),
            port: EMAIL_PORT,
            use_tls: EMAIL_USE_TLS,
            user: user.into(),
            password: password.into(),
        }
    }

    /// SMTP credentials are present.
    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() && !self.password.is_empty()
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self::smtp("", "")
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("backend", &self.backend)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .field("user", &self.user)
            .field("password", &redact(&self.password))
            .finish()
    }
}

/// URL prefix and filesystem root for a file-serving location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticFilesConfig {
    pub url: String,
    pub root: PathBuf,
}

impl StaticFilesConfig {
    /// Collected static assets under `base_dir`.
    pub fn static_files(base_dir: &Path) -> Self {
        Self {
            url: STATIC_URL.to_string(),
            root: base_dir.join(STATIC_DIR),
        }
    }

    /// Uploaded media under `base_dir`.
    pub fn media_files(base_dir: &Path) -> Self {
        Self {
            url: MEDIA_URL.to_string(),
            root: base_dir.join(MEDIA_DIR),
        }
    }
}
