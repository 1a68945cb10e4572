//! Application settings loaded from environment variables.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use common::constants::{
    DEFAULT_ADMIN_DOMAIN, DEFAULT_ADMIN_EMAIL, DEFAULT_DATABASE_URL, DEFAULT_DEBUG,
    DEFAULT_FILE_STORAGE, DEFAULT_SECRET_KEY, REDACTED,
};
use common::{
    AdminConfig, CloudStorageConfig, DatabaseConfig, EmailConfig, PaymentConfig,
    SettingsResult, StaticFilesConfig,
};

use super::constants::{
    is_secret_var, ALLOWED_HOSTS, CORS_ALLOWED_ORIGINS, DEBUG_TRUE, ENV_CLOUD_API_KEY,
    ENV_CLOUD_API_SECRET, ENV_CLOUD_NAME, ENV_CURRENT_ADMIN_DOMAIN, ENV_DATABASE_URL, ENV_DEBUG,
    ENV_EMAIL_ADMIN, ENV_EMAIL_HOST_PASSWORD, ENV_EMAIL_HOST_USER, ENV_SECRET_KEY,
    ENV_STRIPE_PUBLISHABLE_KEY, ENV_STRIPE_SECRET_KEY,
};
use super::env::{EnvSource, ProcessEnv};

/// Resolved configuration snapshot.
///
/// Built once per process and passed to consumers by reference. There is no
/// mutating API; a changed environment means loading a new snapshot.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(skip_serializing)]
    secret_key: String,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub database: DatabaseConfig,
    pub cloud_storage: CloudStorageConfig,
    pub default_file_storage: String,
    pub payments: PaymentConfig,
    pub admin: AdminConfig,
    pub email: EmailConfig,
    pub cors_allowed_origins: Vec<String>,
    pub static_files: StaticFilesConfig,
    pub media_files: StaticFilesConfig,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("secret_key", &REDACTED)
            .field("debug", &self.debug)
            .field("allowed_hosts", &self.allowed_hosts)
            .field("database", &self.database)
            .field("cloud_storage", &self.cloud_storage)
            .field("default_file_storage", &self.default_file_storage)
            .field("payments", &self.payments)
            .field("admin", &self.admin)
            .field("email", &self.email)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("static_files", &self.static_files)
            .field("media_files", &self.media_files)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// A `.env` file is applied first (see [`load_dotenv`]); variables
    /// already set in the process win over it.
    ///
    /// # Errors
    /// Fails only when `DATABASE_URL` cannot be parsed.
    pub fn from_env(base_dir: &Path) -> SettingsResult<Self> {
        load_dotenv(base_dir);
        Self::load(&ProcessEnv, base_dir)
    }

    /// Resolve every setting from `env`, joining file roots onto `base_dir`.
    ///
    /// Unset variables fall back to their defaults without error.
    ///
    /// # Errors
    /// Fails only when `DATABASE_URL` cannot be parsed.
    pub fn load<E: EnvSource + ?Sized>(env: &E, base_dir: &Path) -> SettingsResult<Self> {
        let lookup = Lookup { env };

        let settings = Self {
            secret_key: lookup.get_or(ENV_SECRET_KEY, DEFAULT_SECRET_KEY),
            debug: parse_debug(Some(lookup.get_or(ENV_DEBUG, DEFAULT_DEBUG).as_str())),
            allowed_hosts: to_strings(ALLOWED_HOSTS),
            database: DatabaseConfig::parse(
                &lookup.get_or(ENV_DATABASE_URL, DEFAULT_DATABASE_URL),
            )?,
            cloud_storage: CloudStorageConfig {
                cloud_name: lookup.get_or(ENV_CLOUD_NAME, ""),
                api_key: lookup.get_or(ENV_CLOUD_API_KEY, ""),
                api_secret: lookup.get_or(ENV_CLOUD_API_SECRET, ""),
            },
            default_file_storage: DEFAULT_FILE_STORAGE.to_string(),
            payments: PaymentConfig {
                publishable_key: lookup.get_or(ENV_STRIPE_PUBLISHABLE_KEY, ""),
                secret_key: lookup.get_or(ENV_STRIPE_SECRET_KEY, ""),
            },
            admin: AdminConfig {
                domain: lookup.get_or(ENV_CURRENT_ADMIN_DOMAIN, DEFAULT_ADMIN_DOMAIN),
                email: lookup.get_or(ENV_EMAIL_ADMIN, DEFAULT_ADMIN_EMAIL),
            },
            email: EmailConfig::smtp(
                lookup.get_or(ENV_EMAIL_HOST_USER, ""),
                lookup.get_or(ENV_EMAIL_HOST_PASSWORD, ""),
            ),
            cors_allowed_origins: to_strings(CORS_ALLOWED_ORIGINS),
            static_files: StaticFilesConfig::static_files(base_dir),
            media_files: StaticFilesConfig::media_files(base_dir),
        };

        tracing::debug!(debug = settings.debug, "Settings resolved");
        Ok(settings)
    }

    /// Signing key bytes for the framework's cryptographic signing.
    pub fn secret_key_bytes(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    /// Whether the placeholder signing key is in use.
    pub fn uses_default_secret_key(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Base directory the static and media roots were joined onto.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.media_files.root.parent().map(Path::to_path_buf)
    }

    /// Framework setting names mapped to printable values, secrets masked.
    pub fn to_env_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("SECRET_KEY", REDACTED.to_string()),
            ("DEBUG", if self.debug { "True" } else { "False" }.to_string()),
            ("ALLOWED_HOSTS", self.allowed_hosts.join(",")),
            ("DATABASE_URL", self.database.masked_url()),
            ("DATABASE_ENGINE", self.database.engine.clone()),
            ("CLOUD_NAME", self.cloud_storage.cloud_name.clone()),
            ("CLOUD_API_KEY", self.cloud_storage.api_key.clone()),
            ("CLOUD_API_SECRET", mask(&self.cloud_storage.api_secret)),
            ("DEFAULT_FILE_STORAGE", self.default_file_storage.clone()),
            ("STRIPE_PUBLISHABLE_KEY", self.payments.publishable_key.clone()),
            ("STRIPE_SECRET_KEY", mask(&self.payments.secret_key)),
            ("CURRENT_ADMIN_DOMAIN", self.admin.domain.clone()),
            ("EMAIL_ADMIN", self.admin.email.clone()),
            ("EMAIL_BACKEND", self.email.backend.clone()),
            ("EMAIL_HOST", self.email.host.clone()),
            ("EMAIL_PORT", self.email.port.to_string()),
            ("EMAIL_USE_TLS", if self.email.use_tls { "True" } else { "False" }.to_string()),
            ("EMAIL_HOST_USER", self.email.user.clone()),
            ("EMAIL_HOST_PASSWORD", mask(&self.email.password)),
            ("CORS_ALLOWED_ORIGINS", self.cors_allowed_origins.join(",")),
            ("STATIC_URL", self.static_files.url.clone()),
            ("STATIC_ROOT", self.static_files.root.display().to_string()),
            ("MEDIA_URL", self.media_files.url.clone()),
            ("MEDIA_ROOT", self.media_files.root.display().to_string()),
        ]
    }
}

/// Apply `<base_dir>/.env`, or else the first `.env` found from the working
/// directory upwards. Returns the file that was applied.
pub fn load_dotenv(base_dir: &Path) -> Option<PathBuf> {
    let candidate = base_dir.join(".env");
    let result = if candidate.is_file() {
        dotenvy::from_path(&candidate).map(|()| candidate)
    } else {
        dotenvy::dotenv()
    };

    match result {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
            None
        }
    }
}

/// Coerce a `DEBUG` value: `true` only for a case-insensitive `"true"`.
pub fn parse_debug(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.to_lowercase() == DEBUG_TRUE)
}

/// Environment lookup that logs every fallback.
struct Lookup<'a, E: EnvSource + ?Sized> {
    env: &'a E,
}

impl<E: EnvSource + ?Sized> Lookup<'_, E> {
    fn get_or(&self, key: &str, default: &str) -> String {
        match self.env.var(key) {
            Some(value) => value,
            None => {
                if is_secret_var(key) || default.is_empty() {
                    tracing::debug!("{} not set, using default", key);
                } else {
                    tracing::debug!("{} not set, using default '{}'", key, default);
                }
                default.to_string()
            }
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}
