//! Deployment defaults.
//!
//! Every value here is what a process gets when the matching environment
//! variable is unset.

// =============================================================================
// Security
// =============================================================================

/// Placeholder signing key used when `SECRET_KEY` is unset
pub const DEFAULT_SECRET_KEY: &str = "django-insecure-change-me-in-production";

/// Prefix the framework uses to mark generated development keys
pub const INSECURE_SECRET_KEY_PREFIX: &str = "django-insecure-";

/// Literal fallback for `DEBUG` (coerces to `false`)
pub const DEFAULT_DEBUG: &str = "False";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (docker-compose `db` service)
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres:postgres@db:5432/truck_signs_db";

/// Password baked into [`DEFAULT_DATABASE_URL`]
pub const DEFAULT_DATABASE_PASSWORD: &str = "postgres";

/// Connections are closed at the end of each request by default
pub const DEFAULT_CONN_MAX_AGE: u64 = 0;

/// Name used by the framework for in-memory SQLite databases
pub const SQLITE_MEMORY_NAME: &str = ":memory:";

// =============================================================================
// Media storage (Cloudinary)
// =============================================================================

/// Storage backend used for uploaded media
pub const DEFAULT_FILE_STORAGE: &str = "cloudinary_storage.storage.MediaCloudinaryStorage";

// =============================================================================
// Admin
// =============================================================================

/// Default admin domain (local development server)
pub const DEFAULT_ADMIN_DOMAIN: &str = "localhost:8000";

/// Default admin contact address
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

// =============================================================================
// Email (SMTP)
// =============================================================================

/// SMTP mail backend identifier
pub const EMAIL_BACKEND: &str = "django.core.mail.backends.smtp.EmailBackend";

/// SMTP relay host
pub const EMAIL_HOST: &str = "smtp.gmail.com";

/// SMTP submission port (STARTTLS)
pub const EMAIL_PORT: u16 = 587;

/// STARTTLS is always on
pub const EMAIL_USE_TLS: bool = true;

// =============================================================================
// Static & media files
// =============================================================================

/// URL prefix for collected static assets
pub const STATIC_URL: &str = "/static/";

/// Directory (under the base dir) static assets are collected into
pub const STATIC_DIR: &str = "static/";

/// URL prefix for uploaded media
pub const MEDIA_URL: &str = "/media/";

/// Directory (under the base dir) uploaded media is stored in
pub const MEDIA_DIR: &str = "media";

// =============================================================================
// Redaction
// =============================================================================

/// Placeholder printed instead of secret values
pub const REDACTED: &str = "[REDACTED]";
