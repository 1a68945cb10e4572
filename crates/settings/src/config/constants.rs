//! Environment variable names and fixed settings.
//!
//! Defaults for the variables live in [`common::constants`].

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

pub const ENV_CLOUD_NAME: &str = "CLOUD_NAME";
pub const ENV_CLOUD_API_KEY: &str = "CLOUD_API_KEY";
pub const ENV_CLOUD_API_SECRET: &str = "CLOUD_API_SECRET";

pub const ENV_STRIPE_PUBLISHABLE_KEY: &str = "STRIPE_PUBLISHABLE_KEY";
pub const ENV_STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";

pub const ENV_CURRENT_ADMIN_DOMAIN: &str = "CURRENT_ADMIN_DOMAIN";
pub const ENV_EMAIL_ADMIN: &str = "EMAIL_ADMIN";

pub const ENV_EMAIL_HOST_USER: &str = "EMAIL_HOST_USER";
pub const ENV_EMAIL_HOST_PASSWORD: &str = "EMAIL_HOST_PASSWORD";

/// Every variable the loader reads, in resolution order
pub const RECOGNIZED_VARS: &[&str] = &[
    ENV_SECRET_KEY,
    ENV_DEBUG,
    ENV_DATABASE_URL,
    ENV_CLOUD_NAME,
    ENV_CLOUD_API_KEY,
    ENV_CLOUD_API_SECRET,
    ENV_STRIPE_PUBLISHABLE_KEY,
    ENV_STRIPE_SECRET_KEY,
    ENV_CURRENT_ADMIN_DOMAIN,
    ENV_EMAIL_ADMIN,
    ENV_EMAIL_HOST_USER,
    ENV_EMAIL_HOST_PASSWORD,
];

/// Variables whose values must never be logged or printed
pub const SECRET_VARS: &[&str] = &[
    ENV_SECRET_KEY,
    ENV_DATABASE_URL,
    ENV_CLOUD_API_SECRET,
    ENV_STRIPE_SECRET_KEY,
    ENV_EMAIL_HOST_PASSWORD,
];

/// Check if a variable holds a secret
pub fn is_secret_var(name: &str) -> bool {
    SECRET_VARS.contains(&name)
}

// =============================================================================
// Hosts & CORS
// =============================================================================

/// Host names the backend answers to (docker-compose service name included)
pub const ALLOWED_HOSTS: &[&str] = &["0.0.0.0", "localhost", "127.0.0.1", "web"];

/// Front-end origins allowed to make cross-origin requests
pub const CORS_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8000",
    "http://127.0.0.1:8000",
];

/// `DEBUG` is on only for this value (compared lowercase)
pub const DEBUG_TRUE: &str = "true";
