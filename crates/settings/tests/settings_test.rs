//! Integration tests for settings resolution.
//!
//! Environments are in-memory maps so tests never touch the process
//! environment and can run in parallel.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use settings_lib::config::constants::RECOGNIZED_VARS;
use settings_lib::config::parse_debug;
use settings_lib::{EnvSource, Settings, SettingsError};

// =============================================================================
// Helpers
// =============================================================================

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn load(pairs: &[(&str, &str)]) -> Settings {
    Settings::load(&env(pairs), Path::new("/srv/truck_signs")).unwrap()
}

/// Environment that sets every recognized variable to a non-default value.
fn full_env() -> HashMap<String, String> {
    env(&[
        ("SECRET_KEY", "prod-signing-key-0123456789abcdef"),
        ("DEBUG", "True"),
        ("DATABASE_URL", "postgres://u:p@h:5432/d"),
        ("CLOUD_NAME", "trucksigns"),
        ("CLOUD_API_KEY", "987654"),
        ("CLOUD_API_SECRET", "cloudsecret"),
        ("STRIPE_PUBLISHABLE_KEY", "pk_test_abc"),
        ("STRIPE_SECRET_KEY", "sk_test_abc"),
        ("CURRENT_ADMIN_DOMAIN", "admin.trucksigns.example"),
        ("EMAIL_ADMIN", "ops@trucksigns.example"),
        ("EMAIL_HOST_USER", "mailer@trucksigns.example"),
        ("EMAIL_HOST_PASSWORD", "mailpass"),
    ])
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_unset_environment_yields_defaults() {
    let settings = load(&[]);

    assert!(settings.uses_default_secret_key());
    assert!(!settings.debug);

    assert_eq!(settings.database.engine, "django.db.backends.postgresql");
    assert_eq!(settings.database.user, "postgres");
    assert_eq!(settings.database.password, "postgres");
    assert_eq!(settings.database.host, "db");
    assert_eq!(settings.database.port, Some(5432));
    assert_eq!(settings.database.name, "truck_signs_db");

    assert_eq!(settings.cloud_storage.cloud_name, "");
    assert_eq!(settings.cloud_storage.api_key, "");
    assert_eq!(settings.cloud_storage.api_secret, "");
    assert_eq!(
        settings.default_file_storage,
        "cloudinary_storage.storage.MediaCloudinaryStorage"
    );

    assert_eq!(settings.payments.publishable_key, "");
    assert_eq!(settings.payments.secret_key, "");

    assert_eq!(settings.admin.domain, "localhost:8000");
    assert_eq!(settings.admin.email, "admin@example.com");

    assert_eq!(settings.email.user, "");
    assert_eq!(settings.email.password, "");
}

#[test]
fn test_every_recognized_variable_overrides_its_default() {
    let settings = Settings::load(&full_env(), Path::new("/srv/truck_signs")).unwrap();

    assert_eq!(
        settings.secret_key_bytes(),
        b"prod-signing-key-0123456789abcdef"
    );
    assert!(settings.debug);
    assert_eq!(settings.database.host, "h");
    assert_eq!(settings.cloud_storage.cloud_name, "trucksigns");
    assert_eq!(settings.cloud_storage.api_key, "987654");
    assert_eq!(settings.cloud_storage.api_secret, "cloudsecret");
    assert_eq!(settings.payments.publishable_key, "pk_test_abc");
    assert_eq!(settings.payments.secret_key, "sk_test_abc");
    assert_eq!(settings.admin.domain, "admin.trucksigns.example");
    assert_eq!(settings.admin.email, "ops@trucksigns.example");
    assert_eq!(settings.email.user, "mailer@trucksigns.example");
    assert_eq!(settings.email.password, "mailpass");
}

#[test]
fn test_unsetting_one_variable_restores_only_that_default() {
    let defaults = load(&[]);

    for name in RECOGNIZED_VARS {
        let mut env = full_env();
        env.remove(*name);
        let settings = Settings::load(&env, Path::new("/srv/truck_signs")).unwrap();

        match *name {
            "SECRET_KEY" => assert!(settings.uses_default_secret_key()),
            "DEBUG" => assert!(!settings.debug),
            "DATABASE_URL" => assert_eq!(settings.database, defaults.database),
            "CLOUD_NAME" => assert_eq!(settings.cloud_storage.cloud_name, ""),
            "CLOUD_API_KEY" => assert_eq!(settings.cloud_storage.api_key, ""),
            "CLOUD_API_SECRET" => assert_eq!(settings.cloud_storage.api_secret, ""),
            "STRIPE_PUBLISHABLE_KEY" => assert_eq!(settings.payments.publishable_key, ""),
            "STRIPE_SECRET_KEY" => assert_eq!(settings.payments.secret_key, ""),
            "CURRENT_ADMIN_DOMAIN" => assert_eq!(settings.admin.domain, defaults.admin.domain),
            "EMAIL_ADMIN" => assert_eq!(settings.admin.email, defaults.admin.email),
            "EMAIL_HOST_USER" => assert_eq!(settings.email.user, ""),
            "EMAIL_HOST_PASSWORD" => assert_eq!(settings.email.password, ""),
            other => panic!("untested variable {}", other),
        }
    }
}

// =============================================================================
// DEBUG coercion
// =============================================================================

#[test]
fn test_debug_is_true_only_for_case_insensitive_true() {
    let cases = [
        ("true", true),
        ("True", true),
        ("TRUE", true),
        ("tRuE", true),
        ("False", false),
        ("false", false),
        ("1", false),
        ("yes", false),
        ("on", false),
        ("ture", false),
        ("true ", false),
        ("", false),
    ];

    for (value, expected) in cases {
        let settings = load(&[("DEBUG", value)]);
        assert_eq!(settings.debug, expected, "DEBUG={:?}", value);
        assert_eq!(parse_debug(Some(value)), expected);
    }

    assert!(!load(&[]).debug);
}

// =============================================================================
// Database
// =============================================================================

#[test]
fn test_database_url_is_decomposed() {
    let settings = load(&[("DATABASE_URL", "postgres://u:p@h:5432/d")]);

    assert_eq!(settings.database.host, "h");
    assert_eq!(settings.database.port, Some(5432));
    assert_eq!(settings.database.name, "d");
    assert_eq!(settings.database.user, "u");
    assert_eq!(settings.database.password, "p");
}

#[test]
fn test_sqlite_database_url() {
    let settings = load(&[("DATABASE_URL", "sqlite:////srv/truck_signs/db.sqlite3")]);

    assert_eq!(settings.database.engine, "django.db.backends.sqlite3");
    assert_eq!(settings.database.name, "/srv/truck_signs/db.sqlite3");
    assert_eq!(settings.database.port, None);
}

#[test]
fn test_malformed_database_url_is_fatal() {
    let result = Settings::load(&env(&[("DATABASE_URL", "postgres://u:p@h:notaport/d")]), Path::new("/"));
    assert!(matches!(result, Err(SettingsError::InvalidDatabaseUrl { .. })));

    let result = Settings::load(&env(&[("DATABASE_URL", "")]), Path::new("/"));
    assert!(matches!(result, Err(SettingsError::InvalidDatabaseUrl { .. })));

    let result = Settings::load(&env(&[("DATABASE_URL", "mongodb://h/d")]), Path::new("/"));
    assert!(matches!(result, Err(SettingsError::UnsupportedScheme(_))));
}

// =============================================================================
// Fixed settings
// =============================================================================

#[test]
fn test_static_and_media_are_independent_of_environment() {
    for settings in [load(&[]), Settings::load(&full_env(), Path::new("/srv/truck_signs")).unwrap()] {
        assert_eq!(settings.static_files.url, "/static/");
        assert_eq!(settings.media_files.url, "/media/");
        assert_eq!(settings.static_files.root, PathBuf::from("/srv/truck_signs/static/"));
        assert_eq!(settings.media_files.root, PathBuf::from("/srv/truck_signs/media"));
    }
}

#[test]
fn test_hosts_and_origins_are_fixed() {
    let mut env = full_env();
    env.insert("ALLOWED_HOSTS".to_string(), "evil.example".to_string());
    env.insert("CORS_ALLOWED_ORIGINS".to_string(), "http://evil.example".to_string());
    let settings = Settings::load(&env, Path::new("/srv/truck_signs")).unwrap();

    assert_eq!(settings.allowed_hosts, vec!["0.0.0.0", "localhost", "127.0.0.1", "web"]);
    assert_eq!(
        settings.cors_allowed_origins,
        vec![
            "http://localhost:3000",
            "http://127.0.0.1:3000",
            "http://localhost:8000",
            "http://127.0.0.1:8000",
        ]
    );
}

#[test]
fn test_email_transport_is_fixed() {
    let settings = load(&[("EMAIL_HOST_USER", "someone")]);

    assert_eq!(settings.email.backend, "django.core.mail.backends.smtp.EmailBackend");
    assert_eq!(settings.email.host, "smtp.gmail.com");
    assert_eq!(settings.email.port, 587);
    assert!(settings.email.use_tls);
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_loading_twice_yields_identical_snapshots() {
    let env = full_env();
    let first = Settings::load(&env, Path::new("/srv/truck_signs")).unwrap();
    let second = Settings::load(&env, Path::new("/srv/truck_signs")).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
    assert_eq!(format!("{:?}", first), format!("{:?}", second));
}

#[test]
fn test_source_type_does_not_change_snapshot() {
    let hash = full_env();
    let tree: BTreeMap<String, String> = hash.clone().into_iter().collect();
    let dynamic: &dyn EnvSource = &hash;

    let from_hash = Settings::load(&hash, Path::new("/app")).unwrap();
    let from_tree = Settings::load(&tree, Path::new("/app")).unwrap();
    let from_dyn = Settings::load(dynamic, Path::new("/app")).unwrap();

    assert_eq!(from_hash, from_tree);
    assert_eq!(from_hash, from_dyn);
}
