//! Tests for the Moodlift configuration system.

use std::sync::Mutex;

use moodlift_core::config::{CliOverrides, LogFormat, MoodliftConfig};
use moodlift_core::constants::{DEFAULT_DATABASE_PATH, DEFAULT_MESSAGE};
use moodlift_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear MOODLIFT_ env vars and point HOME at an empty directory so the
/// developer's own user config never leaks into a test.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "MOODLIFT_STORAGE_DATABASE_PATH",
        "MOODLIFT_STORAGE_DEFAULT_MESSAGE",
        "MOODLIFT_STORAGE_SEED_ON_OPEN",
        "MOODLIFT_LOG_LEVEL",
        "MOODLIFT_LOG_FORMAT",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = MoodliftConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.storage.effective_database_path(), DEFAULT_DATABASE_PATH);
    assert_eq!(config.storage.effective_default_message(), DEFAULT_MESSAGE);
    assert!(config.storage.effective_seed_on_open());
    assert_eq!(config.logging.effective_level(), "warn");
    assert_eq!(config.logging.effective_format(), LogFormat::Text);
}

#[test]
fn four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".moodlift")).unwrap();
    std::fs::write(
        home.path().join(".moodlift").join("config.toml"),
        r#"
[storage]
database_path = "user.db"
default_message = "from user"

[logging]
format = "json"
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("moodlift.toml"),
        r#"
[storage]
database_path = "project.db"
seed_on_open = false

[logging]
level = "info"
"#,
    )
    .unwrap();

    std::env::set_var("MOODLIFT_LOG_LEVEL", "debug");

    let cli = CliOverrides {
        database_path: Some("cli.db".to_string()),
        ..Default::default()
    };
    let config = MoodliftConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats project and user.
    assert_eq!(config.storage.effective_database_path(), "cli.db");
    // Env beats project.
    assert_eq!(config.logging.effective_level(), "debug");
    // Project beats defaults.
    assert!(!config.storage.effective_seed_on_open());
    // User layer survives where nothing above overrides it.
    assert_eq!(config.storage.effective_default_message(), "from user");
    assert_eq!(config.logging.effective_format(), LogFormat::Json);

    std::env::remove_var("MOODLIFT_LOG_LEVEL");
}

#[test]
fn invalid_toml_syntax_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("moodlift.toml"), "this is not valid toml {{{{").unwrap();

    match MoodliftConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("moodlift.toml")),
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn invalid_values_fail_validation() {
    let config = MoodliftConfig::from_toml(
        r#"
[storage]
default_message = "   "
"#,
    )
    .unwrap();
    match MoodliftConfig::validate(&config).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "storage.default_message")
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }

    let config = MoodliftConfig::from_toml("[logging]\nlevel = \"loud\"\n").unwrap();
    assert!(matches!(
        MoodliftConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));

    // Full directives are passed through to the filter untouched.
    let config =
        MoodliftConfig::from_toml("[logging]\nlevel = \"moodlift_classifier=debug\"\n").unwrap();
    assert!(MoodliftConfig::validate(&config).is_ok());
}

#[test]
fn env_seed_flag_ignores_garbage() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("MOODLIFT_STORAGE_SEED_ON_OPEN", "perhaps");
    let dir = tempdir();
    let config = MoodliftConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.storage.seed_on_open, None);

    std::env::set_var("MOODLIFT_STORAGE_SEED_ON_OPEN", "false");
    let config = MoodliftConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.storage.seed_on_open, Some(false));

    std::env::remove_var("MOODLIFT_STORAGE_SEED_ON_OPEN");
}

#[test]
fn toml_roundtrip_preserves_values() {
    let config = MoodliftConfig::from_toml(
        r#"
[storage]
database_path = "/var/lib/moodlift/quotes.db"

[logging]
level = "info"
format = "json"
"#,
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let back = MoodliftConfig::from_toml(&text).unwrap();
    assert_eq!(
        back.storage.database_path.as_deref(),
        Some("/var/lib/moodlift/quotes.db")
    );
    assert_eq!(back.logging.format, Some(LogFormat::Json));
}
