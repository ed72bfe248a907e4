//! Environment-over-file precedence tests through loaded `Config`
//! handles, including one pass against the real process environment.

use std::sync::Arc;

use serial_test::serial;

use crate::env::MemoryEnv;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::MissingKeyPolicy;

use super::env_lock;
use super::load_tests::fixture_store;

#[test]
fn test_env_var_overrides_file_value() {
    let env = MemoryEnv::new().with_var("TEST_KEY", "override");

    let config = ConfigLoader::new()
        .with_store(Arc::new(fixture_store()))
        .with_env(Arc::new(env))
        .load()
        .unwrap();

    assert_eq!(config.get("TEST_KEY").unwrap(), "override");
    // The file map itself is untouched by the override.
    assert_eq!(config.file_value("TEST_KEY"), Some("123"));
}

#[test]
fn test_empty_env_var_falls_through_to_file_value() {
    let env = MemoryEnv::new().with_var("TEST_KEY", "");

    let config = ConfigLoader::new()
        .with_store(Arc::new(fixture_store()))
        .with_env(Arc::new(env))
        .load()
        .unwrap();

    assert_eq!(config.get("TEST_KEY").unwrap(), "123");
}

#[test]
fn test_env_var_supplies_keys_absent_from_file() {
    let env = MemoryEnv::new().with_var("ONLY_IN_ENV", "here");

    let config = ConfigLoader::new()
        .with_store(Arc::new(fixture_store()))
        .with_env(Arc::new(env))
        .load()
        .unwrap();

    assert_eq!(config.get("ONLY_IN_ENV").unwrap(), "here");
    assert_eq!(config.file_value("ONLY_IN_ENV"), None);
}

#[test]
fn test_missing_key_policy_selected_at_load_time() {
    let store = Arc::new(fixture_store());

    let strict = ConfigLoader::new()
        .with_store(store.clone())
        .with_env(Arc::new(MemoryEnv::new()))
        .load()
        .unwrap();
    let lenient = ConfigLoader::new()
        .with_store(store)
        .with_env(Arc::new(MemoryEnv::new()))
        .with_missing_key_policy(MissingKeyPolicy::Empty)
        .load()
        .unwrap();

    assert!(matches!(
        strict.get("ABSENT").unwrap_err(),
        ConfigError::MissingKey(key) if key == "ABSENT"
    ));
    assert_eq!(lenient.get("ABSENT").unwrap(), "");
    assert_eq!(lenient.get_as_int("ABSENT").unwrap(), 0);
}

#[test]
fn test_get_as_int_resolves_with_env_precedence() {
    let env = MemoryEnv::new().with_var("TEST_KEY", "999");

    let config = ConfigLoader::new()
        .with_store(Arc::new(fixture_store()))
        .with_env(Arc::new(env))
        .load()
        .unwrap();

    assert_eq!(config.get_as_int("TEST_KEY").unwrap(), 999);
    assert_eq!(config.get_as_int("TEST_KEY2").unwrap(), 456);
}

#[test]
#[serial]
fn test_process_environment_overrides_file_value() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("TEST_KEY", Some("from-process-env"))], || {
        let config = ConfigLoader::new()
            .with_store(Arc::new(fixture_store()))
            .load()
            .unwrap();

        assert_eq!(config.get("TEST_KEY").unwrap(), "from-process-env");
        assert_eq!(config.get("TEST_KEY2").unwrap(), "456");
    });
}
