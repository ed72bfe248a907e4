//! Loaded configuration handle and value-resolution accessors.
//!
//! Responsibilities:
//! - Hold the parsed key/value map together with the environment
//!   collaborator it resolves against.
//! - Resolve reads with live-environment precedence: a NON-EMPTY
//!   environment variable always beats the file-sourced value.
//! - Apply the configured [`MissingKeyPolicy`] when a key is absent from
//!   both sources.
//!
//! Does NOT handle:
//! - Loading or profile selection (see `loader`).
//! - Populating the environment (see `loader::populate`).
//!
//! Invariants:
//! - An environment variable set to the empty string does NOT shadow the
//!   file value; only non-empty values take precedence.
//! - `must_get` / `must_get_as_int` panic on a miss regardless of policy.
//! - `Debug` prints the source file name and entry count, never values.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::env::EnvStore;
use crate::loader::ConfigError;

/// What a lookup miss (key in neither the environment nor the file map)
/// resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyPolicy {
    /// Return [`ConfigError::MissingKey`] (or [`ConfigError::IntConversion`]
    /// for integer reads).
    #[default]
    Error,
    /// Return the zero value: `""` for strings, `0` for integers.
    Empty,
}

/// A loaded configuration: the parsed file map plus the environment it is
/// resolved against.
///
/// Cheap to clone; the environment collaborator is shared behind an `Arc`.
#[derive(Clone)]
pub struct Config {
    values: HashMap<String, String>,
    source: String,
    env: Arc<dyn EnvStore>,
    missing_key: MissingKeyPolicy,
    context_key: String,
}

impl Config {
    pub(crate) fn new(
        values: HashMap<String, String>,
        source: String,
        env: Arc<dyn EnvStore>,
        missing_key: MissingKeyPolicy,
        context_key: String,
    ) -> Self {
        Self {
            values,
            source,
            env,
            missing_key,
            context_key,
        }
    }

    /// Policy-independent resolution: non-empty environment value first,
    /// then the file map.
    fn lookup(&self, key: &str) -> Option<String> {
        match self.env.get(key) {
            Some(value) if !value.is_empty() => Some(value),
            _ => self.values.get(key).cloned(),
        }
    }

    /// Look up a value by key.
    ///
    /// A non-empty environment variable named `key` wins over the file
    /// value; an empty or absent one falls through to the file map.
    ///
    /// # Errors
    ///
    /// Under [`MissingKeyPolicy::Error`], returns
    /// [`ConfigError::MissingKey`] when the key is in neither source.
    /// Under [`MissingKeyPolicy::Empty`] a miss is `Ok(String::new())`.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match self.lookup(key) {
            Some(value) => Ok(value),
            None => match self.missing_key {
                MissingKeyPolicy::Error => Err(ConfigError::MissingKey(key.to_string())),
                MissingKeyPolicy::Empty => Ok(String::new()),
            },
        }
    }

    /// Look up a value and convert it to a base-10 integer.
    ///
    /// Resolution order is identical to [`Config::get`].
    ///
    /// # Errors
    ///
    /// Under [`MissingKeyPolicy::Error`], a miss returns
    /// [`ConfigError::MissingKey`] and a present but non-numeric value
    /// returns [`ConfigError::IntConversion`]. Under
    /// [`MissingKeyPolicy::Empty`] both cases are `Ok(0)`.
    pub fn get_as_int(&self, key: &str) -> Result<i64, ConfigError> {
        let Some(value) = self.lookup(key) else {
            return match self.missing_key {
                MissingKeyPolicy::Error => Err(ConfigError::MissingKey(key.to_string())),
                MissingKeyPolicy::Empty => Ok(0),
            };
        };

        match value.parse::<i64>() {
            Ok(parsed) => Ok(parsed),
            Err(_) => match self.missing_key {
                MissingKeyPolicy::Error => Err(ConfigError::IntConversion {
                    key: key.to_string(),
                    value,
                }),
                MissingKeyPolicy::Empty => Ok(0),
            },
        }
    }

    /// Look up a required value.
    ///
    /// Intended for startup-time configuration the process cannot run
    /// without. Ignores the missing-key policy.
    ///
    /// # Panics
    ///
    /// Panics when the key is in neither the environment nor the file map.
    #[must_use]
    pub fn must_get(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(value) => value,
            None => {
                tracing::error!(key = %key, file = %self.source, "required config key missing");
                panic!("missing value in config: {key}");
            }
        }
    }

    /// Look up a required integer value.
    ///
    /// # Panics
    ///
    /// Panics when the key is missing or its value is not a base-10
    /// integer, regardless of the missing-key policy.
    #[must_use]
    pub fn must_get_as_int(&self, key: &str) -> i64 {
        let value = self.must_get(key);
        match value.parse::<i64>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::error!(key = %key, file = %self.source, "config value is not an integer");
                panic!("error converting config value to int with key: {key}");
            }
        }
    }

    /// The file-sourced value for `key`, ignoring the environment.
    #[must_use]
    pub fn file_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Name of the profile file this configuration was parsed from.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.source
    }

    /// Number of file-sourced entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the file contributed no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The key this configuration attaches under in a propagation context.
    #[must_use]
    pub fn context_key(&self) -> &str {
        &self.context_key
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("source", &self.source)
            .field("entries", &self.values.len())
            .field("missing_key", &self.missing_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CONTEXT_KEY;
    use crate::env::MemoryEnv;

    fn config_with(
        pairs: &[(&str, &str)],
        env: MemoryEnv,
        missing_key: MissingKeyPolicy,
    ) -> Config {
        let values = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::new(
            values,
            "default.env".to_string(),
            Arc::new(env),
            missing_key,
            DEFAULT_CONTEXT_KEY.to_string(),
        )
    }

    #[test]
    fn test_get_returns_file_value_when_env_is_unset() {
        let config = config_with(
            &[("TEST_KEY", "123")],
            MemoryEnv::new(),
            MissingKeyPolicy::Error,
        );

        assert_eq!(config.get("TEST_KEY").unwrap(), "123");
    }

    #[test]
    fn test_nonempty_env_value_beats_file_value() {
        let env = MemoryEnv::new().with_var("TEST_KEY", "from-env");
        let config = config_with(&[("TEST_KEY", "123")], env, MissingKeyPolicy::Error);

        assert_eq!(config.get("TEST_KEY").unwrap(), "from-env");
    }

    #[test]
    fn test_empty_env_value_falls_through_to_file_value() {
        let env = MemoryEnv::new().with_var("TEST_KEY", "");
        let config = config_with(&[("TEST_KEY", "123")], env, MissingKeyPolicy::Error);

        assert_eq!(config.get("TEST_KEY").unwrap(), "123");
    }

    #[test]
    fn test_missing_key_errors_under_error_policy() {
        let config = config_with(&[], MemoryEnv::new(), MissingKeyPolicy::Error);

        let err = config.get("ABSENT").unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(key) if key == "ABSENT"));
    }

    #[test]
    fn test_missing_key_yields_empty_string_under_empty_policy() {
        let config = config_with(&[], MemoryEnv::new(), MissingKeyPolicy::Empty);

        assert_eq!(config.get("ABSENT").unwrap(), "");
    }

    #[test]
    fn test_get_as_int_parses_base_ten() {
        let config = config_with(
            &[("TEST_KEY", "123"), ("NEGATIVE", "-7")],
            MemoryEnv::new(),
            MissingKeyPolicy::Error,
        );

        assert_eq!(config.get_as_int("TEST_KEY").unwrap(), 123);
        assert_eq!(config.get_as_int("NEGATIVE").unwrap(), -7);
    }

    #[test]
    fn test_get_as_int_reads_env_override() {
        let env = MemoryEnv::new().with_var("TEST_KEY", "789");
        let config = config_with(&[("TEST_KEY", "123")], env, MissingKeyPolicy::Error);

        assert_eq!(config.get_as_int("TEST_KEY").unwrap(), 789);
    }

    #[test]
    fn test_non_numeric_value_is_a_conversion_error() {
        let config = config_with(
            &[("TEST_KEY", "abc")],
            MemoryEnv::new(),
            MissingKeyPolicy::Error,
        );

        let err = config.get_as_int("TEST_KEY").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::IntConversion { key, value } if key == "TEST_KEY" && value == "abc"
        ));
    }

    #[test]
    fn test_int_miss_and_conversion_failure_yield_zero_under_empty_policy() {
        let config = config_with(
            &[("TEST_KEY", "abc")],
            MemoryEnv::new(),
            MissingKeyPolicy::Empty,
        );

        assert_eq!(config.get_as_int("TEST_KEY").unwrap(), 0);
        assert_eq!(config.get_as_int("ABSENT").unwrap(), 0);
    }

    #[test]
    fn test_must_get_returns_present_value() {
        let config = config_with(
            &[("TEST_KEY", "123")],
            MemoryEnv::new(),
            MissingKeyPolicy::Error,
        );

        assert_eq!(config.must_get("TEST_KEY"), "123");
    }

    #[test]
    #[should_panic(expected = "missing value in config: ABSENT")]
    fn test_must_get_panics_even_under_empty_policy() {
        let config = config_with(&[], MemoryEnv::new(), MissingKeyPolicy::Empty);

        config.must_get("ABSENT");
    }

    #[test]
    #[should_panic(expected = "error converting config value to int with key: TEST_KEY")]
    fn test_must_get_as_int_panics_on_non_numeric_value() {
        let config = config_with(
            &[("TEST_KEY", "abc")],
            MemoryEnv::new(),
            MissingKeyPolicy::Empty,
        );

        config.must_get_as_int("TEST_KEY");
    }

    #[test]
    fn test_file_value_ignores_env_override() {
        let env = MemoryEnv::new().with_var("TEST_KEY", "from-env");
        let config = config_with(&[("TEST_KEY", "123")], env, MissingKeyPolicy::Error);

        assert_eq!(config.file_value("TEST_KEY"), Some("123"));
        assert_eq!(config.file_value("ABSENT"), None);
    }

    #[test]
    fn test_debug_output_never_contains_values() {
        let config = config_with(
            &[("API_SECRET", "super-secret-value")],
            MemoryEnv::new(),
            MissingKeyPolicy::Error,
        );

        let printed = format!("{config:?}");
        assert!(printed.contains("default.env"));
        assert!(!printed.contains("super-secret-value"));
        assert!(!printed.contains("API_SECRET"));
    }

    #[test]
    fn test_len_and_is_empty_track_file_entries() {
        let empty = config_with(&[], MemoryEnv::new(), MissingKeyPolicy::Error);
        let full = config_with(
            &[("A", "1"), ("B", "2")],
            MemoryEnv::new(),
            MissingKeyPolicy::Error,
        );

        assert!(empty.is_empty());
        assert_eq!(full.len(), 2);
        assert!(!full.is_empty());
    }

    #[test]
    fn test_missing_key_policy_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MissingKeyPolicy::Empty).unwrap();
        assert_eq!(json, "\"empty\"");

        let parsed: MissingKeyPolicy = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, MissingKeyPolicy::Error);
    }
}
