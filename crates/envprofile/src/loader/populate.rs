//! Environment-populating merge for parsed configuration.
//!
//! Responsibilities:
//! - Write file-sourced pairs into an environment store, first writer
//!   wins: a variable that already exists is never overwritten.
//!
//! Invariants:
//! - Presence gates the write, not content; an existing empty variable is
//!   kept as-is.
//! - A failed write aborts the merge and reports the offending key/value
//!   pair. Earlier writes are not rolled back.

use std::collections::HashMap;

use crate::env::EnvStore;
use crate::loader::error::ConfigError;

pub(super) fn populate_env(
    env: &dyn EnvStore,
    values: &HashMap<String, String>,
) -> Result<(), ConfigError> {
    for (key, value) in values {
        if env.get(key).is_some() {
            tracing::debug!(key = %key, "environment variable already set, keeping existing value");
            continue;
        }

        env.set(key, value)
            .map_err(|source| ConfigError::EnvWrite {
                key: key.clone(),
                value: value.clone(),
                source,
            })?;
        tracing::debug!(key = %key, "environment variable populated from config file");
    }

    Ok(())
}
