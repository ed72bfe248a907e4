//! Environment variable access for reads and population.
//!
//! Responsibilities:
//! - Define the [`EnvStore`] seam used for profile selection, value
//!   precedence, and environment population.
//! - Provide [`ProcessEnv`] over the real process environment and
//!   [`MemoryEnv`] for tests.
//!
//! Invariants:
//! - `get` has presence semantics: a variable set to the empty string is
//!   `Some("")`, not `None`.
//! - `set` never panics on bad input; invalid names and values come back
//!   as [`EnvWriteError`].

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// Errors produced when writing an environment variable.
#[derive(Debug, Error)]
pub enum EnvWriteError {
    /// The variable name was empty or contained `=` or a NUL byte.
    #[error("invalid environment variable name `{name}`")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// The value contained a NUL byte.
    #[error("invalid value for environment variable `{name}`")]
    InvalidValue {
        /// The variable the value was destined for.
        name: String,
    },
}

/// Read and write access to an environment.
///
/// `get` is used for profile selection and value precedence; `set` only
/// by [`crate::ConfigLoader::populate`].
pub trait EnvStore: Send + Sync {
    /// Look up a variable, preserving presence: an empty value is
    /// `Some(String::new())`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a variable.
    ///
    /// # Errors
    ///
    /// Returns [`EnvWriteError`] when the name or value cannot be
    /// represented in the underlying environment.
    fn set(&self, key: &str, value: &str) -> Result<(), EnvWriteError>;
}

/// [`EnvStore`] backed by the real process environment.
///
/// Writing to the process environment is not thread-safe on every
/// platform. Call [`crate::ConfigLoader::populate`] during single-threaded
/// startup, before worker threads exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Create a handle to the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn validate_var(key: &str, value: &str) -> Result<(), EnvWriteError> {
    if key.is_empty() || key.contains('=') || key.contains('\0') {
        return Err(EnvWriteError::InvalidName {
            name: key.to_string(),
        });
    }
    if value.contains('\0') {
        return Err(EnvWriteError::InvalidValue {
            name: key.to_string(),
        });
    }
    Ok(())
}

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnvWriteError> {
        // Rejects the inputs std::env::set_var panics on.
        validate_var(key, value)?;

        // SAFETY: mutating the environment is only sound without
        // concurrent access from other threads; callers run population
        // during single-threaded startup.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// In-memory [`EnvStore`] for tests.
///
/// Interior mutability keeps the trait object shareable while tests
/// observe writes.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a variable, replacing any previous value.
    #[must_use]
    pub fn with_var(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.lock().unwrap().insert(key.into(), value.into());
        self
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnvWriteError> {
        validate_var(key, value)?;
        self.vars
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
