//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that selects a profile file,
//!   reads it through the configured [`FileStore`], and parses it.
//! - Offer both terminal operations: `load()` returning a [`Config`]
//!   handle, and `populate()` merging the file into the environment.
//!
//! Does NOT handle:
//! - Line parsing (delegated to `parser`).
//! - Profile name resolution (delegated to `profile`).
//!
//! Invariants / Assumptions:
//! - A file store must be supplied before `load()`/`populate()`;
//!   finalizing without one is `ConfigError::StoreUnavailable`.
//! - The environment collaborator defaults to the real process
//!   environment; tests swap in `MemoryEnv` via `with_env`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ConfigError;
use super::populate::populate_env;
use super::profile::select_file_name;
use crate::constants::DEFAULT_CONTEXT_KEY;
use crate::env::{EnvStore, ProcessEnv};
use crate::parser;
use crate::store::{DirStore, FileStore};
use crate::types::{Config, MissingKeyPolicy};

/// Builds a [`Config`] from a profile file and the environment.
pub struct ConfigLoader {
    store: Option<Arc<dyn FileStore>>,
    env: Arc<dyn EnvStore>,
    profile: Option<String>,
    profile_key: Option<String>,
    missing_key: MissingKeyPolicy,
    context_key: String,
}

impl ConfigLoader {
    /// Create a loader with no file store, resolving against the real
    /// process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            env: Arc::new(ProcessEnv::new()),
            profile: None,
            profile_key: None,
            missing_key: MissingKeyPolicy::default(),
            context_key: DEFAULT_CONTEXT_KEY.to_string(),
        }
    }

    /// Set the file store profile files are read from.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn FileStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Read profile files from a directory on disk.
    #[must_use]
    pub fn with_dir(self, root: PathBuf) -> Self {
        self.with_store(Arc::new(DirStore::new(root)))
    }

    /// Replace the environment collaborator used for profile selection,
    /// value precedence, and population.
    #[must_use]
    pub fn with_env(mut self, env: Arc<dyn EnvStore>) -> Self {
        self.env = env;
        self
    }

    /// Set the fallback profile used when the indirection variable is not
    /// present. Ignored when empty.
    #[must_use]
    pub fn with_profile(mut self, profile: String) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Name the environment variable whose value selects the profile.
    ///
    /// Presence of the variable beats the `with_profile` fallback, even
    /// when its value is empty.
    #[must_use]
    pub fn with_profile_key(mut self, key: String) -> Self {
        self.profile_key = Some(key);
        self
    }

    /// Set what a lookup miss resolves to (defaults to
    /// [`MissingKeyPolicy::Error`]).
    #[must_use]
    pub fn with_missing_key_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key = policy;
        self
    }

    /// Override the key the loaded [`Config`] attaches under in a
    /// propagation context.
    #[must_use]
    pub fn with_context_key(mut self, key: String) -> Self {
        self.context_key = key;
        self
    }

    /// Select, read, and parse the profile file.
    fn read_values(&self) -> Result<(String, HashMap<String, String>), ConfigError> {
        let store = self.store.as_ref().ok_or(ConfigError::StoreUnavailable)?;

        let name = select_file_name(
            self.env.as_ref(),
            self.profile_key.as_deref(),
            self.profile.as_deref(),
        );

        let data = store
            .read_file(&name)
            .map_err(|source| ConfigError::FileRead {
                name: name.clone(),
                source,
            })?;

        let values = parser::parse(&data).map_err(|source| ConfigError::Parse {
            name: name.clone(),
            source,
        })?;

        tracing::info!(file = %name, entries = values.len(), "config file loaded");
        Ok((name, values))
    }

    /// Load the selected profile file into a [`Config`] handle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::StoreUnavailable`] when no store was
    /// configured, [`ConfigError::FileRead`] when the selected file cannot
    /// be read, and [`ConfigError::Parse`] when its contents are malformed.
    pub fn load(self) -> Result<Config, ConfigError> {
        let (name, values) = self.read_values()?;

        Ok(Config::new(
            values,
            name,
            self.env,
            self.missing_key,
            self.context_key,
        ))
    }

    /// Load the selected profile file and merge it into the environment,
    /// first writer wins: variables that already exist keep their value.
    ///
    /// The process environment is not safe to mutate concurrently; call
    /// this during single-threaded startup.
    ///
    /// # Errors
    ///
    /// Returns the same selection/read/parse errors as
    /// [`ConfigLoader::load`], plus [`ConfigError::EnvWrite`] identifying
    /// the key/value pair whose write failed.
    pub fn populate(self) -> Result<(), ConfigError> {
        let (_, values) = self.read_values()?;
        populate_env(self.env.as_ref(), &values)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
