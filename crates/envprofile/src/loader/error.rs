//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every loading, resolution, and population
//!   failure.
//! - Carry enough context (file name, key, offending value) that callers
//!   can report the failure without re-deriving state.
//!
//! Invariants:
//! - Lower-level causes chain via `#[source]`; Display stays one line.
//! - Every failure is returned to the caller. Nothing is retried and
//!   nothing is silently defaulted.

use std::io;

use thiserror::Error;

use crate::env::EnvWriteError;
use crate::parser::ParseError;

/// Errors that can occur while loading or reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The builder was finalized without a file store.
    #[error("no file store configured; supply one with with_store or with_dir")]
    StoreUnavailable,

    /// The selected profile file could not be read (missing file included).
    #[error("Failed to read config file {name}")]
    FileRead {
        /// The profile file name that was selected.
        name: String,
        #[source]
        source: io::Error,
    },

    /// The selected profile file was read but is malformed.
    #[error("Failed to parse config file {name}")]
    Parse {
        /// The profile file name that was selected.
        name: String,
        #[source]
        source: ParseError,
    },

    /// The key was found in neither the environment nor the file map.
    #[error("missing value in config: {0}")]
    MissingKey(String),

    /// A value was found but is not a base-10 integer.
    #[error("error converting config value to int with key: {key} (value: {value})")]
    IntConversion { key: String, value: String },

    /// Populating the environment failed for one key/value pair.
    #[error("Failed to set environment variable {key}={value}")]
    EnvWrite {
        key: String,
        value: String,
        #[source]
        source: EnvWriteError,
    },
}
