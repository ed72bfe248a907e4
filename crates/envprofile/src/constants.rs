//! Centralized constants for the envprofile crate.
//!
//! This module contains the fixed names the loader falls back to so they
//! are not duplicated as magic strings across modules.

/// Profile selected when neither an indirection variable nor an explicit
/// fallback profile is configured.
pub const DEFAULT_PROFILE: &str = "default";

/// Extension appended to the selected profile to form the file name
/// (`default` becomes `default.env`).
pub const PROFILE_FILE_EXTENSION: &str = ".env";

/// Context key a [`crate::Config`] is attached under when the loader was
/// not given an override via `with_context_key`.
pub const DEFAULT_CONTEXT_KEY: &str = "config";
