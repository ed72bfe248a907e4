//! Profile selection: which `.env` file to load.
//!
//! Responsibilities:
//! - Resolve the profile file name from the indirection variable, the
//!   explicit fallback, or the built-in default, in that order.
//!
//! Invariants:
//! - The indirection variable wins on PRESENCE, not on content: a variable
//!   set to the empty string still selects (yielding the bare `.env`).
//! - The explicit fallback only applies when non-empty.

use crate::constants::{DEFAULT_PROFILE, PROFILE_FILE_EXTENSION};
use crate::env::EnvStore;

/// Resolve the profile file name to load.
///
/// Selection order:
/// 1. `profile_key` names an environment variable; if that variable EXISTS
///    its value is the profile, even when empty.
/// 2. Otherwise a non-empty `profile` fallback is the profile.
/// 3. Otherwise the profile is `default`.
///
/// The file name is the profile with `.env` appended.
#[must_use]
pub fn select_file_name(
    env: &dyn EnvStore,
    profile_key: Option<&str>,
    profile: Option<&str>,
) -> String {
    if let Some(key) = profile_key
        && let Some(selector) = env.get(key)
    {
        tracing::info!(key = %key, profile = %selector, "profile selected via environment variable");
        return format!("{selector}{PROFILE_FILE_EXTENSION}");
    }

    if let Some(profile) = profile
        && !profile.is_empty()
    {
        tracing::info!(profile = %profile, "profile selected via explicit fallback");
        return format!("{profile}{PROFILE_FILE_EXTENSION}");
    }

    tracing::info!(profile = %DEFAULT_PROFILE, "no profile configured, using default");
    format!("{DEFAULT_PROFILE}{PROFILE_FILE_EXTENSION}")
}
