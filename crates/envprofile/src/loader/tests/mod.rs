//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test the load sequence: store requirement, file reading, parsing.
//! - Test environment precedence through loaded `Config` handles.
//! - Test profile selection and environment population end to end.
//!
//! Does NOT handle:
//! - Line parsing edge cases (tested in `parser`).
//! - Accessor policy behavior in isolation (tested in `types::config`).
//!
//! Invariants:
//! - Tests default to `MemoryEnv`/`MemoryStore` for hermetic state.
//! - Tests touching the real process environment use `serial_test` plus
//!   `env_lock()` and restore variables via `temp_env`.

use std::sync::Mutex;

pub mod precedence_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
