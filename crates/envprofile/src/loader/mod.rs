//! Configuration loading: profile selection, file reading, parsing.
//!
//! Responsibilities:
//! - Provide the builder-pattern `ConfigLoader` with its two terminal
//!   operations, `load()` and `populate()`.
//! - Resolve which profile file to read (`profile` submodule).
//!
//! Does NOT handle:
//! - Line-level parsing (see `parser`).
//! - Value resolution after loading (see `types::Config`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values at read time.
//! - `populate()` never overwrites an existing environment variable.

mod builder;
mod error;
mod populate;
mod profile;

pub use builder::ConfigLoader;
pub use error::ConfigError;
pub use profile::select_file_name;

#[cfg(test)]
mod tests;
