//! Configuration type definitions for envprofile.
//!
//! Responsibilities:
//! - Define the loaded [`Config`] handle and its value-resolution accessors.
//! - Define [`MissingKeyPolicy`] controlling what a lookup miss means.
//!
//! Does NOT handle:
//! - File selection, reading, or parsing (see `loader` and `parser`).
//! - Context attachment (see `context`).
//!
//! Invariants:
//! - `Config` never exposes its values through `Debug`; only the source file
//!   name and entry count are printed.

mod config;

pub use config::{Config, MissingKeyPolicy};
