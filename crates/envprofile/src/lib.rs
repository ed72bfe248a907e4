//! Profile-aware `.env` configuration loading.
//!
//! This crate parses simple `KEY=VALUE` configuration files, selects which
//! file to load from a profile indirection (`default.env`, `custom.env`,
//! ...), and resolves reads with live environment variables taking
//! precedence over file-sourced values.

pub mod constants;
mod context;
mod env;
mod loader;
mod logging;
mod parser;
mod store;
mod types;

pub use context::{Context, ContextError, from_context, from_context_with_key, to_context};
pub use env::{EnvStore, EnvWriteError, MemoryEnv, ProcessEnv};
pub use loader::{ConfigError, ConfigLoader, select_file_name};
pub use logging::{LogError, LogFormat, LogOptions};
pub use parser::{ParseError, parse};
pub use store::{DirStore, FileStore, MemoryStore};
pub use types::{Config, MissingKeyPolicy};
