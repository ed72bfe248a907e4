//! Optional process-wide logging setup.
//!
//! Responsibilities:
//! - Configure the global `tracing` subscriber once at startup, in plain
//!   text or JSON, writing to stderr.
//! - Stay a valid no-op when logging is disabled: library log events fall
//!   through to the default no-op dispatcher.
//!
//! Invariants:
//! - `init` is called at most once per process; a second call reports
//!   [`LogError::Init`] instead of replacing the subscriber.
//! - Disabled options never touch global state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors that can occur while configuring logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The format string was neither `text` nor `json`.
    #[error("unknown log format: {0}")]
    UnknownFormat(String),

    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// The lowercase name used in configuration files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(LogError::UnknownFormat(other.to_string())),
        }
    }
}

/// Logging configuration, applied once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogOptions {
    /// Whether to install a global subscriber at all.
    pub enabled: bool,
    /// Output format; ignored when `enabled` is false.
    pub format: LogFormat,
}

impl LogOptions {
    /// Create options with logging disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable logging.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Install the global subscriber described by these options.
    ///
    /// Respects `RUST_LOG` for filtering, defaulting to `info`. Events are
    /// written to stderr. When `enabled` is false this does nothing and
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Init`] when a global subscriber is already
    /// installed.
    pub fn init(&self) -> Result<(), LogError> {
        if !self.enabled {
            return Ok(());
        }

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match self.format {
            LogFormat::Text => registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| LogError::Init(e.to_string()))
    }
}
