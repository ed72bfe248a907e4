//! Request-scoped propagation context for loaded configuration.
//!
//! Responsibilities:
//! - Define an immutable string-keyed [`Context`] carrying opaque values,
//!   extended by cloning.
//! - Attach a [`Config`] to a context and retrieve it later, with every
//!   failure mode distinguished.
//!
//! Does NOT handle:
//! - Loading configuration (see `loader`).
//!
//! Invariants:
//! - `with_value` never mutates the receiver; callers thread the returned
//!   context forward.
//! - Retrieval never falls back to a default `Config`; an absent or
//!   mistyped value is an error.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::constants::DEFAULT_CONTEXT_KEY;
use crate::types::Config;

/// Errors raised when attaching to or reading from a [`Context`].
#[derive(Debug, Error)]
pub enum ContextError {
    /// No context was provided to attach to or read from.
    #[error("no context provided")]
    NoContext,

    /// Nothing is stored in the context under the requested key.
    #[error("no value found in context under key `{key}`")]
    Missing { key: String },

    /// The stored value is not a [`Config`].
    #[error("value in context under key `{key}` is not a Config")]
    WrongType { key: String },
}

/// An immutable bag of request-scoped values.
///
/// Extension happens by cloning: [`Context::with_value`] returns a new
/// context with one more entry and leaves the receiver untouched.
#[derive(Clone, Default)]
pub struct Context {
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new context that additionally maps `key` to `value`.
    #[must_use]
    pub fn with_value<T>(&self, key: impl Into<String>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        let mut values = self.values.clone();
        values.insert(key.into(), Arc::new(value));
        Self { values }
    }

    /// Look up the raw value stored under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&(dyn Any + Send + Sync)> {
        self.values.get(key).map(Arc::as_ref)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Attach `config` to `ctx` under the config's context key.
///
/// # Errors
///
/// Returns [`ContextError::NoContext`] when `ctx` is `None`.
pub fn to_context(ctx: Option<&Context>, config: Config) -> Result<Context, ContextError> {
    let Some(ctx) = ctx else {
        return Err(ContextError::NoContext);
    };

    let key = config.context_key().to_string();
    Ok(ctx.with_value(key, config))
}

/// Retrieve the [`Config`] stored under the default context key.
///
/// # Errors
///
/// Same conditions as [`from_context_with_key`].
pub fn from_context(ctx: Option<&Context>) -> Result<Config, ContextError> {
    from_context_with_key(ctx, DEFAULT_CONTEXT_KEY)
}

/// Retrieve the [`Config`] stored under `key`.
///
/// # Errors
///
/// Returns [`ContextError::NoContext`] when `ctx` is `None`,
/// [`ContextError::Missing`] when nothing is stored under `key`, and
/// [`ContextError::WrongType`] when the stored value is not a [`Config`].
pub fn from_context_with_key(ctx: Option<&Context>, key: &str) -> Result<Config, ContextError> {
    let Some(ctx) = ctx else {
        return Err(ContextError::NoContext);
    };

    let Some(value) = ctx.value(key) else {
        return Err(ContextError::Missing {
            key: key.to_string(),
        });
    };

    value
        .downcast_ref::<Config>()
        .cloned()
        .ok_or_else(|| ContextError::WrongType {
            key: key.to_string(),
        })
}
