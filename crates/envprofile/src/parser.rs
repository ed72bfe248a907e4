//! Line parser for `.env`-style configuration files.
//!
//! Responsibilities:
//! - Convert raw file bytes into a flat `key -> value` map.
//! - Enforce the file format: one `KEY=VALUE` pair per line, blank lines
//!   and `#`-prefixed lines skipped, whitespace trimmed around keys and
//!   values.
//!
//! Does NOT handle:
//! - File selection or reading (see the `loader` module).
//! - Environment variable precedence (see `types::Config`).
//!
//! Invariants:
//! - A line with no `=` separator fails the whole parse; a partial map is
//!   never returned.
//! - The value is everything after the FIRST `=`, so values may themselves
//!   contain `=` characters.
//! - Comments are whole-line only; a `#` inside a value is literal.
//! - Duplicate keys resolve to the last occurrence (plain map insert).

use std::collections::HashMap;

use thiserror::Error;

/// Errors produced while parsing configuration file contents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A non-blank, non-comment line had no `=` separator.
    #[error("malformed line with no '=' separator: `{line}`")]
    MissingSeparator {
        /// The offending line, trimmed of surrounding whitespace.
        line: String,
    },

    /// The file contents were not valid UTF-8.
    #[error("config data is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Parse `.env`-style file contents into a map.
///
/// Each line must be `KEY=VALUE`. Surrounding whitespace is trimmed from
/// the line, the key, and the value, so `KEY = value` and `KEY=value` are
/// equivalent. Lines that are empty (after trimming) or start with `#` are
/// skipped. When a key appears more than once the last occurrence wins.
///
/// # Errors
///
/// Returns [`ParseError::MissingSeparator`] for the first line that is not
/// blank, not a comment, and has no `=`; the error carries the trimmed line
/// content. Returns [`ParseError::InvalidUtf8`] when `data` is not UTF-8.
/// On error no map is returned, not even a partial one.
pub fn parse(data: &[u8]) -> Result<HashMap<String, String>, ParseError> {
    let text = std::str::from_utf8(data)?;
    let mut values = HashMap::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(ParseError::MissingSeparator {
                line: trimmed.to_string(),
            });
        };

        values.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(values)
}
