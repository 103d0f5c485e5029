// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line parser trait definition.
//!
//! This module defines the `LineParser` trait. A line parser turns one raw
//! line of a configuration file into at most one key/value entry, in two
//! steps: normalization (trimming and comment removal) and entry parsing.

use crate::domain::{ConfigKey, ConfigValue, LineError};

/// A trait for parsing configuration files one line at a time.
///
/// # Examples
///
/// ```rust
/// use kvcfg::domain::{ConfigKey, ConfigValue, LineError};
/// use kvcfg::ports::LineParser;
///
/// struct ColonParser;
///
/// impl LineParser for ColonParser {
///     fn normalize<'a>(&self, raw: &'a str) -> &'a str {
///         raw.trim()
///     }
///
///     fn parse_entry(&self, normalized: &str) -> Result<(ConfigKey, ConfigValue), LineError> {
///         let (key, value) = normalized.split_once(':').ok_or(LineError::DelimiterCount)?;
///         Ok((ConfigKey::from(key), ConfigValue::from(value.trim())))
///     }
/// }
///
/// let parser = ColonParser;
/// let (key, value) = parser.parse_line("  Name: demo ").unwrap().unwrap();
/// assert_eq!(key.as_str(), "name");
/// assert_eq!(value.as_str(), "demo");
/// assert!(parser.parse_line("   ").is_none());
/// ```
pub trait LineParser {
    /// Strips comments and surrounding whitespace from a raw line.
    ///
    /// An empty result marks a blank or comment-only line that must be
    /// skipped.
    fn normalize<'a>(&self, raw: &'a str) -> &'a str;

    /// Splits a non-empty normalized line into a folded key and a raw value.
    ///
    /// # Returns
    ///
    /// * `Ok((ConfigKey, ConfigValue))` - The line holds a valid entry
    /// * `Err(LineError)` - The line is malformed
    fn parse_entry(&self, normalized: &str) -> Result<(ConfigKey, ConfigValue), LineError>;

    /// Normalizes then parses a raw line.
    ///
    /// Returns `None` for blank and comment-only lines.
    fn parse_line(&self, raw: &str) -> Option<Result<(ConfigKey, ConfigValue), LineError>> {
        let normalized = self.normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(self.parse_entry(normalized))
        }
    }
}
