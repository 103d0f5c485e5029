// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parser for `key = value` configuration files.
//!
//! The format is line oriented:
//!
//! ```text
//! # a comment
//! Host = test.com      # trailing comments are allowed
//! verbose = yep
//! ```
//!
//! `#` starts a comment anywhere on a line and cannot be escaped, so a value
//! can never contain `#`. Every entry line must contain exactly one `=`.

use crate::domain::{ConfigKey, ConfigValue, LineError};
use crate::ports::LineParser;

/// Character that starts a comment.
pub const COMMENT_CHAR: char = '#';

/// Character separating a key from its value.
pub const DELIMITER: char = '=';

/// Options controlling how strictly lines are parsed.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::ParserOptions;
///
/// let options = ParserOptions::new().with_null_value_is_error(true);
/// assert!(options.null_value_is_error);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether a line such as `param =` is an error. When `false` the
    /// parameter is stored with an empty value.
    pub null_value_is_error: bool,
}

impl ParserOptions {
    /// Creates the default options: empty values are accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether empty values are rejected.
    pub fn with_null_value_is_error(mut self, null_value_is_error: bool) -> Self {
        self.null_value_is_error = null_value_is_error;
        self
    }
}

/// `key = value` line parser.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::KeyValueParser;
/// use kvcfg::ports::LineParser;
///
/// let parser = KeyValueParser::default();
/// let (key, value) = parser.parse_line("  VERBOSE = Yep  # noisy").unwrap().unwrap();
/// assert_eq!(key.as_str(), "verbose");
/// assert_eq!(value.as_str(), "Yep");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyValueParser {
    options: ParserOptions,
}

impl KeyValueParser {
    /// Creates a parser with the given options.
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Returns the options this parser was built with.
    pub fn options(&self) -> ParserOptions {
        self.options
    }
}

impl LineParser for KeyValueParser {
    fn normalize<'a>(&self, raw: &'a str) -> &'a str {
        let line = raw.trim();
        match line.find(COMMENT_CHAR) {
            Some(pos) => line[..pos].trim(),
            None => line,
        }
    }

    fn parse_entry(&self, normalized: &str) -> Result<(ConfigKey, ConfigValue), LineError> {
        if normalized.matches(DELIMITER).count() != 1 {
            return Err(LineError::DelimiterCount);
        }
        let (key, value) = normalized
            .split_once(DELIMITER)
            .ok_or(LineError::DelimiterCount)?;

        let value = value.trim();
        if value.is_empty() && self.options.null_value_is_error {
            return Err(LineError::MissingValue);
        }

        Ok((ConfigKey::new(key), ConfigValue::from(value)))
    }
}
