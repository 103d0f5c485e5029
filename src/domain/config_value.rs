// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! This module provides the `ConfigValue` type, which holds the raw text of a
//! parameter exactly as it appeared in the configuration file (minus
//! surrounding whitespace). Values are never rewritten: a value of `yep`
//! stays `yep`, and its boolean meaning is resolved on demand.

use crate::domain::boolean::BooleanLexicon;
use serde::Serialize;
use std::fmt;

/// The raw value of a configuration parameter.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("NoPe".to_string());
/// assert_eq!(value.as_str(), "NoPe");
/// assert_eq!(value.as_bool(), Some(false));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the parameter was given without a value.
    ///
    /// ```
    /// use kvcfg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves the value through the standard boolean lexicon.
    ///
    /// Returns `None` when the value is not a boolean spelling.
    pub fn as_bool(&self) -> Option<bool> {
        self.as_bool_with(BooleanLexicon::standard())
    }

    /// Resolves the value through the given lexicon.
    pub fn as_bool_with(&self, lexicon: &BooleanLexicon) -> Option<bool> {
        lexicon.resolve(&self.0)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_value_preserves_case() {
        let value = ConfigValue::from("Test.COM");
        assert_eq!(value.as_str(), "Test.COM");
        assert_eq!(value.to_string(), "Test.COM");
    }

    #[test]
    fn test_config_value_as_bool_true() {
        assert_eq!(ConfigValue::from("yes").as_bool(), Some(true));
        assert_eq!(ConfigValue::from("ON").as_bool(), Some(true));
        assert_eq!(ConfigValue::from("Yep").as_bool(), Some(true));
    }

    #[test]
    fn test_config_value_as_bool_false() {
        assert_eq!(ConfigValue::from("no").as_bool(), Some(false));
        assert_eq!(ConfigValue::from("Off").as_bool(), Some(false));
        assert_eq!(ConfigValue::from("FALSE").as_bool(), Some(false));
    }

    #[test]
    fn test_config_value_as_bool_unknown() {
        assert_eq!(ConfigValue::from("2.5").as_bool(), None);
        assert_eq!(ConfigValue::from("").as_bool(), None);
        assert_eq!(ConfigValue::from("/tmp/logfile.log").as_bool(), None);
    }

    #[test]
    fn test_config_value_as_bool_with_custom_lexicon() {
        let lexicon = BooleanLexicon::from_pairs([("1", true), ("0", false)]);
        assert_eq!(ConfigValue::from("1").as_bool_with(&lexicon), Some(true));
        assert_eq!(ConfigValue::from("yes").as_bool_with(&lexicon), None);
    }

    #[test]
    fn test_config_value_is_empty() {
        assert!(ConfigValue::from("").is_empty());
        assert!(!ConfigValue::from("x").is_empty());
    }

    #[test]
    fn test_string_from_config_value() {
        let s: String = ConfigValue::from("55331").into();
        assert_eq!(s, "55331");
    }
}
