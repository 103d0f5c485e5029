// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for case-insensitive key handling.
//!
//! This module provides the `ConfigKey` type. Every `ConfigKey` is folded on
//! construction: surrounding whitespace is trimmed and the text is lowercased,
//! so `Host`, ` HOST ` and `host` all name the same parameter.

use serde::Serialize;
use std::fmt;

/// A folded configuration key.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("  Server_ID ");
/// assert_eq!(key.as_str(), "server_id");
/// assert_eq!(key, ConfigKey::from("SERVER_ID"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey`, folding the given text.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvcfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::new("Verbose");
    /// assert_eq!(key.as_str(), "verbose");
    /// ```
    pub fn new(key: impl AsRef<str>) -> Self {
        ConfigKey(Self::fold(key.as_ref()))
    }

    /// Folds raw key text: trims surrounding whitespace and lowercases it.
    pub fn fold(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Returns the folded key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey::new(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey::new(s)
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_folds_case() {
        let key = ConfigKey::from("VERBOSE");
        assert_eq!(key.as_str(), "verbose");
    }

    #[test]
    fn test_config_key_trims_whitespace() {
        let key = ConfigKey::from("\t log_file_path  ");
        assert_eq!(key.as_str(), "log_file_path");
    }

    #[test]
    fn test_config_key_from_string() {
        let key = ConfigKey::from("Host".to_string());
        assert_eq!(key.as_str(), "host");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("Test_Mode");
        assert_eq!(key.into_string(), "test_mode");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("Debug_Mode");
        assert_eq!(format!("{}", key), "debug_mode");
    }

    #[test]
    fn test_config_key_equality_ignores_case() {
        assert_eq!(ConfigKey::from("User"), ConfigKey::from("uSeR"));
        assert_ne!(ConfigKey::from("user"), ConfigKey::from("users"));
    }

    #[test]
    fn test_config_key_hash() {
        let mut map = HashMap::new();
        map.insert(ConfigKey::from("Host"), "value1");

        assert_eq!(map.get(&ConfigKey::from("HOST")), Some(&"value1"));
        assert_eq!(map.get(&ConfigKey::from("port")), None);
    }

    #[test]
    fn test_config_key_empty() {
        let key = ConfigKey::from("   ");
        assert_eq!(key.as_str(), "");
    }

    #[test]
    fn test_config_key_inner_whitespace_preserved() {
        let key = ConfigKey::from(" Send Notifications ");
        assert_eq!(key.as_str(), "send notifications");
    }
}
