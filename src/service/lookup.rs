// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter lookup and display formatting.
//!
//! A lookup finds a parameter by name, ignoring case, and resolves its value
//! through a [`BooleanLexicon`]. The stored value itself is never rewritten;
//! the boolean reading only affects how the parameter is displayed.

use crate::domain::{BooleanLexicon, ConfigError, ConfigStore, ConfigValue, Result};
use std::fmt;

/// A parameter that was found, ready for display.
///
/// Its `Display` output is one report line without the trailing newline:
///
/// * `name : value` for ordinary values
/// * `name : true <--- this is a TRUE boolean value` for boolean spellings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamReport {
    /// The parameter name as it was requested
    pub name: String,
    /// The raw stored value
    pub value: ConfigValue,
    /// The boolean reading of the value, if it is a boolean spelling
    pub boolean: Option<bool>,
}

impl fmt::Display for ParamReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.boolean {
            Some(b) => write!(
                f,
                "{} : {} <--- this is a {} boolean value",
                self.name,
                b,
                if b { "TRUE" } else { "FALSE" }
            ),
            None => write!(f, "{} : {}", self.name, self.value),
        }
    }
}

/// Looks up parameters in a parsed store.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::StrLineSource;
/// use kvcfg::service::{ParamLookup, StoreBuilder};
///
/// # fn main() -> kvcfg::domain::Result<()> {
/// let store = StoreBuilder::default()
///     .parse(StrLineSource::new("VERBOSE = yep\nhost = test.com"))?
///     .store;
/// let lookup = ParamLookup::new(&store);
///
/// assert_eq!(lookup.format("verbose")?, "verbose : true <--- this is a TRUE boolean value");
/// assert_eq!(lookup.format("Host")?, "Host : test.com");
/// assert!(lookup.format("missing_key").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParamLookup<'a> {
    store: &'a ConfigStore,
    lexicon: &'a BooleanLexicon,
}

impl<'a> ParamLookup<'a> {
    /// Creates a lookup over `store` using the standard boolean lexicon.
    pub fn new(store: &'a ConfigStore) -> Self {
        Self::with_lexicon(store, BooleanLexicon::standard())
    }

    /// Creates a lookup over `store` using the given boolean lexicon.
    pub fn with_lexicon(store: &'a ConfigStore, lexicon: &'a BooleanLexicon) -> Self {
        Self { store, lexicon }
    }

    /// Finds a parameter. `name` is folded before the lookup, so callers
    /// pass it exactly as the user wrote it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParamNotFound` carrying `name` unchanged.
    pub fn lookup(&self, name: &str) -> Result<ParamReport> {
        let value = self
            .store
            .get(name)
            .ok_or_else(|| ConfigError::ParamNotFound {
                key: name.to_string(),
            })?;

        Ok(ParamReport {
            name: name.to_string(),
            value: value.clone(),
            boolean: value.as_bool_with(self.lexicon),
        })
    }

    /// Finds a parameter and renders its report line.
    pub fn format(&self, name: &str) -> Result<String> {
        self.lookup(name).map(|report| report.to_string())
    }
}
