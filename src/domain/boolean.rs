// SPDX-License-Identifier: MIT OR Apache-2.0

//! The boolean lexicon.
//!
//! Configuration files spell booleans in many ways. The lexicon maps the
//! recognized spellings to `true` or `false`; anything else is an opaque
//! string.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Tokens recognized by the standard lexicon, lowercase.
const STANDARD_TOKENS: [(&str, bool); 8] = [
    ("yes", true),
    ("on", true),
    ("true", true),
    ("yep", true),
    ("no", false),
    ("off", false),
    ("false", false),
    ("nope", false),
];

static STANDARD: Lazy<BooleanLexicon> = Lazy::new(|| BooleanLexicon::from_pairs(STANDARD_TOKENS));

/// A case-insensitive table of boolean spellings.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::BooleanLexicon;
///
/// let lexicon = BooleanLexicon::standard();
/// assert_eq!(lexicon.resolve("Yep"), Some(true));
/// assert_eq!(lexicon.resolve("OFF"), Some(false));
/// assert_eq!(lexicon.resolve("maybe"), None);
/// ```
#[derive(Debug, Clone)]
pub struct BooleanLexicon {
    tokens: HashMap<String, bool>,
}

impl BooleanLexicon {
    /// Returns the process-wide standard lexicon.
    ///
    /// yes/on/true/yep resolve to `true`; no/off/false/nope resolve to `false`.
    pub fn standard() -> &'static BooleanLexicon {
        &STANDARD
    }

    /// Builds a lexicon from `(token, value)` pairs. Tokens are lowercased.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let tokens = pairs
            .into_iter()
            .map(|(token, value)| (token.as_ref().to_lowercase(), value))
            .collect();
        Self { tokens }
    }

    /// Resolves a token, ignoring case.
    ///
    /// Returns `None` when the token is not a known boolean spelling, in
    /// which case the caller must treat the text as an ordinary value.
    pub fn resolve(&self, token: &str) -> Option<bool> {
        self.tokens.get(&token.to_lowercase()).copied()
    }

    /// Returns `true` if the token is a known boolean spelling.
    pub fn contains(&self, token: &str) -> bool {
        self.resolve(token).is_some()
    }

    /// Returns the number of known spellings.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the lexicon knows no spellings.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for BooleanLexicon {
    fn default() -> Self {
        Self::standard().clone()
    }
}
