// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw input lines and the diagnostics reported against them.

use crate::domain::errors::LineError;
use std::fmt;

/// One line of configuration input.
///
/// `number` is 1-based. `text` has its line terminator removed but is
/// otherwise untouched, so it can be echoed back in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based line number within the source
    pub number: usize,
    /// The line text without its terminator
    pub text: String,
}

impl RawLine {
    /// Creates a new raw line.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// What went wrong on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line could not be split into a key and a value.
    Syntax(LineError),
    /// The key was already defined earlier; the new value was discarded.
    DuplicateKey,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Syntax(err) => write!(f, "{}", err),
            DiagnosticKind::DuplicateKey => write!(f, "duplicate param name found. value discarded"),
        }
    }
}

/// A recoverable problem found while building a configuration store.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::{Diagnostic, DiagnosticKind, RawLine};
///
/// let diagnostic = Diagnostic::new(DiagnosticKind::DuplicateKey, RawLine::new(3, "verbose = nope"));
/// assert_eq!(
///     diagnostic.to_string(),
///     "problem found: duplicate param name found. value discarded"
/// );
/// assert_eq!(diagnostic.line.text, "verbose = nope");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The kind of problem
    pub kind: DiagnosticKind,
    /// The offending line
    pub line: RawLine,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(kind: DiagnosticKind, line: RawLine) -> Self {
        Self { kind, line }
    }

    /// Returns `true` for duplicate-key diagnostics.
    pub fn is_duplicate(&self) -> bool {
        self.kind == DiagnosticKind::DuplicateKey
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "problem found: {}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_diagnostic_message() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::Syntax(LineError::DelimiterCount),
            RawLine::new(7, "a = b = c"),
        );
        assert_eq!(diagnostic.to_string(), "problem found: too few/many =");
        assert_eq!(diagnostic.line.number, 7);
        assert!(!diagnostic.is_duplicate());
    }

    #[test]
    fn test_missing_value_diagnostic_message() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::Syntax(LineError::MissingValue),
            RawLine::new(1, "port ="),
        );
        assert_eq!(diagnostic.to_string(), "problem found: param value missing");
    }

    #[test]
    fn test_duplicate_diagnostic() {
        let diagnostic = Diagnostic::new(DiagnosticKind::DuplicateKey, RawLine::new(2, "x=1"));
        assert!(diagnostic.is_duplicate());
    }
}
