// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic reporter trait definition.
//!
//! The store builder never prints. Every recoverable problem it finds is
//! handed to a `DiagnosticReporter`, and the caller decides what to do with
//! it.

use crate::domain::Diagnostic;

/// A sink for diagnostics produced while building a configuration store.
///
/// `Vec<Diagnostic>` implements this trait by collecting every diagnostic.
///
/// # Examples
///
/// ```rust
/// use kvcfg::domain::{Diagnostic, DiagnosticKind, RawLine};
/// use kvcfg::ports::DiagnosticReporter;
///
/// let mut collected: Vec<Diagnostic> = Vec::new();
/// collected.report(Diagnostic::new(DiagnosticKind::DuplicateKey, RawLine::new(1, "a=b")));
/// assert_eq!(collected.len(), 1);
/// ```
pub trait DiagnosticReporter {
    /// Receives one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticReporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<R: DiagnosticReporter + ?Sized> DiagnosticReporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
