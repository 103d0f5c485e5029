// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds a [`ConfigStore`] from a stream of configuration lines.
//!
//! The builder pulls lines from a [`LineSource`] one at a time, so memory use
//! does not grow with the size of the file. Malformed lines and duplicate
//! keys are reported to a [`DiagnosticReporter`] and parsing carries on with
//! the next line; only a failure of the source itself stops the build.

use crate::adapters::{KeyValueParser, ParserOptions};
use crate::domain::{ConfigStore, Diagnostic, DiagnosticKind, Result};
use crate::ports::{DiagnosticReporter, LineParser, LineSource};

/// The outcome of parsing a configuration source.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// The parsed parameters
    pub store: ConfigStore,
    /// Every problem found, in line order
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Returns `true` if any line produced a diagnostic.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Iterates over the duplicate-key diagnostics.
    pub fn duplicates(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_duplicate())
    }
}

/// Configuration store builder.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::StrLineSource;
/// use kvcfg::service::StoreBuilder;
///
/// # fn main() -> kvcfg::domain::Result<()> {
/// let text = "Host = test.com\nVERBOSE = yep\nverbose = nope\nport=\n";
/// let report = StoreBuilder::default().parse(StrLineSource::new(text))?;
///
/// assert_eq!(report.store.get("verbose").unwrap().as_str(), "yep");
/// assert_eq!(report.store.get("port").unwrap().as_str(), "");
/// assert_eq!(report.duplicates().count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StoreBuilder<P = KeyValueParser> {
    parser: P,
}

impl Default for StoreBuilder<KeyValueParser> {
    fn default() -> Self {
        Self::with_options(ParserOptions::default())
    }
}

impl StoreBuilder<KeyValueParser> {
    /// Creates a builder using the `key = value` parser with the given options.
    pub fn with_options(options: ParserOptions) -> Self {
        Self::new(KeyValueParser::new(options))
    }
}

impl<P: LineParser> StoreBuilder<P> {
    /// Creates a builder around a line parser.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Returns the line parser.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Consumes `source` and builds a store, sending diagnostics to `reporter`.
    ///
    /// The first value seen for a key wins; later definitions are reported as
    /// duplicates and discarded.
    ///
    /// # Errors
    ///
    /// Returns an error only when the source fails to produce a line.
    pub fn build<S, R>(&self, mut source: S, mut reporter: R) -> Result<ConfigStore>
    where
        S: LineSource,
        R: DiagnosticReporter,
    {
        let mut store = ConfigStore::new();
        let mut problems = 0usize;

        while let Some(line) = source.next_line()? {
            let parsed = match self.parser.parse_line(&line.text) {
                None => continue,
                Some(parsed) => parsed,
            };

            let kind = match parsed {
                Ok((key, value)) => {
                    tracing::debug!("line {}: {} = {:?}", line.number, key, value.as_str());
                    if store.insert_first(key, value, line.number) {
                        continue;
                    }
                    DiagnosticKind::DuplicateKey
                }
                Err(err) => DiagnosticKind::Syntax(err),
            };

            tracing::warn!("{}:{}: problem found: {}", source.name(), line.number, kind);
            problems += 1;
            reporter.report(Diagnostic::new(kind, line));
        }

        tracing::info!(
            "Parsed {} parameters from {} ({} problems)",
            store.len(),
            source.name(),
            problems
        );
        Ok(store)
    }

    /// Consumes `source` and collects diagnostics alongside the store.
    pub fn parse<S: LineSource>(&self, source: S) -> Result<ParseReport> {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let store = self.build(source, &mut diagnostics)?;
        Ok(ParseReport { store, diagnostics })
    }
}
