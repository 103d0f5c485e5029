// SPDX-License-Identifier: MIT OR Apache-2.0

//! A key/value configuration file parser with a hexagonal architecture.
//!
//! This crate reads configuration files made of `key = value` lines, folds
//! keys to lowercase, keeps the first value of repeated keys, and reports
//! every malformed line instead of stopping at the first one. Values that
//! spell a boolean (`yes`, `off`, `yep`, `nope`, ...) can be resolved to
//! `true` or `false` when displayed.
//!
//! # Architecture
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `ConfigStore`,
//!   `BooleanLexicon`, diagnostics and errors)
//! - **Ports**: Trait definitions at the seams (`LineParser`, `LineSource`,
//!   `DiagnosticReporter`)
//! - **Adapters**: The `key = value` parser, file and string line sources,
//!   store dumps, and the command-line front end
//! - **Service**: The store builder and parameter lookup
//!
//! # File Format
//!
//! ```text
//! # comments start with '#', anywhere on a line
//! Host = test.com
//! verbose = yep        # booleans may be spelled many ways
//! port =               # an empty value (accepted unless configured otherwise)
//! ```
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML dump format (default)
//! - `cli`: Enable the command-line front end and the `kvcfg` binary (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use kvcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let report = StoreBuilder::default().parse(StrLineSource::new("VERBOSE = yep\n"))?;
//! let lookup = ParamLookup::new(&report.store);
//!
//! assert_eq!(
//!     lookup.format("verbose")?,
//!     "verbose : true <--- this is a TRUE boolean value"
//! );
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileLineSource, KeyValueParser, ParserOptions, StrLineSource};
    pub use crate::domain::{
        BooleanLexicon, ConfigError, ConfigKey, ConfigStore, ConfigValue, Diagnostic,
        DiagnosticKind, LineError, RawLine, Result,
    };
    pub use crate::ports::{DiagnosticReporter, LineParser, LineSource};
    pub use crate::service::{ParamLookup, ParamReport, ParseReport, StoreBuilder};
}
