// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types for the configuration crate:
//! folded keys, raw values, the boolean lexicon, the parsed store and the
//! diagnostics reported while building it. It is independent of any I/O.

pub mod boolean;
pub mod config_key;
pub mod config_value;
pub mod diagnostic;
pub mod errors;
pub mod store;

// Re-export commonly used types
pub use boolean::BooleanLexicon;
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use diagnostic::{Diagnostic, DiagnosticKind, RawLine};
pub use errors::{ConfigError, LineError, Result};
pub use store::{ConfigStore, Entry};
