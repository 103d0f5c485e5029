// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete implementations of the ports.
//!
//! This module holds the `key = value` line parser, line sources for files
//! and in-memory text, renderings of a parsed store, and the command-line
//! front end.

#[cfg(feature = "cli")]
pub mod cli;
pub mod dump;
pub mod key_value;
pub mod line_source;

// Re-export adapters
pub use dump::{dump, DumpFormat};
pub use key_value::{KeyValueParser, ParserOptions};
pub use line_source::{FileLineSource, ReaderLineSource, StrLineSource};
