// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module defines the interfaces (ports) that adapters implement: how
//! lines are parsed, where lines come from, and where diagnostics go.

pub mod parser;
pub mod reporter;
pub mod source;

// Re-export commonly used traits
pub use parser::LineParser;
pub use reporter::DiagnosticReporter;
pub use source::LineSource;
