// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line source trait definition.
//!
//! This module defines the `LineSource` trait, which is the interface the
//! store builder pulls configuration text through. Sources are lazy, finite
//! and single-pass: each call to [`LineSource::next_line`] yields the next
//! line, and a source cannot be rewound.

use crate::domain::{RawLine, Result};

/// A trait for streaming configuration lines.
///
/// # Examples
///
/// ```rust
/// use kvcfg::domain::{RawLine, Result};
/// use kvcfg::ports::LineSource;
///
/// struct OneLine(Option<String>);
///
/// impl LineSource for OneLine {
///     fn name(&self) -> &str {
///         "one-line"
///     }
///
///     fn next_line(&mut self) -> Result<Option<RawLine>> {
///         Ok(self.0.take().map(|text| RawLine::new(1, text)))
///     }
/// }
///
/// let mut source = OneLine(Some("key = value".to_string()));
/// assert_eq!(source.next_line().unwrap().unwrap().text, "key = value");
/// assert!(source.next_line().unwrap().is_none());
/// ```
pub trait LineSource {
    /// Returns the name of this source, used in logs and errors.
    fn name(&self) -> &str;

    /// Reads the next line.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RawLine))` - The next line
    /// * `Ok(None)` - The source is exhausted
    /// * `Err(ConfigError)` - The underlying storage could not be read
    fn next_line(&mut self) -> Result<Option<RawLine>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn next_line(&mut self) -> Result<Option<RawLine>> {
        (**self).next_line()
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn next_line(&mut self) -> Result<Option<RawLine>> {
        (**self).next_line()
    }
}
