// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable renderings of a parsed configuration store.
//!
//! The dump exists so a user can see exactly what the parser kept. It is
//! display output only and is never read back.

use crate::domain::{ConfigStore, Result};
#[cfg(feature = "yaml")]
use crate::domain::ConfigError;
use std::io::Write;

/// Output format for [`dump`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DumpFormat {
    /// An `Array ( [key] => value )` listing.
    #[default]
    Text,
    /// A YAML mapping.
    #[cfg(feature = "yaml")]
    Yaml,
}

/// Writes the store to `out` in definition order.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::{dump, DumpFormat, StrLineSource};
/// use kvcfg::service::StoreBuilder;
///
/// # fn main() -> kvcfg::domain::Result<()> {
/// let store = StoreBuilder::default()
///     .parse(StrLineSource::new("Host = test.com\nport ="))?
///     .store;
///
/// let mut out = Vec::new();
/// dump(&store, DumpFormat::Text, &mut out)?;
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Array\n(\n    [host] => test.com\n    [port] => \n)\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn dump<W: Write>(store: &ConfigStore, format: DumpFormat, out: &mut W) -> Result<()> {
    match format {
        DumpFormat::Text => dump_text(store, out),
        #[cfg(feature = "yaml")]
        DumpFormat::Yaml => dump_yaml(store, out),
    }
}

fn dump_text<W: Write>(store: &ConfigStore, out: &mut W) -> Result<()> {
    writeln!(out, "Array")?;
    writeln!(out, "(")?;
    for entry in store.iter() {
        writeln!(out, "    [{}] => {}", entry.key, entry.value)?;
    }
    writeln!(out, ")")?;
    Ok(())
}

#[cfg(feature = "yaml")]
fn dump_yaml<W: Write>(store: &ConfigStore, out: &mut W) -> Result<()> {
    let rendered = serde_yaml::to_string(store).map_err(|e| ConfigError::DumpError {
        message: format!("Failed to render YAML: {}", e),
        source: Some(Box::new(e)),
    })?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
