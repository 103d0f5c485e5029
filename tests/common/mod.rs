// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration tests.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Writes `text` to a new temporary configuration file.
#[allow(dead_code)]
pub fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(text.as_bytes()).expect("write temp config");
    file.flush().expect("flush temp config");
    file
}

/// Returns the path of a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
