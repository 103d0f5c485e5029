// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Two families of errors exist. [`ConfigError`] covers failures that stop an
//! operation: the configuration file could not be opened or read, or a
//! requested parameter does not exist. [`LineError`] covers problems with a
//! single line of a configuration file; those are recoverable and surface as
//! diagnostics while parsing continues. All errors use `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::errors::ConfigError;
///
/// fn find_param() -> Result<String, ConfigError> {
///     Err(ConfigError::ParamNotFound {
///         key: "host".to_string(),
///     })
/// }
///
/// assert_eq!(
///     find_param().unwrap_err().to_string(),
///     "unable to find parameter \"host\" in config file"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("file {} not found", path.display())]
    FileNotFound {
        /// The path that was given
        path: PathBuf,
    },

    /// The requested parameter is not present in the parsed configuration.
    #[error("unable to find parameter \"{key}\" in config file")]
    ParamNotFound {
        /// The parameter name, as it was requested
        key: String,
    },

    /// An error occurred in a line source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Rendering the parsed configuration failed.
    #[error("Failed to dump configuration: {message}")]
    DumpError {
        /// The error message
        message: String,
        /// The underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A syntax problem found on a single configuration line.
///
/// The messages match the text printed by the command-line tool after the
/// `problem found: ` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line does not contain exactly one `=`.
    #[error("too few/many =")]
    DelimiterCount,

    /// The line has an empty value and empty values are rejected.
    #[error("param value missing")]
    MissingValue,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error() {
        let error = ConfigError::FileNotFound {
            path: PathBuf::from("/etc/missing.conf"),
        };
        assert_eq!(error.to_string(), "file /etc/missing.conf not found");
    }

    #[test]
    fn test_param_not_found_error() {
        let error = ConfigError::ParamNotFound {
            key: "missing_key".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unable to find parameter \"missing_key\" in config file"
        );
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "file".to_string(),
            message: "Permission denied".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'file' error: Permission denied"
        );
    }

    #[test]
    fn test_dump_error() {
        let error = ConfigError::DumpError {
            message: "bad writer".to_string(),
            source: None,
        };
        assert_eq!(error.to_string(), "Failed to dump configuration: bad writer");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }

    #[test]
    fn test_line_error_messages() {
        assert_eq!(LineError::DelimiterCount.to_string(), "too few/many =");
        assert_eq!(LineError::MissingValue.to_string(), "param value missing");
    }
}
