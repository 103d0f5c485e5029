// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line sources backed by files, readers and in-memory strings.
//!
//! Lines are read one at a time with a reusable buffer, so a file is never
//! held in memory all at once. Invalid UTF-8 is decoded lossily and `\r\n`
//! terminators are treated like `\n`.

use crate::domain::{ConfigError, RawLine, Result};
use crate::ports::LineSource;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A line source over any buffered reader.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::ReaderLineSource;
/// use kvcfg::ports::LineSource;
/// use std::io::Cursor;
///
/// let mut source = ReaderLineSource::from_reader("cursor", Cursor::new("a = 1\r\nb = 2"));
/// assert_eq!(source.next_line().unwrap().unwrap().text, "a = 1");
/// assert_eq!(source.next_line().unwrap().unwrap().text, "b = 2");
/// assert!(source.next_line().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct ReaderLineSource<R> {
    name: String,
    reader: R,
    line_number: usize,
    buf: Vec<u8>,
}

/// A line source reading a configuration file from disk.
pub type FileLineSource = ReaderLineSource<BufReader<File>>;

/// A line source over an in-memory string.
pub type StrLineSource<'a> = ReaderLineSource<&'a [u8]>;

impl<R: BufRead> ReaderLineSource<R> {
    /// Wraps a buffered reader.
    pub fn from_reader(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<'a> ReaderLineSource<&'a [u8]> {
    /// Creates a source over configuration text held in memory.
    ///
    /// ```rust
    /// use kvcfg::adapters::StrLineSource;
    /// use kvcfg::ports::LineSource;
    ///
    /// let mut source = StrLineSource::new("host = test.com\n");
    /// assert_eq!(source.name(), "string");
    /// assert_eq!(source.next_line().unwrap().unwrap().number, 1);
    /// ```
    pub fn new(text: &'a str) -> Self {
        Self::from_reader("string", text.as_bytes())
    }
}

impl ReaderLineSource<BufReader<File>> {
    /// Opens a configuration file for streaming.
    ///
    /// This is the only point where a missing or unreadable file is
    /// detected; it fails before any line is parsed.
    ///
    /// # Errors
    ///
    /// * `ConfigError::FileNotFound` - nothing exists at `path`
    /// * `ConfigError::SourceError` - the path is a directory or cannot be opened
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use kvcfg::adapters::FileLineSource;
    ///
    /// let source = FileLineSource::open("/etc/myapp.conf").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        if path.is_dir() {
            return Err(ConfigError::SourceError {
                source_name: name,
                message: "Not a regular file".to_string(),
                source: None,
            });
        }

        let file = File::open(path).map_err(|e| ConfigError::SourceError {
            source_name: name.clone(),
            message: format!("unable to open {}", name),
            source: Some(Box::new(e)),
        })?;

        tracing::debug!("Opened configuration file {}", name);
        Ok(Self::from_reader(name, BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_line(&mut self) -> Result<Option<RawLine>> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        self.line_number += 1;
        let text = String::from_utf8_lossy(&self.buf).into_owned();
        Ok(Some(RawLine::new(self.line_number, text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn collect<S: LineSource>(mut source: S) -> Vec<RawLine> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_str_source_numbers_lines() {
        let lines = collect(StrLineSource::new("a\nb\n\nc"));
        let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(lines[2].text, "");
        assert_eq!(lines[3].text, "c");
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(StrLineSource::new("")).is_empty());
    }

    #[test]
    fn test_crlf_is_stripped() {
        let lines = collect(StrLineSource::new("a = 1\r\nb = 2\r\n"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "a = 1");
        assert_eq!(lines[1].text, "b = 2");
    }

    #[test]
    fn test_lone_carriage_return_kept() {
        let lines = collect(StrLineSource::new("a = 1\r"));
        assert_eq!(lines[0].text, "a = 1\r");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let bytes: &[u8] = b"name = caf\xff\nnext = ok\n";
        let lines = collect(ReaderLineSource::from_reader("bytes", bytes));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].text.starts_with("name = caf"));
        assert!(lines[0].text.contains('\u{FFFD}'));
        assert_eq!(lines[1].text, "next = ok");
    }

    #[test]
    fn test_lines_read() {
        let mut source = StrLineSource::new("a\nb\n");
        source.next_line().unwrap();
        assert_eq!(source.lines_read(), 1);
    }

    #[test]
    fn test_file_source_reads_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "host = test.com").unwrap();
        writeln!(temp_file, "# comment").unwrap();

        let source = FileLineSource::open(temp_file.path()).unwrap();
        assert_eq!(source.name(), temp_file.path().display().to_string());

        let lines = collect(source);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "host = test.com");
    }

    #[test]
    fn test_file_source_missing_file() {
        let result = FileLineSource::open("/nonexistent/path/to/params.conf");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_file_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileLineSource::open(dir.path());
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }
}
