//! File sink implementation

use crate::core::sink::write_error;
use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends records to a file.
///
/// Each record goes out in a single unbuffered `write_all`, so a line is
/// handed to the OS as soon as it is logged.
pub struct FileSink {
    file: File,
    path: PathBuf,
    name: String,
}

impl FileSink {
    /// Open (or create) `path` for appending
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), e.to_string()))?;
        let name = format!("file:{}", path.display());

        Ok(Self { file, path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        self.file
            .write_all(record)
            .map_err(|e| write_error(&self.name, e))
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush().map_err(|e| write_error(&self.name, e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let mut sink = FileSink::new(&path).unwrap();
        sink.write(b"first\n").unwrap();
        sink.write(b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert_eq!(sink.path(), path.as_path());
        assert!(sink.name().starts_with("file:"));
    }

    #[test]
    fn test_reopen_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        FileSink::new(&path).unwrap().write(b"one\n").unwrap();
        FileSink::new(&path).unwrap().write(b"two\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_flush_after_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let mut sink = FileSink::new(&path).unwrap();
        sink.write(b"kept\n").unwrap();
        sink.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "kept\n");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("app.log");

        let err = FileSink::new(&path).err().unwrap();
        assert!(matches!(err, LoggerError::FileSink { .. }));
    }
}
