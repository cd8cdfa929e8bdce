//! Plain-text file sink
//!
//! The handle is opened once when the logger is built and lives as long as
//! the logger. It is never closed early, so every line is on disk as soon as
//! the call returns.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{LogError, LogResult};

/// Append-only writer for unformatted lines
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path`, appending when `append` is set and truncating otherwise
    pub fn open(path: impl AsRef<Path>, append: bool) -> LogResult<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options
            .open(path)
            .map_err(|e| LogError::open_file(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Path the sink was opened with
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one line followed by `\n`
    ///
    /// Write failures are dropped.
    pub fn write_line(&self, line: &str) {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut file = self.file.lock();
        let _ = file.write_all(buf.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_append_mode_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        fs::write(&path, "existing\n").unwrap();

        let sink = FileSink::open(&path, true).unwrap();
        sink.write_line("added");

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nadded\n");
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn test_write_mode_truncates_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        fs::write(&path, "stale content\n").unwrap();

        let _sink = FileSink::open(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.log");

        let err = FileSink::open(&path, true).unwrap_err();
        match err {
            LogError::OpenFile { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
