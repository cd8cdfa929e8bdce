//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a logger
#[derive(Error, Debug)]
pub enum LogError {
    /// The file sink could not be opened
    #[error("Failed to open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A color name outside the palette
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// A level name outside the level enumeration
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
}

impl LogError {
    /// Create a file open error
    pub fn open_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenFile {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
