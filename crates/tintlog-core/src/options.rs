//! Per-logger configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::palette::Color;

/// Options a logger is built with
///
/// Missing fields take their defaults, both when using struct update syntax
/// and when deserializing a partial map:
///
/// ```
/// use tintlog_core::{Color, LoggerOptions};
///
/// let opts: LoggerOptions = serde_json::from_str(r#"{"showTimestamp": false}"#).unwrap();
/// assert!(!opts.show_timestamp);
/// assert!(opts.use_colors);
/// assert_eq!(opts.color, Color::Default);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerOptions {
    pub use_colors: bool,
    /// Category color
    pub color: Color,
    pub show_timestamp: bool,
    pub show_level: bool,
    /// File sink path; `None` or empty means console only
    pub filename: Option<PathBuf>,
    /// Append to `filename` instead of truncating it
    pub append_file: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            use_colors: true,
            color: Color::Default,
            show_timestamp: true,
            show_level: true,
            filename: None,
            append_file: true,
        }
    }
}

impl LoggerOptions {
    /// File path to open, if any
    pub fn file_path(&self) -> Option<&Path> {
        self.filename
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = LoggerOptions::default();
        assert!(opts.use_colors);
        assert_eq!(opts.color, Color::Default);
        assert!(opts.show_timestamp);
        assert!(opts.show_level);
        assert_eq!(opts.filename, None);
        assert!(opts.append_file);
    }

    #[test]
    fn test_partial_overlay() {
        let opts: LoggerOptions = serde_json::from_str(
            r#"{"useColors": false, "color": "Blue", "filename": "out.log", "appendFile": false}"#,
        )
        .unwrap();
        assert!(!opts.use_colors);
        assert_eq!(opts.color, Color::Blue);
        assert!(opts.show_timestamp);
        assert!(opts.show_level);
        assert_eq!(opts.file_path(), Some(Path::new("out.log")));
        assert!(!opts.append_file);
    }

    #[test]
    fn test_empty_filename_means_no_file() {
        let opts = LoggerOptions {
            filename: Some(PathBuf::new()),
            ..Default::default()
        };
        assert_eq!(opts.file_path(), None);
    }
}
