//! tintlog Core
//!
//! Leveled, colorized logging to a console and an optional plain-text file.
//! This crate provides the core functionality that can be used from any environment
//! (Node.js via napi-rs, Python via PyO3, native Rust, wasm in a browser).
//!
//! ## Rendering targets
//!
//! The same line is rendered two ways:
//! - `Target::Server`: inline ANSI escape codes, printed to stdout
//! - `Target::Browser`: a `%c` template plus CSS style arguments for `console.log`
//!
//! Files always receive the unstyled line.
//!
//! ```rust,no_run
//! use tintlog_core::{create, set_level, Color, LogLevel, LoggerOptions};
//!
//! set_level(LogLevel::Info);
//!
//! let net = create("Net", LoggerOptions {
//!     color: Color::Cyan,
//!     filename: Some("net.log".into()),
//!     ..Default::default()
//! })?;
//!
//! net.debug("filtered out");
//! net.info("connected");
//! # Ok::<(), tintlog_core::LogError>(())
//! ```

pub mod error;
pub mod level;
pub mod palette;
pub mod options;
pub mod render;
pub mod logging;

pub use error::{LogError, LogResult};

pub use level::{global_registry, set_level, LevelRegistry, LogLevel};

pub use palette::{Color, ColorToken, Target};

pub use options::LoggerOptions;

pub use render::{AnsiRenderer, CssRenderer, Rendered, Renderer};

pub use logging::{
    CategoryLogger, ConsoleSink, FileSink, Logger, LoggerContext, LoggerExt,
    MemoryConsole, SharedLogger, StdConsole,
};

/// Create a logger for `category` bound to the process-wide threshold
///
/// Fails only when `options.filename` cannot be opened.
pub fn create(category: impl Into<String>, options: LoggerOptions) -> LogResult<CategoryLogger> {
    CategoryLogger::new(category, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // The only test touching the process-wide threshold
    #[test]
    fn test_create_uses_global_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global.log");
        let logger = create("Net", LoggerOptions {
            use_colors: false,
            show_timestamp: false,
            filename: Some(path.clone()),
            ..Default::default()
        })
        .unwrap();

        set_level(LogLevel::Info);
        set_level(LogLevel::Info);
        assert_eq!(global_registry().threshold(), Some(LogLevel::Info));

        logger.debug("hidden");
        logger.info("shown");

        set_level(LogLevel::None);
        logger.error("silenced");

        set_level(LogLevel::Debug);
        logger.debug("back");

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[INFO]  Net: shown\n[DEBUG] Net: back\n"
        );
    }
}
