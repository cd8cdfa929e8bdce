//! Named logger bound to a category

use std::fmt;
use std::sync::Arc;

use super::console::{default_console, SharedConsole};
use super::file::FileSink;
use super::traits::Logger;
use crate::error::LogResult;
use crate::level::{global_registry, LevelRegistry, LogLevel};
use crate::options::LoggerOptions;
use crate::palette::Target;
use crate::render::{renderer_for, timestamp_now, LogLine, SharedRenderer};

/// Shared pieces a logger is wired to
///
/// The default context uses the process-wide registry, the target of the
/// current build and its console.
#[derive(Clone)]
pub struct LoggerContext {
    pub registry: Arc<LevelRegistry>,
    pub target: Target,
    pub console: SharedConsole,
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self {
            registry: global_registry(),
            target: Target::detect(),
            console: default_console(),
        }
    }
}

impl LoggerContext {
    pub fn with_registry(mut self, registry: Arc<LevelRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_console(mut self, console: SharedConsole) -> Self {
        self.console = console;
        self
    }
}

impl fmt::Debug for LoggerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerContext")
            .field("registry", &self.registry)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Logger for one category
///
/// Options are fixed at construction. Each call is checked against the
/// registry's threshold, then written synchronously to the console and, when
/// configured, to the file.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tintlog_core::{CategoryLogger, LevelRegistry, LoggerContext, LoggerOptions, LogLevel, MemoryConsole, Target};
///
/// let console = Arc::new(MemoryConsole::new());
/// let context = LoggerContext::default()
///     .with_registry(Arc::new(LevelRegistry::new(LogLevel::Info)))
///     .with_target(Target::Server)
///     .with_console(console.clone());
///
/// let opts = LoggerOptions { show_timestamp: false, use_colors: false, ..Default::default() };
/// let logger = CategoryLogger::with_context("Net", opts, context).unwrap();
///
/// logger.debug("filtered");
/// logger.warn("retry");
/// assert_eq!(console.lines(), vec!["[WARN]  Net: retry".to_string()]);
/// ```
pub struct CategoryLogger {
    category: String,
    options: LoggerOptions,
    registry: Arc<LevelRegistry>,
    renderer: SharedRenderer,
    console: SharedConsole,
    file: Option<FileSink>,
}

impl CategoryLogger {
    /// Create a logger wired to the default context
    pub fn new(category: impl Into<String>, options: LoggerOptions) -> LogResult<Self> {
        Self::with_context(category, options, LoggerContext::default())
    }

    /// Create a logger wired to an explicit context
    ///
    /// Fails only when the file sink cannot be opened.
    pub fn with_context(
        category: impl Into<String>,
        options: LoggerOptions,
        context: LoggerContext,
    ) -> LogResult<Self> {
        let file = match options.file_path() {
            Some(path) => Some(FileSink::open(path, options.append_file)?),
            None => None,
        };

        Ok(Self {
            category: category.into(),
            options,
            registry: context.registry,
            renderer: renderer_for(context.target),
            console: context.console,
            file,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    pub fn target(&self) -> Target {
        self.renderer.target()
    }

    /// Whether a call at `level` would be written
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.registry.is_active(level)
    }

    pub fn log(&self, level: LogLevel, text: &str) {
        if !self.is_enabled(level) {
            return;
        }

        let line = self.build_line(level, text);

        if let Some(file) = &self.file {
            file.write_line(&line.plain());
        }

        let rendered = self.renderer.render(&line, &self.options);
        self.console.write(&rendered);
    }

    pub fn debug(&self, text: &str) {
        self.log(LogLevel::Debug, text);
    }

    pub fn info(&self, text: &str) {
        self.log(LogLevel::Info, text);
    }

    pub fn warn(&self, text: &str) {
        self.log(LogLevel::Warn, text);
    }

    pub fn error(&self, text: &str) {
        self.log(LogLevel::Error, text);
    }

    fn build_line(&self, level: LogLevel, text: &str) -> LogLine {
        let timestamp = self.options.show_timestamp.then(timestamp_now);
        let level = self.options.show_level.then_some(level);
        LogLine::new(timestamp, level, &self.category, text)
    }
}

impl Logger for CategoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        CategoryLogger::log(self, level, message);
    }
}

impl fmt::Debug for CategoryLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryLogger")
            .field("category", &self.category)
            .field("options", &self.options)
            .field("target", &self.renderer.target())
            .field("file", &self.file.as_ref().map(FileSink::path))
            .finish()
    }
}
