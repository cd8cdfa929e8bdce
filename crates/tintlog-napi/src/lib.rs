//! Node.js bindings for tintlog via napi-rs

#![deny(clippy::all)]

use std::path::PathBuf;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use tintlog_core::{
    global_registry,
    CategoryLogger as CoreCategoryLogger,
    Color as CoreColor,
    LogLevel as CoreLogLevel,
    LoggerOptions as CoreLoggerOptions,
};

// ============================================================================
// Options
// ============================================================================

/// Logger options; omitted fields take their defaults
#[napi(object)]
pub struct LoggerOptions {
    pub use_colors: Option<bool>,
    /// Palette name, see `colors()`
    pub color: Option<String>,
    pub show_timestamp: Option<bool>,
    pub show_level: Option<bool>,
    pub filename: Option<String>,
    pub append_file: Option<bool>,
}

impl TryFrom<LoggerOptions> for CoreLoggerOptions {
    type Error = Error;

    fn try_from(opts: LoggerOptions) -> Result<Self> {
        let defaults = CoreLoggerOptions::default();
        let color = match opts.color {
            Some(name) => name
                .parse::<CoreColor>()
                .map_err(|e| Error::from_reason(e.to_string()))?,
            None => defaults.color,
        };

        Ok(CoreLoggerOptions {
            use_colors: opts.use_colors.unwrap_or(defaults.use_colors),
            color,
            show_timestamp: opts.show_timestamp.unwrap_or(defaults.show_timestamp),
            show_level: opts.show_level.unwrap_or(defaults.show_level),
            filename: opts.filename.map(PathBuf::from),
            append_file: opts.append_file.unwrap_or(defaults.append_file),
        })
    }
}

// ============================================================================
// Logger
// ============================================================================

#[napi]
pub struct Logger {
    inner: CoreCategoryLogger,
}

#[napi]
impl Logger {
    #[napi(getter)]
    pub fn category(&self) -> String { self.inner.category().to_string() }

    #[napi]
    pub fn debug(&self, text: String) { self.inner.debug(&text); }

    #[napi]
    pub fn info(&self, text: String) { self.inner.info(&text); }

    #[napi]
    pub fn warn(&self, text: String) { self.inner.warn(&text); }

    #[napi]
    pub fn error(&self, text: String) { self.inner.error(&text); }
}

/// Create a logger for a category
///
/// Throws when the log file cannot be opened or the color is unknown.
#[napi]
pub fn create(category: String, options: Option<LoggerOptions>) -> Result<Logger> {
    let options = match options {
        Some(opts) => opts.try_into()?,
        None => CoreLoggerOptions::default(),
    };
    let inner = CoreCategoryLogger::new(category, options)
        .map_err(|e| Error::from_reason(e.to_string()))?;
    Ok(Logger { inner })
}

// ============================================================================
// Levels and palette
// ============================================================================

/// Set the process-wide threshold by name
///
/// Unknown names are accepted and silence every logger.
#[napi]
pub fn set_log_level(level: String) {
    global_registry().set_threshold_name(&level);
}

/// Current threshold name, or null when it is unrecognized
#[napi]
pub fn get_log_level() -> Option<String> {
    global_registry().threshold().map(|level| level.to_string())
}

/// Level names in order of increasing strictness
#[napi]
pub fn log_levels() -> Vec<String> {
    CoreLogLevel::ALL.iter().map(|level| level.to_string()).collect()
}

/// Palette color names
#[napi]
pub fn colors() -> Vec<String> {
    CoreColor::ALL.iter().map(|color| color.to_string()).collect()
}
