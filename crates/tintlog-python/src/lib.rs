//! Python bindings for tintlog via PyO3

use pyo3::prelude::*;
use pyo3::exceptions::{PyOSError, PyValueError};
use std::path::PathBuf;

use tintlog_core::{
    global_registry,
    CategoryLogger as CoreCategoryLogger,
    Color as CoreColor,
    LogError as CoreLogError,
    LogLevel as CoreLogLevel,
    LoggerOptions as CoreLoggerOptions,
};

fn to_py_err(err: CoreLogError) -> PyErr {
    match err {
        CoreLogError::OpenFile { .. } => PyOSError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

// ============================================================================
// Logger
// ============================================================================

#[pyclass]
pub struct Logger {
    inner: CoreCategoryLogger,
}

#[pymethods]
impl Logger {
    #[getter]
    pub fn category(&self) -> String { self.inner.category().to_string() }

    pub fn debug(&self, text: &str) { self.inner.debug(text); }

    pub fn info(&self, text: &str) { self.inner.info(text); }

    pub fn warn(&self, text: &str) { self.inner.warn(text); }

    pub fn error(&self, text: &str) { self.inner.error(text); }

    fn __repr__(&self) -> String {
        format!("Logger(category='{}')", self.inner.category())
    }
}

/// Create a logger for a category; omitted options take their defaults
#[pyfunction]
#[pyo3(signature = (
    category,
    use_colors=None,
    color=None,
    show_timestamp=None,
    show_level=None,
    filename=None,
    append_file=None
))]
pub fn create(
    category: &str,
    use_colors: Option<bool>,
    color: Option<&str>,
    show_timestamp: Option<bool>,
    show_level: Option<bool>,
    filename: Option<PathBuf>,
    append_file: Option<bool>,
) -> PyResult<Logger> {
    let defaults = CoreLoggerOptions::default();
    let color = match color {
        Some(name) => name.parse::<CoreColor>().map_err(to_py_err)?,
        None => defaults.color,
    };

    let options = CoreLoggerOptions {
        use_colors: use_colors.unwrap_or(defaults.use_colors),
        color,
        show_timestamp: show_timestamp.unwrap_or(defaults.show_timestamp),
        show_level: show_level.unwrap_or(defaults.show_level),
        filename,
        append_file: append_file.unwrap_or(defaults.append_file),
    };

    let inner = CoreCategoryLogger::new(category, options).map_err(to_py_err)?;
    Ok(Logger { inner })
}

// ============================================================================
// Levels and palette
// ============================================================================

/// Set the process-wide threshold by name; unknown names silence every logger
#[pyfunction]
pub fn set_log_level(level: &str) {
    global_registry().set_threshold_name(level);
}

/// Current threshold name, or None when it is unrecognized
#[pyfunction]
pub fn get_log_level() -> Option<String> {
    global_registry().threshold().map(|level| level.to_string())
}

#[pyfunction]
pub fn log_levels() -> Vec<String> {
    CoreLogLevel::ALL.iter().map(|level| level.to_string()).collect()
}

#[pyfunction]
pub fn colors() -> Vec<String> {
    CoreColor::ALL.iter().map(|color| color.to_string()).collect()
}

// ============================================================================
// Module Definition
// ============================================================================

#[pymodule]
fn tintlog(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Logger>()?;

    m.add_function(wrap_pyfunction!(create, m)?)?;
    m.add_function(wrap_pyfunction!(set_log_level, m)?)?;
    m.add_function(wrap_pyfunction!(get_log_level, m)?)?;
    m.add_function(wrap_pyfunction!(log_levels, m)?)?;
    m.add_function(wrap_pyfunction!(colors, m)?)?;

    Ok(())
}
