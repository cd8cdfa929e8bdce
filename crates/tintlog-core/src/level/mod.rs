//! Severity levels and the threshold registry

mod severity;
mod registry;

pub use severity::LogLevel;
pub use registry::{global_registry, set_level, LevelRegistry, LEVEL_ENV_VAR};
