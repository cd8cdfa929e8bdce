//! Shared threshold deciding which levels are emitted

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::severity::LogLevel;

/// Environment variable seeding the default registry's threshold
pub const LEVEL_ENV_VAR: &str = "TINTLOG_LEVEL";

/// Stored in place of an ordinal when the threshold name was not recognized
const UNRECOGNIZED: u8 = u8::MAX;

/// Threshold cell shared by every logger built against it
///
/// Each [`CategoryLogger`](crate::CategoryLogger) holds an `Arc` to one of
/// these and reads it on every call. Writes are last-write-wins.
///
/// An unrecognized threshold (see [`LevelRegistry::set_threshold_name`])
/// makes every level inactive.
#[derive(Debug)]
pub struct LevelRegistry {
    threshold: AtomicU8,
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl LevelRegistry {
    /// Create a registry with an explicit threshold
    pub fn new(threshold: LogLevel) -> Self {
        Self {
            threshold: AtomicU8::new(threshold.ordinal()),
        }
    }

    /// Create a registry seeded from `TINTLOG_LEVEL`, falling back to DEBUG
    pub fn from_env() -> Self {
        let registry = Self::default();
        if let Ok(name) = std::env::var(LEVEL_ENV_VAR) {
            registry.set_threshold_name(&name);
        }
        registry
    }

    pub fn set_threshold(&self, level: LogLevel) {
        self.threshold.store(level.ordinal(), Ordering::Relaxed);
    }

    /// Set the threshold by level name
    ///
    /// Names outside the enumeration are stored as unrecognized rather than
    /// rejected.
    pub fn set_threshold_name(&self, name: &str) {
        let ordinal = LogLevel::from_name(name)
            .map(|level| level.ordinal())
            .unwrap_or(UNRECOGNIZED);
        self.threshold.store(ordinal, Ordering::Relaxed);
    }

    /// Current threshold, or `None` when it is unrecognized
    pub fn threshold(&self) -> Option<LogLevel> {
        LogLevel::from_ordinal(self.threshold.load(Ordering::Relaxed))
    }

    /// Whether `level` passes the threshold
    ///
    /// `LogLevel::None` is only a threshold and is never active itself.
    pub fn is_active(&self, level: LogLevel) -> bool {
        if level == LogLevel::None {
            return false;
        }
        match self.threshold() {
            Some(threshold) => level >= threshold,
            None => false,
        }
    }

    /// Name-based variant of [`is_active`](Self::is_active)
    pub fn is_active_name(&self, name: &str) -> bool {
        LogLevel::from_name(name).is_some_and(|level| self.is_active(level))
    }
}

/// Process-wide default registry
static GLOBAL: Lazy<Arc<LevelRegistry>> = Lazy::new(|| Arc::new(LevelRegistry::from_env()));

/// Handle to the process-wide registry used by [`crate::create`]
pub fn global_registry() -> Arc<LevelRegistry> {
    Arc::clone(&GLOBAL)
}

/// Set the threshold of the process-wide registry
pub fn set_level(level: LogLevel) {
    GLOBAL.set_threshold(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_debug() {
        let registry = LevelRegistry::default();
        assert_eq!(registry.threshold(), Some(LogLevel::Debug));
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            assert!(registry.is_active(level));
        }
    }

    #[test]
    fn test_ordinal_comparison() {
        let registry = LevelRegistry::new(LogLevel::Warn);
        assert!(!registry.is_active(LogLevel::Debug));
        assert!(!registry.is_active(LogLevel::Info));
        assert!(registry.is_active(LogLevel::Warn));
        assert!(registry.is_active(LogLevel::Error));
    }

    #[test]
    fn test_none_suppresses_everything_loggable() {
        let registry = LevelRegistry::new(LogLevel::None);
        assert!(!registry.is_active(LogLevel::Debug));
        assert!(!registry.is_active(LogLevel::Info));
        assert!(!registry.is_active(LogLevel::Warn));
        assert!(!registry.is_active(LogLevel::Error));
        assert!(!registry.is_active(LogLevel::None));
    }

    #[test]
    fn test_none_level_is_never_active() {
        for threshold in LogLevel::ALL {
            assert!(!LevelRegistry::new(threshold).is_active(LogLevel::None));
        }
        assert!(!LevelRegistry::default().is_active_name("NONE"));
    }

    #[test]
    fn test_unrecognized_threshold_is_never_active() {
        let registry = LevelRegistry::default();
        registry.set_threshold_name("VERBOSE");
        assert_eq!(registry.threshold(), None);
        for level in LogLevel::ALL {
            assert!(!registry.is_active(level));
        }

        registry.set_threshold_name("ERROR");
        assert_eq!(registry.threshold(), Some(LogLevel::Error));
        assert!(registry.is_active(LogLevel::Error));
    }

    #[test]
    fn test_unrecognized_level_name_is_never_active() {
        let registry = LevelRegistry::default();
        assert!(registry.is_active_name("INFO"));
        assert!(!registry.is_active_name("info"));
        assert!(!registry.is_active_name("TRACE"));
    }

    #[test]
    fn test_set_threshold_idempotent() {
        let once = LevelRegistry::default();
        once.set_threshold(LogLevel::Info);

        let twice = LevelRegistry::default();
        twice.set_threshold(LogLevel::Info);
        twice.set_threshold(LogLevel::Info);

        assert_eq!(once.threshold(), twice.threshold());
        for level in LogLevel::ALL {
            assert_eq!(once.is_active(level), twice.is_active(level));
        }
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = global_registry();
        let b = global_registry();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
