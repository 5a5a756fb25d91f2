//! Per-instance logger resolution.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::discovery::{process, DefaultLoggers};
use crate::logging::{Level, SharedLogger};

/// Resolves the effective logger for one consumer.
///
/// Resolution order: this instance's override, then the process-wide
/// override, then the compiled-in default. The first one set wins.
///
/// Thread-safe; the instance override can be changed while other threads log.
pub struct CategoryLoggerDiscovery {
    logger: ArcSwapOption<SharedLogger>,
    defaults: Arc<DefaultLoggers>,
}

impl CategoryLoggerDiscovery {
    /// Create a resolver bound to the process-wide defaults.
    ///
    /// # Panics
    ///
    /// Panics if the defaults were never installed and the environment
    /// selects a backend that cannot be built; see
    /// [`default_loggers`](crate::discovery::default_loggers).
    pub fn new() -> Self {
        Self::with_defaults(Arc::clone(process::default_loggers()))
    }

    /// Create a resolver bound to explicit defaults instead of the global ones.
    pub fn with_defaults(defaults: Arc<DefaultLoggers>) -> Self {
        Self {
            logger: ArcSwapOption::empty(),
            defaults,
        }
    }

    /// Set or clear this instance's override.
    pub fn set_logger(&self, logger: Option<SharedLogger>) {
        self.logger.store(logger.map(Arc::new));
    }

    /// Whether this instance has its own override.
    pub fn has_logger(&self) -> bool {
        self.logger.load().is_some()
    }

    /// The logger records from this consumer go to.
    pub fn effective_logger(&self) -> SharedLogger {
        match self.logger.load().as_deref() {
            Some(logger) => Arc::clone(logger),
            None => self.defaults.effective_default_logger(),
        }
    }

    /// The logger used when this instance has no override.
    pub fn effective_default_logger(&self) -> SharedLogger {
        self.defaults.effective_default_logger()
    }

    /// The defaults this resolver falls back to.
    pub fn defaults(&self) -> &Arc<DefaultLoggers> {
        &self.defaults
    }

    /// Emit a record through the effective logger.
    pub fn log(
        &self,
        category: &str,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.effective_logger().log(category, level, message, error);
    }
}

impl Default for CategoryLoggerDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CategoryLoggerDiscovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryLoggerDiscovery")
            .field("has_logger", &self.has_logger())
            .field("defaults", &self.defaults)
            .finish()
    }
}
