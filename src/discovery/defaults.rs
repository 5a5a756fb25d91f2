//! Process-scope logger state: the compiled-in default and its override.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::config::LoggerSettings;
use crate::discovery::{BackendSelection, DiscoveryError};
use crate::logging::SharedLogger;
use crate::registry::BackendRegistry;

/// The compiled-in default logger plus the replaceable process-wide override.
///
/// The compiled-in default is fixed at construction. The override is a
/// single atomic slot: readers see either the previous or the new logger,
/// and the last write wins.
pub struct DefaultLoggers {
    compiled_in: SharedLogger,
    backend: BackendSelection,
    // ArcSwap needs a sized pointee, hence the extra Arc around the trait object.
    overridden: ArcSwapOption<SharedLogger>,
}

impl DefaultLoggers {
    /// Wrap an already constructed compiled-in default.
    pub fn new(compiled_in: SharedLogger, backend: BackendSelection) -> Self {
        Self {
            compiled_in,
            backend,
            overridden: ArcSwapOption::empty(),
        }
    }

    /// Build the compiled-in default from `settings`, resolving registry names
    /// against `registry`.
    pub fn from_settings(
        settings: &LoggerSettings,
        registry: &BackendRegistry,
    ) -> Result<Self, DiscoveryError> {
        let backend = BackendSelection::from_setting(&settings.default_category_logger);
        let compiled_in = backend.build(registry)?;
        tracing::debug!(backend = %backend, "Selected compiled-in category logger");
        Ok(Self::new(compiled_in, backend))
    }

    /// Replace the process-wide override. `None` clears it, making the
    /// compiled-in default effective again.
    pub fn set_default(&self, logger: Option<SharedLogger>) {
        tracing::debug!(set = logger.is_some(), "Default category logger override changed");
        self.overridden.store(logger.map(Arc::new));
    }

    /// The override if one is set, otherwise the compiled-in default.
    pub fn effective_default_logger(&self) -> SharedLogger {
        match self.overridden.load().as_deref() {
            Some(logger) => Arc::clone(logger),
            None => Arc::clone(&self.compiled_in),
        }
    }

    /// The logger built from configuration, ignoring any override.
    pub fn compiled_in(&self) -> &SharedLogger {
        &self.compiled_in
    }

    /// Which backend the compiled-in default was built from.
    pub fn compiled_in_backend(&self) -> &BackendSelection {
        &self.backend
    }

    /// Whether a process-wide override is currently set.
    pub fn has_override(&self) -> bool {
        self.overridden.load().is_some()
    }
}

impl fmt::Debug for DefaultLoggers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultLoggers")
            .field("backend", &self.backend)
            .field("has_override", &self.has_override())
            .finish()
    }
}
