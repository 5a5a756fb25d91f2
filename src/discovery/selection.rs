//! Interpretation of the configured backend setting.

use std::fmt;
use std::sync::Arc;

use crate::backends::{StdoutLogger, TracingLogger};
use crate::discovery::DiscoveryError;
use crate::logging::SharedLogger;
use crate::registry::BackendRegistry;

/// Tag selecting the `tracing` adapter. Used when nothing is configured.
pub const TRACING_TAG: &str = "TRACING";

/// Tag selecting the stdout writer.
pub const STDOUT_TAG: &str = "STDOUT";

/// Tag reserved for a `log` facade binding. Selecting it is a configuration error.
pub const LOG_TAG: &str = "LOG";

/// Which backend the compiled-in default is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackendSelection {
    Tracing,
    Stdout,
    Log,
    /// Name of a backend in the registry.
    Registered(String),
}

impl BackendSelection {
    /// Map a setting value to a selection. Tags match exactly; any other
    /// value is treated as a registry name.
    pub fn from_setting(value: &str) -> Self {
        match value {
            TRACING_TAG => BackendSelection::Tracing,
            STDOUT_TAG => BackendSelection::Stdout,
            LOG_TAG => BackendSelection::Log,
            name => BackendSelection::Registered(name.to_string()),
        }
    }

    /// The setting value this selection corresponds to.
    pub fn as_str(&self) -> &str {
        match self {
            BackendSelection::Tracing => TRACING_TAG,
            BackendSelection::Stdout => STDOUT_TAG,
            BackendSelection::Log => LOG_TAG,
            BackendSelection::Registered(name) => name,
        }
    }

    /// Build the backend this selection names.
    pub fn build(&self, registry: &BackendRegistry) -> Result<SharedLogger, DiscoveryError> {
        match self {
            BackendSelection::Tracing => Ok(Arc::new(TracingLogger)),
            BackendSelection::Stdout => Ok(Arc::new(StdoutLogger)),
            BackendSelection::Log => Err(DiscoveryError::UnsupportedBackend {
                tag: LOG_TAG.to_string(),
            }),
            BackendSelection::Registered(name) => registry.instantiate(name),
        }
    }
}

impl fmt::Display for BackendSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
