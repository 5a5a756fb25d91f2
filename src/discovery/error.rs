//! Discovery error definitions.

use thiserror::Error;

use crate::registry::BoxError;

/// Errors raised while establishing the compiled-in default logger.
///
/// All of them are configuration errors: they surface from initialisation and
/// are meant to be fixed before the process is started again. Once a default
/// is installed, resolution and overrides cannot fail.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A reserved backend tag was selected but has no implementation.
    #[error("category logger backend {tag:?} is reserved and not supported")]
    UnsupportedBackend { tag: String },

    /// No backend is registered under the configured name.
    #[error("no category logger backend registered as {name:?}")]
    BackendNotFound { name: String },

    /// The backend factory failed to construct an instance.
    #[error("failed to instantiate category logger backend {name:?}: {source}")]
    Instantiation {
        name: String,
        #[source]
        source: BoxError,
    },

    /// The backend was constructed but was not registered as a `CategoryLogger`.
    #[error("backend {name:?} produced {type_name}, which is not registered as a CategoryLogger")]
    NotALogger {
        name: String,
        type_name: &'static str,
    },

    /// The process-wide default has already been installed.
    #[error("default category logger is already initialized")]
    AlreadyInitialized,
}
