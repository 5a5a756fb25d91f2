//! Process-wide installation of the default loggers.
//!
//! # Lifecycle
//! ```text
//! startup:  init(&settings) / init_from_env()
//!     → DefaultLoggers::from_settings (global registry)
//!     → installed once, lives until process exit
//!
//! no init:  first default_loggers() call
//!     → builds from the environment
//!     → panics on a configuration error
//! ```

use std::sync::{Arc, OnceLock};

use crate::config::LoggerSettings;
use crate::discovery::{DefaultLoggers, DiscoveryError};
use crate::logging::SharedLogger;
use crate::registry;

static DEFAULTS: OnceLock<Arc<DefaultLoggers>> = OnceLock::new();

/// Build the compiled-in default from `settings` and install it process-wide.
///
/// Fails with the configuration error if the backend cannot be built, in
/// which case nothing is installed, or with `AlreadyInitialized` if a
/// default is already in place.
pub fn init(settings: &LoggerSettings) -> Result<&'static Arc<DefaultLoggers>, DiscoveryError> {
    if DEFAULTS.get().is_some() {
        return Err(DiscoveryError::AlreadyInitialized);
    }

    let defaults = DefaultLoggers::from_settings(settings, registry::global())?;
    let backend = defaults.compiled_in_backend().clone();

    let mut installed = false;
    let slot = DEFAULTS.get_or_init(|| {
        installed = true;
        Arc::new(defaults)
    });

    if !installed {
        return Err(DiscoveryError::AlreadyInitialized);
    }
    tracing::info!(backend = %backend, "Category logger discovery initialized");
    Ok(slot)
}

/// [`init`] with settings read from `DEFAULT_CATEGORY_LOGGER`.
pub fn init_from_env() -> Result<&'static Arc<DefaultLoggers>, DiscoveryError> {
    init(&LoggerSettings::from_env())
}

/// The installed defaults, if any.
pub fn try_default_loggers() -> Option<&'static Arc<DefaultLoggers>> {
    DEFAULTS.get()
}

/// The installed defaults, initialising from the environment when nothing
/// has been installed yet.
///
/// # Panics
///
/// Panics if the environment selects a backend that cannot be built. A bad
/// setting is an operator error and there is no fallback logger.
pub fn default_loggers() -> &'static Arc<DefaultLoggers> {
    DEFAULTS.get_or_init(|| {
        match DefaultLoggers::from_settings(&LoggerSettings::from_env(), registry::global()) {
            Ok(defaults) => Arc::new(defaults),
            Err(e) => panic!("invalid category logger configuration: {e}"),
        }
    })
}

/// Replace the process-wide override; `None` restores the compiled-in default.
pub fn set_default(logger: Option<SharedLogger>) {
    default_loggers().set_default(logger);
}

/// The process-wide override if set, otherwise the compiled-in default.
pub fn effective_default_logger() -> SharedLogger {
    default_loggers().effective_default_logger()
}
