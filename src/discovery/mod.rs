//! Logger discovery subsystem.
//!
//! # Data Flow
//! ```text
//! DEFAULT_CATEGORY_LOGGER / config file
//!     → LoggerSettings
//!     → BackendSelection (TRACING | STDOUT | LOG | registry name)
//!     → DefaultLoggers (compiled-in default, built once)
//!
//! resolution, per consumer:
//!     CategoryLoggerDiscovery override
//!     → process-wide override (set_default)
//!     → compiled-in default
//! ```
//!
//! # Design Decisions
//! - Overrides are lock-free atomic slots; last write wins
//! - A bad configuration fails initialisation; there is no fallback logger
//! - Post-initialisation reads and writes cannot fail

pub mod defaults;
pub mod error;
pub mod process;
pub mod resolver;
pub mod selection;

pub use defaults::DefaultLoggers;
pub use error::DiscoveryError;
pub use process::{
    default_loggers, effective_default_logger, init, init_from_env, set_default,
    try_default_loggers,
};
pub use resolver::CategoryLoggerDiscovery;
pub use selection::{BackendSelection, LOG_TAG, STDOUT_TAG, TRACING_TAG};
