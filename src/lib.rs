//! Category logger discovery.
//!
//! Picks the logging backend a library delegates to without the library
//! depending on any particular backend. The effective logger for a consumer
//! is its own override if set, else the process-wide override, else the
//! compiled-in default chosen once from `DEFAULT_CATEGORY_LOGGER`.
//!
//! ```rust,no_run
//! use category_logger::discovery::{self, CategoryLoggerDiscovery};
//! use category_logger::{Level, LoggerSettings};
//!
//! discovery::init(&LoggerSettings::from_env()).expect("logger configuration");
//! let logger = CategoryLoggerDiscovery::new();
//! logger.log("transport", Level::Info, "connection opened", None);
//! ```

pub mod backends;
pub mod config;
pub mod discovery;
pub mod logging;
pub mod observability;
pub mod registry;

pub use config::LoggerSettings;
pub use discovery::{CategoryLoggerDiscovery, DefaultLoggers, DiscoveryError};
pub use logging::{CategoryLogger, Level, SharedLogger};
