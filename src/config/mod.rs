//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggerSettings
//!     → DEFAULT_CATEGORY_LOGGER env var overrides the file value
//!     → discovery::init
//! ```
//!
//! # Design Decisions
//! - Settings are read once at startup; the compiled-in default never changes
//! - All fields have defaults so an empty file is valid
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, ConfigError};
pub use schema::{LoggerSettings, ObservabilityConfig, DEFAULT_CATEGORY_LOGGER_ENV};
pub use validation::{validate_settings, ValidationError};
