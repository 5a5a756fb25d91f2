//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerSettings → Result<(), Vec<ValidationError>>
//! - Backend names are not resolved here; the registry may not be populated yet

use thiserror::Error;

use crate::config::schema::LoggerSettings;
use crate::logging::Level;

/// A semantic problem in loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("default_category_logger must not be empty")]
    EmptyBackend,

    #[error("default_category_logger {0:?} has leading or trailing whitespace")]
    SurroundingWhitespace(String),

    #[error("observability.log_level {0:?} is not a log level")]
    InvalidLogLevel(String),
}

/// Check `settings`, collecting every problem found.
pub fn validate_settings(settings: &LoggerSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let backend = &settings.default_category_logger;
    if backend.trim().is_empty() {
        errors.push(ValidationError::EmptyBackend);
    } else if backend.trim() != backend {
        errors.push(ValidationError::SurroundingWhitespace(backend.clone()));
    }

    if settings.observability.log_level.parse::<Level>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            settings.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
