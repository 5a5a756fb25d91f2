//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggerSettings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate settings from a TOML file.
///
/// The environment is not consulted; apply
/// [`LoggerSettings::with_env_override`] to let `DEFAULT_CATEGORY_LOGGER` win.
pub fn load_settings(path: &Path) -> Result<LoggerSettings, ConfigError> {
    let content = fs::read_to_string(path)?;
    let settings: LoggerSettings = toml::from_str(&content)?;

    validate_settings(&settings).map_err(ConfigError::Validation)?;

    tracing::debug!(path = ?path, backend = %settings.default_category_logger, "Loaded logger settings");
    Ok(settings)
}
