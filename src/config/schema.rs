//! Configuration schema definitions.

use std::ffi::OsString;

use serde::{Deserialize, Serialize};

use crate::discovery::TRACING_TAG;

/// Environment variable naming the compiled-in default backend.
pub const DEFAULT_CATEGORY_LOGGER_ENV: &str = "DEFAULT_CATEGORY_LOGGER";

/// Root settings for logger discovery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Backend tag (`TRACING`, `STDOUT`, `LOG`) or registered backend name.
    pub default_category_logger: String,

    /// Observability settings for the bundled binary.
    pub observability: ObservabilityConfig,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            default_category_logger: TRACING_TAG.to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl LoggerSettings {
    /// Settings taken from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env_override()
    }

    /// Replace the backend with the `DEFAULT_CATEGORY_LOGGER` value, if set.
    pub fn with_env_override(self) -> Self {
        self.with_os_override_from(|key| std::env::var_os(key))
    }

    /// Like [`with_override_from`](Self::with_override_from) for raw OS values.
    ///
    /// A value that is not valid UTF-8 is kept in lossy form, so it selects
    /// no known backend and initialisation reports `BackendNotFound`.
    pub fn with_os_override_from<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        self.with_override_from(|key| lookup(key).map(|value| value.to_string_lossy().into_owned()))
    }

    /// Replace the backend with the value `lookup` returns for
    /// `DEFAULT_CATEGORY_LOGGER`, if any.
    pub fn with_override_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DEFAULT_CATEGORY_LOGGER_ENV) {
            self.default_category_logger = value;
        }
        self
    }
}

/// Observability settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.default_category_logger, "TRACING");
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_override_from_lookup() {
        let settings = LoggerSettings::default().with_override_from(|key| {
            (key == "DEFAULT_CATEGORY_LOGGER").then(|| "STDOUT".to_string())
        });
        assert_eq!(settings.default_category_logger, "STDOUT");
    }

    #[test]
    fn test_absent_lookup_keeps_value() {
        let settings = LoggerSettings {
            default_category_logger: "acme".to_string(),
            ..LoggerSettings::default()
        }
        .with_override_from(|_| None);
        assert_eq!(settings.default_category_logger, "acme");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_not_dropped() {
        use crate::discovery::{DefaultLoggers, DiscoveryError};
        use crate::registry::BackendRegistry;
        use std::os::unix::ffi::OsStringExt;

        let settings = LoggerSettings::default().with_os_override_from(|key| {
            (key == "DEFAULT_CATEGORY_LOGGER").then(|| OsString::from_vec(vec![b'S', 0xff, b'X']))
        });
        assert_ne!(settings.default_category_logger, "TRACING");
        assert_eq!(settings.default_category_logger, "S\u{FFFD}X");

        let result = DefaultLoggers::from_settings(&settings, &BackendRegistry::new());
        assert!(matches!(result, Err(DiscoveryError::BackendNotFound { .. })));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: LoggerSettings = toml::from_str("default_category_logger = \"STDOUT\"").unwrap();
        assert_eq!(settings.default_category_logger, "STDOUT");
        assert_eq!(settings.observability, ObservabilityConfig::default());

        let empty: LoggerSettings = toml::from_str("").unwrap();
        assert_eq!(empty, LoggerSettings::default());
    }
}
