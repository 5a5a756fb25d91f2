//! Logging capability consumed by the discovery layer.
//!
//! # Responsibilities
//! - Define the `CategoryLogger` trait every backend implements
//! - Define severity levels shared by all backends
//!
//! # Design Decisions
//! - Backends are shared as `Arc<dyn CategoryLogger>` so one instance can back
//!   many consumers across threads
//! - The discovery layer never formats or filters; it only hands records over

pub mod level;

use std::error::Error;
use std::sync::Arc;

pub use level::{Level, ParseLevelError};

/// A logging backend that accepts categorised records.
///
/// Implementors must be `Send + Sync + 'static` so they can be published
/// through the process-wide override slot and read from any thread.
pub trait CategoryLogger: Send + Sync + 'static {
    /// Emit a single record.
    ///
    /// `category` is an opaque caller-supplied label (usually a subsystem
    /// name). `error` is the optional cause attached to the record.
    fn log(
        &self,
        category: &str,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    );

    /// Flush any buffered records.
    fn flush(&self) {}
}

/// Shared handle to a logging backend.
pub type SharedLogger = Arc<dyn CategoryLogger>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        records: Mutex<Vec<(String, Level, String, Option<String>)>>,
    }

    impl CategoryLogger for RecordingLogger {
        fn log(
            &self,
            category: &str,
            level: Level,
            message: &str,
            error: Option<&(dyn Error + 'static)>,
        ) {
            self.records.lock().unwrap().push((
                category.to_string(),
                level,
                message.to_string(),
                error.map(|e| e.to_string()),
            ));
        }
    }

    #[test]
    fn test_logger_receives_error_cause() {
        let logger = RecordingLogger::default();
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");

        logger.log("transport", Level::Warn, "frame dropped", Some(&cause));
        logger.log("transport", Level::Info, "reconnected", None);
        logger.flush();

        let records = logger.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, "transport");
        assert_eq!(records[0].1, Level::Warn);
        assert_eq!(records[0].3.as_deref(), Some("socket closed"));
        assert!(records[1].3.is_none());
    }

    #[test]
    fn test_shared_logger_is_usable_as_trait_object() {
        let logger: SharedLogger = Arc::new(RecordingLogger::default());
        let clone = Arc::clone(&logger);
        clone.log("engine", Level::Debug, "", None);
        assert!(Arc::ptr_eq(&logger, &clone));
    }
}
