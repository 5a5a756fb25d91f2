//! Shared utilities for integration tests.

use std::error::Error;
use std::sync::Mutex;

use category_logger::{CategoryLogger, Level};

/// A logger that keeps every record in memory.
#[derive(Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<(String, Level, String)>>,
}

#[allow(dead_code)]
impl RecordingLogger {
    pub fn records(&self) -> Vec<(String, Level, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|(_, _, m)| m).collect()
    }
}

impl CategoryLogger for RecordingLogger {
    fn log(
        &self,
        category: &str,
        level: Level,
        message: &str,
        _error: Option<&(dyn Error + 'static)>,
    ) {
        self.records
            .lock()
            .unwrap()
            .push((category.to_string(), level, message.to_string()));
    }
}
