//! Console writer backend.

use std::error::Error;
use std::io::{self, Write};

use crate::logging::{CategoryLogger, Level};

/// Writes each record as a single line to standard output.
///
/// Line shape: `[LEVEL] category: message`, followed by
/// ` (caused by: <error>)` when an error is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLogger;

impl StdoutLogger {
    /// Render one record into `out`.
    pub fn write_record<W: Write>(
        out: &mut W,
        category: &str,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) -> io::Result<()> {
        write!(out, "[{}] {}: {}", level, category, message)?;
        if let Some(err) = error {
            write!(out, " (caused by: {})", err)?;
        }
        writeln!(out)
    }
}

impl CategoryLogger for StdoutLogger {
    fn log(
        &self,
        category: &str,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = Self::write_record(&mut handle, category, level, message, error);
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}
