//! Platform logging adapter.
//!
//! Records become `tracing` events at the matching level, carrying the
//! category (and the error, when present) as structured fields. Whatever
//! subscriber the host process installed decides where they end up.

use std::error::Error;

use crate::logging::{CategoryLogger, Level};

/// Backend that forwards every record to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

macro_rules! emit {
    ($event:ident, $category:expr, $message:expr, $error:expr) => {
        match $error {
            Some(err) => tracing::$event!(category = $category, error = %err, "{}", $message),
            None => tracing::$event!(category = $category, "{}", $message),
        }
    };
}

impl CategoryLogger for TracingLogger {
    fn log(
        &self,
        category: &str,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        match level {
            Level::Trace => emit!(trace, category, message, error),
            Level::Debug => emit!(debug, category, message, error),
            Level::Info => emit!(info, category, message, error),
            Level::Warn => emit!(warn, category, message, error),
            Level::Error => emit!(error, category, message, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Default)]
    struct Fields(Vec<(String, String)>);

    impl Fields {
        fn get(&self, name: &str) -> Option<&str> {
            self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
        }
    }

    impl Visit for Fields {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<(tracing::Level, Fields)>>>,
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), fields));
        }
    }

    fn capture<F: FnOnce()>(f: F) -> Arc<Mutex<Vec<(tracing::Level, Fields)>>> {
        let layer = CaptureLayer::default();
        let events = layer.events.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        events
    }

    #[test]
    fn test_levels_map_to_tracing_levels() {
        let events = capture(|| {
            let logger = TracingLogger;
            logger.log("amqp", Level::Trace, "t", None);
            logger.log("amqp", Level::Debug, "d", None);
            logger.log("amqp", Level::Info, "i", None);
            logger.log("amqp", Level::Warn, "w", None);
            logger.log("amqp", Level::Error, "e", None);
        });

        let events = events.lock().unwrap();
        let levels: Vec<tracing::Level> = events.iter().map(|(lvl, _)| *lvl).collect();
        assert_eq!(
            levels,
            vec![
                tracing::Level::TRACE,
                tracing::Level::DEBUG,
                tracing::Level::INFO,
                tracing::Level::WARN,
                tracing::Level::ERROR,
            ]
        );
    }

    #[test]
    fn test_category_message_and_error_are_fields() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "peer reset");
        let events = capture(|| {
            TracingLogger.log("transport.frames", Level::Warn, "dropped frame", Some(&cause));
            TracingLogger.log("transport.frames", Level::Info, "resumed", None);
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);

        let (_, first) = &events[0];
        assert_eq!(first.get("category"), Some("transport.frames"));
        assert_eq!(first.get("message"), Some("dropped frame"));
        assert_eq!(first.get("error"), Some("peer reset"));

        let (_, second) = &events[1];
        assert_eq!(second.get("message"), Some("resumed"));
        assert!(second.get("error").is_none());
    }

    #[test]
    fn test_emits_without_subscriber() {
        TracingLogger.log("engine", Level::Info, "nobody listening", None);
        TracingLogger.flush();
    }
}
