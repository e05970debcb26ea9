//! crates/logging/src/tracing_bridge.rs
//! Bridge between category loggers and the tracing ecosystem.
//!
//! Installing a [`TracingSink`] routes every emitted [`LogRecord`] to the
//! active tracing subscriber, so deployments that already collect tracing
//! output get category-logger diagnostics in the same stream. Category
//! filtering still happens on the logger side; the subscriber only sees
//! records that passed a threshold.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{TracingSink, set_sink};
//!
//! tracing_subscriber::fmt::init();
//! set_sink(Arc::new(TracingSink));
//! ```

use super::sink::{LogRecord, LogSink};
use crate::LogLevel;

/// A sink forwarding records as tracing events.
///
/// The logger name travels as the `logger` field (tracing targets must be
/// static, so the dynamic name cannot be the target) and an attached error
/// chain as the `source` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &LogRecord) {
        let logger = record.target.as_str();
        let source = record.source.as_deref();
        match record.level {
            LogLevel::Debug => {
                tracing::debug!(logger, source, "{}", record.message);
            }
            LogLevel::Info => {
                tracing::info!(logger, source, "{}", record.message);
            }
            LogLevel::Warn => {
                tracing::warn!(logger, source, "{}", record.message);
            }
            LogLevel::Error => {
                tracing::error!(logger, source, "{}", record.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<(Level, String, Option<String>)>>>,
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        logger: Option<String>,
    }

    impl Visit for FieldVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.message = Some(format!("{value:?}"));
            }
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "logger" {
                self.logger = Some(value.to_owned());
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.events.lock().unwrap().push((
                *event.metadata().level(),
                visitor.message.unwrap_or_default(),
                visitor.logger,
            ));
        }
    }

    #[test]
    fn records_become_events_at_matching_levels() {
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.write(&LogRecord::new(LogLevel::Warn, "net", "packet loss"));
            TracingSink.write(&LogRecord::new(LogLevel::Debug, "paint", "flush"));
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, Level::WARN);
        assert_eq!(events[0].1, "packet loss");
        assert_eq!(events[0].2.as_deref(), Some("net"));
        assert_eq!(events[1].0, Level::DEBUG);
    }
}
