//! crates/logging/src/sink.rs
//! Record type and sink abstraction for emitted diagnostics.
//!
//! The facility defines only the filtering and dispatch contract; rendering
//! and routing belong to the installed [`LogSink`]. A sink failure (for
//! example an I/O error while writing a line) is the sink's responsibility
//! and never surfaces to logging call sites.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use super::level::LogLevel;

/// A single diagnostic record, forwarded verbatim to the installed sink.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogRecord {
    /// Severity of the record.
    pub level: LogLevel,
    /// Name of the emitting logger.
    pub target: String,
    /// The formatted message.
    pub message: String,
    /// Rendered error chain attached at the call site, if any.
    pub source: Option<String>,
    /// Arbitrary key/value metadata supplied by the caller.
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Creates a record with no source and no metadata.
    #[must_use]
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            target: target.into(),
            message: message.into(),
            source: None,
            fields: Vec::new(),
        }
    }

    /// Attaches a rendered error chain.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Appends one key/value metadata pair.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// Destination for diagnostic records.
///
/// Implementations must be callable from any thread. Writing is infallible
/// from the caller's perspective; sinks swallow or report their own I/O
/// failures.
pub trait LogSink: Send + Sync {
    /// Consumes one record.
    fn write(&self, record: &LogRecord);
}

/// The default sink: one line per record on standard error.
///
/// The format is deliberately minimal: `level target: message`, the error
/// chain appended after `: `, metadata as trailing `key=value` pairs.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, record: &LogRecord) {
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        let _ = write!(out, "{} {}: {}", record.level, record.target, record.message);
        if let Some(source) = &record.source {
            let _ = write!(out, ": {source}");
        }
        for (key, value) in &record.fields {
            let _ = write!(out, " {key}={value}");
        }
        let _ = writeln!(out);
    }
}

/// A sink that buffers records for later inspection.
///
/// Intended for tests: install it with [`set_sink`](crate::set_sink), emit,
/// then [`drain`](Self::drain) and assert. Records accumulate until drained.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{CaptureSink, LogLevel, LogRecord, LogSink};
///
/// let sink = Arc::new(CaptureSink::new());
/// sink.write(&LogRecord::new(LogLevel::Info, "net", "connected"));
///
/// let records = sink.drain();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "connected");
/// assert!(sink.drain().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CaptureSink {
    records: Mutex<Vec<LogRecord>>,
}

impl CaptureSink {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all buffered records, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<LogRecord> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        records.drain(..).collect()
    }
}

impl LogSink for CaptureSink {
    fn write(&self, record: &LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}
