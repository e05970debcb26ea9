//! Integration tests for record emission through the installed sink.
//!
//! These verify the filtering contract end to end: suppressed levels produce
//! no record at all, toggling debug changes what reaches the sink, and the
//! error/metadata attachments arrive intact.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use logging::{
    CaptureSink, LogLevel, LogRecord, Logger, debug_log, error_log, info_log, set_sink, warn_log,
};

/// One capture sink for the whole binary; tests are serialized and read only
/// their own target's records.
static LOCK: Mutex<()> = Mutex::new(());

fn serialize() -> MutexGuard<'static, ()> {
    sink();
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

fn sink() -> &'static Arc<CaptureSink> {
    static SINK: OnceLock<Arc<CaptureSink>> = OnceLock::new();
    SINK.get_or_init(|| {
        let sink = Arc::new(CaptureSink::new());
        set_sink(sink.clone());
        sink
    })
}

fn records_for(target: &str) -> Vec<LogRecord> {
    sink()
        .drain()
        .into_iter()
        .filter(|record| record.target == target)
        .collect()
}

// ============================================================================
// Threshold Filtering
// ============================================================================

/// Verifies debug output is suppressed until enable_debug, then emitted.
#[test]
fn debug_suppressed_then_emitted_after_enable() {
    let _guard = serialize();
    let log = Logger::new("emission::toggle", &["em-toggle"]);

    debug_log!(log, "hidden {}", 1);
    assert!(records_for("emission::toggle").is_empty());

    log.enable_debug();
    debug_log!(log, "visible {}", 2);
    let records = records_for("emission::toggle");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Debug);
    assert_eq!(records[0].message, "visible 2");
}

/// Verifies info/warn/error pass an INFO threshold.
#[test]
fn info_threshold_admits_higher_levels() {
    let _guard = serialize();
    let log = Logger::new("emission::levels", &["em-levels"]);

    info_log!(log, "connected to {}", "host");
    warn_log!(log, "latency {}ms", 250);
    error_log!(log, "gave up");

    let records = records_for("emission::levels");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].level, LogLevel::Info);
    assert_eq!(records[0].message, "connected to host");
    assert_eq!(records[1].level, LogLevel::Warn);
    assert_eq!(records[2].level, LogLevel::Error);
}

/// Verifies suppressed macros do not evaluate their arguments.
#[test]
fn suppressed_macro_skips_argument_evaluation() {
    let _guard = serialize();
    let log = Logger::new("emission::lazy", &["em-lazy"]);

    let evaluations = std::cell::Cell::new(0u32);
    let expensive = || {
        evaluations.set(evaluations.get() + 1);
        "rendered"
    };
    debug_log!(log, "value = {}", expensive());
    assert_eq!(evaluations.get(), 0);

    log.enable_debug();
    debug_log!(log, "value = {}", expensive());
    assert_eq!(evaluations.get(), 1);

    let records = records_for("emission::lazy");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "value = rendered");
}

// ============================================================================
// Attachments
// ============================================================================

/// Verifies error_log! with a source renders the error at the call site.
#[test]
fn error_source_is_rendered_on_the_record() {
    let _guard = serialize();
    let log = Logger::new("emission::source", &["em-source"]);

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "icon not found");
    error_log!(log, source = err, "failed to load {}", "xpra.png");

    let records = records_for("emission::source");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "failed to load xpra.png");
    assert_eq!(records[0].source.as_deref(), Some("icon not found"));
}

/// Verifies logging with no source yields a record with none attached.
#[test]
fn absent_source_is_absent_on_the_record() {
    let _guard = serialize();
    let log = Logger::new("emission::nosource", &["em-nosource"]);

    log.log_with_source(
        LogLevel::Error,
        format_args!("failed without cause"),
        None,
    );

    let records = records_for("emission::nosource");
    assert_eq!(records.len(), 1);
    assert!(records[0].source.is_none());
}

/// Verifies key/value metadata travels verbatim.
#[test]
fn metadata_fields_are_forwarded() {
    let _guard = serialize();
    let log = Logger::new("emission::fields", &["em-fields"]);

    log.log_with_fields(
        LogLevel::Info,
        format_args!("painted"),
        vec![("frames".into(), "3".into()), ("mode".into(), "fbo".into())],
    );

    let records = records_for("emission::fields");
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].fields,
        vec![
            ("frames".to_string(), "3".to_string()),
            ("mode".to_string(), "fbo".to_string()),
        ]
    );
}
