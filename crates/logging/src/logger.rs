//! crates/logging/src/logger.rs
//! The category logger handle.

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use super::level::LogLevel;
use super::registry;
use super::sink::LogRecord;

/// State shared between a [`Logger`] handle, its clones, and the registry's
/// weak references to it.
#[derive(Debug)]
pub(crate) struct Shared {
    name: String,
    categories: Vec<String>,
    /// Current threshold, stored as [`LogLevel::as_u8`].
    threshold: AtomicU8,
}

impl Shared {
    pub(crate) fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    pub(crate) fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.as_u8(), Ordering::Relaxed);
    }

    pub(crate) fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// A named log emitter bound to one or more categories.
///
/// A logger is typically created once per subsystem and lives for the process
/// lifetime. Construction resolves the initial debug state from the active
/// [`DebugConfig`](crate::DebugConfig) and registers the logger, non-owningly,
/// under each of its categories plus [`"all"`](crate::ALL_CATEGORY); dropping
/// every handle reclaims the logger regardless of that registration.
///
/// Handles are cheap to clone and share the same threshold: toggling debug on
/// a clone toggles it everywhere.
///
/// Emission goes through the [`debug_log!`](crate::debug_log) family of
/// macros, which check the threshold before any argument is evaluated or
/// formatted. The methods on this type take [`fmt::Arguments`] and are the
/// macros' expansion targets.
///
/// # Examples
///
/// ```
/// use logging::{Logger, debug_log};
///
/// let log = Logger::new("client::tray", &["tray", "posix"]);
/// assert_eq!(log.name(), "client::tray");
/// assert!(!log.is_debug_enabled());
///
/// debug_log!(log, "icon refresh skipped");    // suppressed at INFO
/// log.enable_debug();
/// debug_log!(log, "icon refresh skipped");    // emitted
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    shared: Arc<Shared>,
}

impl Logger {
    /// Creates a logger for the given calling context.
    ///
    /// `context` is the name of the enclosing module or unit, normally
    /// supplied as `module_path!()`; the
    /// [`category_logger!`](crate::category_logger) macro does exactly that.
    /// It becomes the
    /// logger's name and is carried as an additional category, so
    /// [`enable_debug_for`](crate::enable_debug_for) can target a module by
    /// its own name as well as by its declared categories.
    #[must_use]
    pub fn new(context: &str, categories: &[&str]) -> Self {
        let mut cats: Vec<String> = categories.iter().map(ToString::to_string).collect();
        cats.push(context.to_string());
        Self::build(context.to_string(), cats)
    }

    /// Creates a logger from categories alone, for top-level entry points
    /// that have no meaningful module name. The name is the categories joined
    /// by `.`, and no extra category is added.
    #[must_use]
    pub fn from_categories(categories: &[&str]) -> Self {
        let cats: Vec<String> = categories.iter().map(ToString::to_string).collect();
        Self::build(cats.join("."), cats)
    }

    fn build(name: String, categories: Vec<String>) -> Self {
        let shared = Arc::new(Shared {
            name,
            categories,
            threshold: AtomicU8::new(LogLevel::Info.as_u8()),
        });
        registry::register(&shared);
        Self { shared }
    }

    pub(crate) fn from_shared(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    pub(crate) fn shared_ptr(&self) -> *const Shared {
        Arc::as_ptr(&self.shared)
    }

    /// The logger's name, used as the record target.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// The categories this logger is registered under, excluding the implicit
    /// `"all"`.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.shared.categories()
    }

    /// The current emission threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.shared.level()
    }

    /// Sets the threshold to [`LogLevel::Debug`].
    pub fn enable_debug(&self) {
        self.shared.set_level(LogLevel::Debug);
    }

    /// Sets the threshold back to [`LogLevel::Info`].
    pub fn disable_debug(&self) {
        self.shared.set_level(LogLevel::Info);
    }

    /// Reports whether the current threshold admits DEBUG records.
    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.enabled(LogLevel::Debug)
    }

    /// Reports whether the current threshold admits `level`.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.shared.level().admits(level)
    }

    /// Emits a record at `level` if the threshold admits it.
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.dispatch(LogRecord::new(level, self.name(), args.to_string()));
        }
    }

    /// Emits a record with an error attached, rendered at call time.
    ///
    /// The full chain is captured by walking [`Error::source`]. Passing
    /// `None` yields a record with no source detail; it is not an error.
    pub fn log_with_source(
        &self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        source: Option<&dyn Error>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let mut record = LogRecord::new(level, self.name(), args.to_string());
        if let Some(err) = source {
            record = record.with_source(render_error_chain(err));
        }
        self.dispatch(record);
    }

    /// Emits a record carrying key/value metadata.
    pub fn log_with_fields(
        &self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        fields: Vec<(String, String)>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let mut record = LogRecord::new(level, self.name(), args.to_string());
        record.fields = fields;
        self.dispatch(record);
    }

    /// Emits at [`LogLevel::Debug`].
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    /// Emits at [`LogLevel::Info`].
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    /// Emits at [`LogLevel::Warn`].
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    /// Emits at [`LogLevel::Error`].
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    fn dispatch(&self, record: LogRecord) {
        registry::current_sink().write(&record);
    }
}

impl fmt::Display for Logger {
    /// Renders as `Logger(cat, cat, ...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logger({})", self.shared.categories.join(", "))
    }
}

fn render_error_chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut cause = err.source();
    while let Some(err) = cause {
        rendered.push_str(": ");
        rendered.push_str(&err.to_string());
        cause = err.source();
    }
    rendered
}
