//! crates/logging/src/macros.rs
//! Emission macros.
//!
//! Callers format through these rather than calling the
//! [`Logger`](crate::Logger) methods directly: the macros test the threshold before any
//! argument expression is evaluated or formatted, so suppressed records cost
//! one atomic load even when the arguments are expensive to render.

/// Creates a [`Logger`](crate::Logger) for the current module.
///
/// Expands to [`Logger::new`](crate::Logger::new) with `module_path!()` as
/// the calling context.
///
/// # Example
/// ```
/// use logging::category_logger;
///
/// let log = category_logger!("tray", "posix");
/// assert!(log.categories().contains(&"tray".to_string()));
/// assert_eq!(log.name(), module_path!());
/// ```
#[macro_export]
macro_rules! category_logger {
    ($($cat:expr),+ $(,)?) => {
        $crate::Logger::new(::core::module_path!(), &[$($cat),+])
    };
}

/// Emits at an explicit level, checking the threshold first.
///
/// # Example
/// ```ignore
/// category_log!(log, LogLevel::Warn, "lost {} frames", dropped);
/// ```
#[macro_export]
macro_rules! category_log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, ::core::format_args!($($arg)+));
        }
    }};
}

/// Emits a DEBUG record. The shortest emission form, matching how debug
/// tracing dominates call sites in the client code.
///
/// # Example
/// ```ignore
/// debug_log!(log, "draw_fbo({:?})", context);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::category_log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Emits an INFO record.
#[macro_export]
macro_rules! info_log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::category_log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Emits a WARN record.
#[macro_export]
macro_rules! warn_log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::category_log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Emits an ERROR record, optionally attaching an error value.
///
/// With a `source = expr` prefix the error's chain is rendered at the call
/// site and carried on the record.
///
/// # Example
/// ```ignore
/// error_log!(log, source = err, "failed to save {}", filename);
/// error_log!(log, "gl context unavailable");
/// ```
#[macro_export]
macro_rules! error_log {
    ($logger:expr, source = $err:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::LogLevel::Error) {
            logger.log_with_source(
                $crate::LogLevel::Error,
                ::core::format_args!($($arg)+),
                ::core::option::Option::Some(&$err),
            );
        }
    }};
    ($logger:expr, $($arg:tt)+) => {
        $crate::category_log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
