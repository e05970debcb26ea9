#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! Category-scoped diagnostic logging for the client workspace. Every
//! subsystem owns a [`Logger`] bound to one or more free-form category
//! strings (`"net"`, `"tray"`, `"opengl"`, ...); debug verbosity is toggled
//! per category, at runtime, across all live loggers at once, without the
//! toggling code holding references to any of them.
//!
//! # Design
//!
//! A process-wide registry maps each category to a list of [`Weak`]
//! references to the loggers carrying it. Construction resolves a logger's
//! initial threshold from the active [`DebugConfig`] - the explicitly
//! enabled/disabled category sets plus `XPRA_<CATEGORY>_DEBUG=1` environment
//! toggles captured once at startup - and registers the logger under its
//! categories plus the [`"all"`](ALL_CATEGORY) wildcard. That resolution
//! happens exactly once; afterwards only [`Logger::enable_debug`] /
//! [`Logger::disable_debug`] (directly or via [`enable_debug_for`] /
//! [`disable_debug_for`]) change the threshold.
//!
//! Emission goes through the [`debug_log!`] macro family, which checks the
//! threshold before evaluating or formatting any argument. Admitted records
//! are handed to the installed [`LogSink`]; the default [`StderrSink`] prints
//! one line per record, and [`CaptureSink`] buffers records for assertions.
//!
//! # Invariants
//!
//! - The enabled and disabled category sets are disjoint; adding a category
//!   to one removes it from the other.
//! - The registry never keeps a logger alive: entries are weak, and a
//!   reclaimed logger is skipped (and pruned) when its categories are walked.
//! - A suppressed record performs no formatting work.
//! - Construction never fails; unknown categories and unset environment
//!   variables simply yield the INFO default.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{CaptureSink, Logger, debug_log, enable_debug_for, set_sink};
//!
//! let sink = Arc::new(CaptureSink::new());
//! set_sink(sink.clone());
//!
//! let log = Logger::new("client::net", &["example-net", "example-protocol"]);
//! debug_log!(log, "handshake took {}ms", 12);
//! assert!(sink.drain().is_empty());           // debug starts disabled
//!
//! enable_debug_for("example-protocol");        // flips the live logger
//! debug_log!(log, "handshake took {}ms", 12);
//! let records = sink.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].message, "handshake took 12ms");
//! ```
//!
//! [`Weak`]: std::sync::Weak

mod config;
mod level;
mod logger;
mod macros;
mod registry;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ALL_CATEGORY, DebugConfig, KNOWN_CATEGORIES, debug_env_var, is_known_category};
pub use level::LogLevel;
pub use logger::Logger;
pub use registry::{
    add_debug_category, add_disabled_category, debug_config, disable_debug_for, enable_debug_for,
    get_all_loggers, init, remove_debug_category, remove_disabled_category, set_sink,
};
pub use sink::{CaptureSink, LogRecord, LogSink, StderrSink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingSink;
