//! crates/logging/src/level.rs
//! Severity levels and threshold semantics for category loggers.

use std::fmt;
use std::str::FromStr;

/// Severity of a diagnostic record, and also a logger's emission threshold.
///
/// Levels are totally ordered from [`LogLevel::Debug`] (lowest) to
/// [`LogLevel::Error`] (highest). A logger with threshold `t` emits a record
/// of level `l` when `l >= t`, so a threshold of [`LogLevel::Info`] suppresses
/// debug output while a threshold of [`LogLevel::Debug`] admits everything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose diagnostics, off by default.
    Debug = 0,
    /// Normal operational messages. The default threshold.
    Info = 1,
    /// Something unexpected that does not interrupt the operation.
    Warn = 2,
    /// An operation failed.
    Error = 3,
}

impl LogLevel {
    /// Reports whether a threshold of `self` admits a record of `level`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LogLevel;
    ///
    /// assert!(LogLevel::Debug.admits(LogLevel::Debug));
    /// assert!(LogLevel::Info.admits(LogLevel::Warn));
    /// assert!(!LogLevel::Info.admits(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn admits(self, level: Self) -> bool {
        level >= self
    }

    /// Returns the lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Stable integer form used for the atomic threshold cell.
    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8). Out-of-range values fall back to
    /// [`LogLevel::Info`], the construction default.
    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            2 => Self::Warn,
            3 => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Parses a level name, case-insensitively. `"warning"` is accepted as an
    /// alias for `"warn"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}
