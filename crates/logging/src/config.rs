//! crates/logging/src/config.rs
//! Debug-category override layer: explicit category sets plus environment
//! toggles captured once at startup.

use std::collections::BTreeSet;
use std::env;

use super::level::LogLevel;

/// The wildcard category. A logger constructed while `"all"` is in the
/// enabled set starts with debug on, and every logger registers under it so
/// [`enable_debug_for("all")`](crate::enable_debug_for) reaches all of them.
pub const ALL_CATEGORY: &str = "all";

/// Categories used across the client codebase.
///
/// The registry does not require pre-declaration; any string is a legal
/// category. This table exists for `--help` style listings and for spotting
/// typos in command-line switches.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "auth", "bindings", "client", "clipboard", "codec", "core", "csc", "cuda",
    "dbus", "decoder", "focus", "gtk", "icon", "info", "keyboard", "launcher",
    "main", "mdns", "mmap", "net", "notify", "opengl", "paint", "platform",
    "posix", "protocol", "proxy", "randr", "server", "shadow", "tray", "util",
    "video", "window", "x11", "ximage",
];

/// Reports whether `cat` appears in [`KNOWN_CATEGORIES`].
#[must_use]
pub fn is_known_category(cat: &str) -> bool {
    KNOWN_CATEGORIES.contains(&cat)
}

/// Returns the environment variable consulted for a category, e.g.
/// `XPRA_NET_DEBUG` for `"net"`.
#[must_use]
pub fn debug_env_var(cat: &str) -> String {
    format!("XPRA_{}_DEBUG", cat.to_ascii_uppercase())
}

const ENV_PREFIX: &str = "XPRA_";
const ENV_SUFFIX: &str = "_DEBUG";

/// Override layer resolving a logger's initial debug state.
///
/// Holds the two explicitly managed category sets plus the environment
/// toggles captured when the configuration was built. The sets are kept
/// disjoint: adding a category to one removes it from the other.
///
/// Environment toggles are read once, by [`DebugConfig::from_env`], rather
/// than looked up ad hoc at every logger construction. A variable named
/// `XPRA_<CATEGORY>_DEBUG` with the value `1` enables debug for any logger
/// carrying that category at construction time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugConfig {
    enabled: BTreeSet<String>,
    disabled: BTreeSet<String>,
    /// Uppercased category names whose environment toggle was set.
    env_enabled: BTreeSet<String>,
}

impl DebugConfig {
    /// Creates an empty configuration: no categories enabled or disabled and
    /// no environment toggles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_iter(env::vars())
    }

    /// Builds a configuration from an explicit variable listing.
    ///
    /// Only variables shaped like `XPRA_<CATEGORY>_DEBUG=1` are considered;
    /// everything else is ignored, as is an empty category segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::DebugConfig;
    ///
    /// let config = DebugConfig::from_env_iter(
    ///     [("XPRA_NET_DEBUG".to_string(), "1".to_string())],
    /// );
    /// assert!(config.env_toggle_set("net"));
    /// assert!(!config.env_toggle_set("tray"));
    /// ```
    pub fn from_env_iter<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::new();
        for (key, value) in vars {
            if value != "1" {
                continue;
            }
            let Some(middle) = key
                .strip_prefix(ENV_PREFIX)
                .and_then(|rest| rest.strip_suffix(ENV_SUFFIX))
            else {
                continue;
            };
            if !middle.is_empty() {
                config.env_enabled.insert(middle.to_string());
            }
        }
        config
    }

    /// Adds `cat` to the enabled set, removing it from the disabled set.
    pub fn add_debug_category(&mut self, cat: &str) {
        self.disabled.remove(cat);
        self.enabled.insert(cat.to_string());
    }

    /// Removes `cat` from the enabled set.
    pub fn remove_debug_category(&mut self, cat: &str) {
        self.enabled.remove(cat);
    }

    /// Adds `cat` to the disabled set, removing it from the enabled set.
    pub fn add_disabled_category(&mut self, cat: &str) {
        self.enabled.remove(cat);
        self.disabled.insert(cat.to_string());
    }

    /// Removes `cat` from the disabled set.
    pub fn remove_disabled_category(&mut self, cat: &str) {
        self.disabled.remove(cat);
    }

    /// The explicitly enabled categories.
    #[must_use]
    pub fn enabled_categories(&self) -> &BTreeSet<String> {
        &self.enabled
    }

    /// The explicitly disabled categories.
    #[must_use]
    pub fn disabled_categories(&self) -> &BTreeSet<String> {
        &self.disabled
    }

    /// Reports whether the environment toggle for `cat` was captured.
    ///
    /// The lookup uppercases `cat`, mirroring the variable naming scheme:
    /// `"net"` and `"NET"` both match `XPRA_NET_DEBUG=1`.
    #[must_use]
    pub fn env_toggle_set(&self, cat: &str) -> bool {
        self.env_enabled.contains(&cat.to_ascii_uppercase())
    }

    /// Resolves the initial threshold for a logger carrying `categories`.
    ///
    /// Debug starts enabled when the wildcard or any carried category is in
    /// the enabled set, or any carried category has its environment toggle
    /// set; a carried category in the disabled set vetoes all of that. The
    /// result is resolved exactly once, at logger construction.
    #[must_use]
    pub fn initial_level(&self, categories: &[String]) -> LogLevel {
        let mut enabled = self.enabled.contains(ALL_CATEGORY);
        let mut disabled = false;
        for cat in categories {
            if self.disabled.contains(cat) {
                disabled = true;
            }
            if self.enabled.contains(cat) || self.env_toggle_set(cat) {
                enabled = true;
            }
        }
        if enabled && !disabled {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}
