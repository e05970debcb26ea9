//! crates/logging/src/registry.rs
//! Process-wide, non-owning index from category to live loggers.
//!
//! The registry exists so debug verbosity can be toggled in bulk ("turn on
//! every `net`-tagged logger") without holding references to the individual
//! loggers. It stores [`Weak`] references only: a logger is reclaimed as soon
//! as its last [`Logger`] handle is dropped, and dead entries are skipped and
//! lazily pruned whenever a category is walked.
//!
//! All state lives behind one [`Mutex`]; logger construction, the category
//! sets, and sink installation go through the same lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};

use super::config::{ALL_CATEGORY, DebugConfig};
use super::logger::{Logger, Shared};
use super::sink::{LogSink, StderrSink};

struct State {
    /// Category name to non-owning logger references. Entries accumulate for
    /// the process lifetime; there is no removal API.
    loggers: HashMap<String, Vec<Weak<Shared>>>,
    config: DebugConfig,
    sink: Arc<dyn LogSink>,
}

impl State {
    fn new() -> Self {
        Self {
            loggers: HashMap::new(),
            // Environment toggles are captured on first use unless init()
            // installed an explicit configuration earlier.
            config: DebugConfig::from_env(),
            sink: Arc::new(StderrSink),
        }
    }
}

fn state() -> MutexGuard<'static, State> {
    static STATE: OnceLock<Mutex<State>> = OnceLock::new();
    STATE
        .get_or_init(|| Mutex::new(State::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Installs the debug configuration, replacing the captured-at-first-use
/// default. Loggers already constructed keep their resolved state; only
/// subsequent constructions consult the new configuration.
pub fn init(config: DebugConfig) {
    state().config = config;
}

/// Returns a snapshot of the active debug configuration.
#[must_use]
pub fn debug_config() -> DebugConfig {
    state().config.clone()
}

/// Adds `cat` to the enabled-categories set (and removes it from the
/// disabled set). Affects loggers constructed from now on.
pub fn add_debug_category(cat: &str) {
    state().config.add_debug_category(cat);
}

/// Removes `cat` from the enabled-categories set.
pub fn remove_debug_category(cat: &str) {
    state().config.remove_debug_category(cat);
}

/// Adds `cat` to the disabled-categories set (and removes it from the
/// enabled set). Affects loggers constructed from now on.
pub fn add_disabled_category(cat: &str) {
    state().config.add_disabled_category(cat);
}

/// Removes `cat` from the disabled-categories set.
pub fn remove_disabled_category(cat: &str) {
    state().config.remove_disabled_category(cat);
}

/// Installs the sink that receives every emitted record.
pub fn set_sink(sink: Arc<dyn LogSink>) {
    state().sink = sink;
}

pub(crate) fn current_sink() -> Arc<dyn LogSink> {
    Arc::clone(&state().sink)
}

/// Resolves the initial threshold for a freshly built logger and records it
/// under each of its categories plus `"all"`. Registering the same logger
/// twice under a category is harmless.
pub(crate) fn register(shared: &Arc<Shared>) {
    let mut state = state();
    shared.set_level(state.config.initial_level(shared.categories()));
    let weak = Arc::downgrade(shared);
    for cat in shared.categories() {
        state
            .loggers
            .entry(cat.clone())
            .or_default()
            .push(weak.clone());
    }
    state
        .loggers
        .entry(ALL_CATEGORY.to_string())
        .or_default()
        .push(weak);
}

/// Returns every currently live logger, de-duplicated.
///
/// Dead references are silently dropped. The order is unspecified.
#[must_use]
pub fn get_all_loggers() -> Vec<Logger> {
    let mut state = state();
    let mut seen = Vec::new();
    let mut live = Vec::new();
    for refs in state.loggers.values_mut() {
        refs.retain(|weak| {
            let Some(shared) = weak.upgrade() else {
                return false;
            };
            let ptr = Arc::as_ptr(&shared);
            if !seen.contains(&ptr) {
                seen.push(ptr);
                live.push(Logger::from_shared(shared));
            }
            true
        });
    }
    live
}

/// Enables debug on every live logger registered under `cat` and returns how
/// many were toggled. A category with no registered loggers is a no-op.
pub fn enable_debug_for(cat: &str) -> usize {
    for_each_registered(cat, Logger::enable_debug)
}

/// Disables debug on every live logger registered under `cat` and returns
/// how many were toggled.
pub fn disable_debug_for(cat: &str) -> usize {
    for_each_registered(cat, Logger::disable_debug)
}

fn for_each_registered(cat: &str, apply: impl Fn(&Logger)) -> usize {
    let mut state = state();
    let Some(refs) = state.loggers.get_mut(cat) else {
        return 0;
    };
    let mut toggled = Vec::new();
    refs.retain(|weak| {
        let Some(shared) = weak.upgrade() else {
            return false;
        };
        let ptr = Arc::as_ptr(&shared);
        // The same logger may be registered twice under one category.
        if !toggled.contains(&ptr) {
            toggled.push(ptr);
            apply(&Logger::from_shared(shared));
        }
        true
    });
    toggled.len()
}
