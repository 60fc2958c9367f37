//! Log callback system.
//!
//! The crate does not pick a logging backend. Hosts that want diagnostics
//! install a callback and forward messages to whatever they use.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> MutexGuard<'static, Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    // A panicking callback poisons the lock; the slot itself is still valid.
    CALLBACK
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    *log_callback() = Some(Box::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    *log_callback() = None;
}

/// Emit a log message to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Some(callback) = log_callback().as_ref() {
        callback(level, message);
    }
}
