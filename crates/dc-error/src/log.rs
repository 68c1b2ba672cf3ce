//! Leveled stderr logging for the crate's own internals.
//!
//! This is separate from the [`Reporter`](crate::Reporter) attached to an
//! error record: the reporter is part of the public contract, these macros
//! only trace what the record is doing.
//!
//! # Environment Variables
//!
//! - `DC_ERROR_FLUSH_EPRINT=1` - Flush stderr after each line
//! - `DC_ERROR_LOG_LEVEL=<level>` - 0=off, 1=error, 2=warn, 3=info, 4=debug, 5=trace
//!
//! # Usage
//!
//! ```ignore
//! use dc_error::{ddebug, dwarn};
//!
//! ddebug!("errno {} has no description", errnum);
//! dwarn!("reporter write failed: {}", e);
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::env::{env_get_bool, env_get_opt};

pub const LOG_LEVEL_VAR: &str = "DC_ERROR_LOG_LEVEL";
pub const FLUSH_VAR: &str = "DC_ERROR_FLUSH_EPRINT";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Parse a level name or number. Unrecognised input yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "off" | "0" => Some(LogLevel::Off),
            "error" | "1" => Some(LogLevel::Error),
            "warn" | "2" => Some(LogLevel::Warn),
            "info" | "3" => Some(LogLevel::Info),
            "debug" | "4" => Some(LogLevel::Debug),
            "trace" | "5" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[dc-error ERROR]",
            LogLevel::Warn => "[dc-error WARN] ",
            LogLevel::Info => "[dc-error INFO] ",
            LogLevel::Debug => "[dc-error DEBUG]",
            LogLevel::Trace => "[dc-error TRACE]",
        }
    }
}

static FLUSH_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize logging from environment variables.
///
/// Called lazily on the first log line; explicit calls are only needed for
/// deterministic startup. Levels set with [`set_log_level`] before the
/// first call are overwritten if the variable is present.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    FLUSH_ENABLED.store(env_get_bool(FLUSH_VAR, false), Ordering::Relaxed);

    if let Some(raw) = env_get_opt::<String>(LOG_LEVEL_VAR) {
        if let Some(level) = LogLevel::parse(&raw) {
            LOG_LEVEL.store(level as u8, Ordering::Relaxed);
        }
    }
}

#[inline]
pub fn flush_enabled() -> bool {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    FLUSH_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn log_level() -> LogLevel {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Set the level programmatically. Marks logging as initialized so a later
/// lazy `init()` does not override it.
pub fn set_log_level(level: LogLevel) {
    INITIALIZED.store(true, Ordering::SeqCst);
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level as u8 <= log_level() as u8
}

/// Internal: leveled line, written under the stderr lock.
#[doc(hidden)]
pub fn _dlog_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = write!(handle, "{} ", level.prefix());
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if flush_enabled() {
        let _ = handle.flush();
    }
}

#[macro_export]
macro_rules! derror {
    ($($arg:tt)*) => {{
        $crate::log::_dlog_impl($crate::log::LogLevel::Error, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! dwarn {
    ($($arg:tt)*) => {{
        $crate::log::_dlog_impl($crate::log::LogLevel::Warn, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! dinfo {
    ($($arg:tt)*) => {{
        $crate::log::_dlog_impl($crate::log::LogLevel::Info, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! ddebug {
    ($($arg:tt)*) => {{
        $crate::log::_dlog_impl($crate::log::LogLevel::Debug, format_args!($($arg)*));
    }};
}

/// Trace level log (most verbose). Every raise is traced here.
#[macro_export]
macro_rules! dtrace {
    ($($arg:tt)*) => {{
        $crate::log::_dlog_impl($crate::log::LogLevel::Trace, format_args!($($arg)*));
    }};
}
