//! Browser console logging with a global level threshold.
//!
//! On wasm32 the macros write through `web_sys::console`; on native targets
//! (unit tests) they format nothing and write nothing.

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Set the most verbose level that still reaches the console.
pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn enabled(level: LogLevel) -> bool {
    level as u8 <= MAX_LEVEL.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn write(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    {
        let line = wasm_bindgen::JsValue::from_str(&args.to_string());
        match level {
            LogLevel::Error => web_sys::console::error_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Info => web_sys::console::log_1(&line),
            LogLevel::Debug => web_sys::console::debug_1(&line),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = args;
}

/// Log an info message to browser console
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::logging::write($crate::logging::LogLevel::Info, format_args!($($t)*))
    }
}

/// Log a debug message to browser console
#[macro_export]
macro_rules! console_debug {
    ($($t:tt)*) => {
        $crate::logging::write($crate::logging::LogLevel::Debug, format_args!($($t)*))
    }
}

/// Log a warning message to browser console
#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {
        $crate::logging::write($crate::logging::LogLevel::Warn, format_args!($($t)*))
    }
}

/// Log an error message to browser console
#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => {
        $crate::logging::write($crate::logging::LogLevel::Error, format_args!($($t)*))
    }
}
