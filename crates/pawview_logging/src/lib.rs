#![deny(missing_docs)]
//! Shared logging utilities for the pawview workspace.
//!
//! This crate provides the `paw_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::sync::Once;

#[doc(hidden)]
pub use log as __log;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! paw_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! paw_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! paw_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! paw_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! paw_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test; only the first call installs a logger and
/// it no-ops if another logger has already been set.
pub fn initialize_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        // Use debug level in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}
