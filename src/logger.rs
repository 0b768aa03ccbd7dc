//! Structured logging with visual formatting.
//!
//! All user-facing output flows through the macros defined here, which produce
//! a connected block layout using Unicode box drawing characters. Logging can
//! be disabled at runtime for quiet operation during tests.
//!
//! Conventions:
//! - `log_version!` prints the startup header (`┏ monitorctl vX.Y.Z ━━╸`), once.
//! - `log_block_start!` opens a new conceptual block (an empty `┃` line, then
//!   `┣ message`). Related follow-up lines use `log_decorated!` or
//!   `log_indented!`.
//! - `log_pipe!` inserts a single `┃` spacer, typically before a warning or
//!   error that interrupts the flow.
//! - `log_end!` prints the final `╹` marker, once at exit.
//! - The semantic macros (`log_info!`, `log_warning!`, `log_error!`,
//!   `log_debug!`, `log_critical!`) carry a colored `[LEVEL]` prefix.
//!   `log_error_exit!` terminates the block with a `┗` corner and is reserved
//!   for messages immediately preceding process exit.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Runtime switch for all log output.
pub struct Log;

impl Log {
    /// Enable or disable logging for the current process.
    ///
    /// Used by tests and by callers that need quiet operation.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }
}

// Routes formatted output to stdout (needed by macros).
pub fn write_output(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

/// Log a decorated message, typically as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣ {message}\n"));
        }
    }};
}

/// Log an indented message for sub-items or details within a block.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log a block start message, initiating a new conceptual block.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        if $crate::logger::Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ monitorctl v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log a warning message with pipe prefix and yellow-colored level tag.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an error message with pipe prefix and red-colored level tag.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an error message that terminates the block with a `┗` corner.
/// Reserved for messages immediately preceding process exit.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┃\n┗[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an informational message with pipe prefix and green-colored level tag.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[32mINFO\x1b[0m] {message}\n"));
        }
    }};
}

/// Log a debug/operational message with pipe prefix and green-colored level tag.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[32mDEBUG\x1b[0m] {message}\n"));
        }
    }};
}

/// Log a critical message with pipe prefix and red-colored level tag.
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[31mCRITICAL\x1b[0m] {message}\n"));
        }
    }};
}
