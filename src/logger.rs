//! Logging utilities with colored output.
//!
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for lines that only appear with `--verbose`
//!
//! Only plain `log!` lines reach stdout. Debug, warning and error lines go
//! to stderr, so `--dry` output on stdout stays valid JSON.
//!
//! # Example
//!
//! ```ignore
//! log!("index"; "wrote {} to {}", plural_count(n, "entry", "entries"), path.display());
//! debug!("walk"; "reading {}", dir.display());
//! ```

use owo_colors::{AnsiColors, OwoColorize, Stream};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::debug($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Output stream for one log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    Stdout,
    Stderr,
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    emit(module, message, false);
}

/// Log a verbose-only message with a colored module prefix
#[inline]
pub fn debug(module: &str, message: &str) {
    emit(module, message, true);
}

fn emit(module: &str, message: &str, verbose_only: bool) {
    let module_lower = module.to_ascii_lowercase();
    match sink_for(&module_lower, verbose_only) {
        Sink::Stderr => {
            let prefix = colorize_prefix(module, &module_lower, Stream::Stderr);
            let mut stderr = stderr().lock();
            writeln!(stderr, "{prefix} {message}").ok();
            stderr.flush().ok();
        }
        Sink::Stdout => {
            let prefix = colorize_prefix(module, &module_lower, Stream::Stdout);
            let mut stdout = stdout().lock();
            writeln!(stdout, "{prefix} {message}").ok();
            stdout.flush().ok();
        }
    }
}

/// Debug lines and diagnostics never share stdout with command output.
#[inline]
fn sink_for(module_lower: &str, verbose_only: bool) -> Sink {
    if verbose_only || matches!(module_lower, "warning" | "error") {
        Sink::Stderr
    } else {
        Sink::Stdout
    }
}

/// Apply color to a module prefix based on module type
///
/// Respects `--color` through `owo_colors::set_override`.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let color = match module_lower {
        "index" => AnsiColors::BrightGreen,
        "walk" | "config" => AnsiColors::BrightBlue,
        "error" => AnsiColors::BrightRed,
        _ => AnsiColors::BrightYellow,
    };
    prefix
        .if_supports_color(stream, |text| text.color(color).bold().to_string())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_go_to_stderr() {
        assert_eq!(sink_for("warning", false), Sink::Stderr);
        assert_eq!(sink_for("error", false), Sink::Stderr);
        assert_eq!(sink_for("index", false), Sink::Stdout);
    }

    #[test]
    fn test_debug_lines_go_to_stderr() {
        for module in ["index", "walk", "config", "warning"] {
            assert_eq!(sink_for(module, true), Sink::Stderr, "{module}");
        }
    }

    #[test]
    fn test_prefix_contains_module_name() {
        owo_colors::set_override(false);
        assert_eq!(
            colorize_prefix("index", "index", Stream::Stdout),
            "[index]"
        );
        assert_eq!(colorize_prefix("Walk", "walk", Stream::Stderr), "[Walk]");
    }
}
