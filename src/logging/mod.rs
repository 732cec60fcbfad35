//! # Logging Module
//!
//! Console output for the banner tool:
//! - Per-file info lines on stdout, colored when supported
//! - Verbose lines on stderr, only when enabled
//! - Error lines on stderr, always
//!
//! Info and error output are kept on separate streams so stdout can be piped
//! without picking up failures.
//!
//! ## Example
//!
//! ```rust
//! use lnear_banner::logging::{ColorMode, set_verbose};
//! use lnear_banner::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Auto.apply();
//!
//! // Goes to stderr
//! verbose_log!("Processing file: {}", "index.ts");
//!
//! // Goes to stdout
//! info_log!("Prepended to {}", "index.ts");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// Uses the same format string syntax as [`println!`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Logs an `Error: ` prefixed message to stderr, regardless of output mode.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logging::print_error_log(&format!($($arg)*));
    };
}

/// Prints an info line to stdout, yellow when colors are enabled.
///
/// Used by [`info_log!`].
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}

/// Prints an error line to stderr, red when colors are enabled.
///
/// Used by [`error_log!`].
pub fn print_error_log(message: &str) {
  eprintln!(
    "{} {}",
    "Error:".if_supports_color(Stream::Stderr, |m| m.red()),
    message
  );
}
