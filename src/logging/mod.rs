//! # Logging Module
//!
//! Logging utilities shared by both tools:
//! - Verbose logging that can be enabled/disabled
//! - Standard info logging with color support
//! - A `tracing` subscriber for structured diagnostics
//!
//! Verbose logs and tracing output go to stderr, info logs go to stdout.
//!
//! ## Example
//!
//! ```rust
//! use srctools::logging::{ColorMode, set_verbose};
//! use srctools::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! // Goes to stderr
//! verbose_log!("Visiting: {}", "code/Core");
//!
//! // Goes to stdout
//! info_log!("Stamped: {}", "code/Core/Main.cpp");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as the standard [`eprintln!`] macro.
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
/// Uses the same format string syntax as the standard [`println!`] macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info line, yellow when the terminal supports it.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
