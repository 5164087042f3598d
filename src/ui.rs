//! # UI Utilities
//!
//! Shared console output helpers. Codes and decoded values go to stdout;
//! status messages go to stderr so piped output stays clean.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use owo_colors::OwoColorize;

/// Prints a success message with a path.
///
/// Format: `✓ {message}: {path}`
pub fn print_success(message: &str, path: &Path) {
    eprintln!("{} {}: {}", "✓".green(), message, path.display());
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

/// Prints an error with red prefix, including the full context chain.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
}
