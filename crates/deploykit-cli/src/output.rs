//! Formatted output helpers for CLI commands.
//!
//! Provides consistent headings and colored pass/fail markers.

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Returns a colored check mark or cross.
#[must_use]
pub const fn marker(ok: bool) -> &'static str {
    if ok {
        "\x1b[32m\u{2713}\x1b[0m"
    } else {
        "\x1b[31m\u{2717}\x1b[0m"
    }
}

/// Formats a bold heading underlined to its own width.
#[must_use]
pub fn heading(title: &str) -> String {
    format!("{BOLD}{title}{RESET}\n{}", "\u{2550}".repeat(title.chars().count()))
}

/// Formats a one-line outcome for a named step.
#[must_use]
pub fn outcome(step: &str, ok: bool) -> String {
    let (color, word) = if ok { (GREEN, "passed") } else { (RED, "failed") };
    format!("  {} {step}: {color}{word}{RESET}", marker(ok))
}
