//! Terminal output helpers.

use colored::Colorize;

#[cfg(not(windows))]
pub const TICK: &str = "✔";
#[cfg(windows)]
pub const TICK: &str = "√";

#[cfg(not(windows))]
pub const CROSS: &str = "✖";
#[cfg(windows)]
pub const CROSS: &str = "×";

/// A success line: green tick plus message.
pub fn success(message: impl AsRef<str>) -> String {
    format!("{} {}", TICK.green().bold(), message.as_ref())
}

/// An informational aside, printed mid-flow.
pub fn info(message: impl AsRef<str>) -> String {
    format!("{} {}", "!".yellow().bold(), message.as_ref())
}

/// Display name of a module for menus and messages.
pub fn display_title(title: &str) -> String {
    if title.is_empty() {
        "(untitled)".to_string()
    } else {
        title.to_string()
    }
}
