//! CLI theme and styling.

use colored::Colorize;
use igniter_config::{Entry, EntryKind};

/// CLI theme configuration.
pub(crate) struct Theme;

impl Theme {
    /// Format a field label.
    pub(crate) fn label(text: &str) -> String {
        format!("{}", text.bold().cyan())
    }

    /// Format a success message.
    pub(crate) fn success(text: &str) -> String {
        format!("{} {}", "✓".green(), text)
    }

    /// Format an error message.
    pub(crate) fn error(text: &str) -> String {
        format!("{} {}", "✗".red(), text.red())
    }

    /// Format a report entry, colored by kind.
    pub(crate) fn entry(entry: &Entry) -> String {
        let text = entry.to_string();
        match entry.kind {
            EntryKind::Warning => format!("{} {}", "!".yellow(), text.yellow()),
            EntryKind::Deprecated => format!("{} {}", "~".magenta(), text),
            EntryKind::Info => format!("{} {}", "i".blue(), text.dimmed()),
        }
    }
}
