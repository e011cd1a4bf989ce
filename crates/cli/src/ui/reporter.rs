//! Console output for user-facing messages

use super::icons::StatusIcon;
use hookpilot_core::{Level, Reporter};
use owo_colors::OwoColorize;

/// [`Reporter`] printing one icon-prefixed line per message
///
/// Errors go to stderr, everything else to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Render `message` for `level` with its icon and colour
    pub fn format(level: Level, message: &str) -> String {
        let icon = StatusIcon::from(level).get();
        match level {
            Level::Success => format!("{} {message}", icon.green()),
            Level::Info => format!("{} {message}", icon.cyan()),
            Level::Warning => format!("{} {}", icon.yellow(), message.yellow()),
            Level::Error => format!("{} {}", icon.red(), message.red()),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        tracing::trace!(?level, message, "Reporting to console");
        let line = Self::format(level, message);
        if level == Level::Error {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}
