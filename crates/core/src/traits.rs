//! Core behavioral traits for hookpilot components
//!
//! These traits decouple the reconciliation logic from the terminal, the
//! console and the package manager, so operations can be driven by
//! scripted fakes in tests.

use crate::Result;
use std::path::Path;

/// Interactive prompt interface
///
/// # Examples
///
/// ```ignore
/// fn pick_hook(prompter: &dyn Prompter, hooks: &[String]) -> Result<String> {
///     let index = prompter.select("Which Git hook do you want to set up?", hooks, 0)?;
///     Ok(hooks[index].clone())
/// }
/// ```
pub trait Prompter {
    /// Ask the user to pick one item, returning its index
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Ask the user to pick any number of items, returning their indices
    fn multi_select(&self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Ask a yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Ask for free-form text, optionally pre-filled with `default`
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Operation completed
    Success,
    /// Neutral progress information
    Info,
    /// Expected absence or skipped work, the operation continues
    Warning,
    /// The operation failed
    Error,
}

/// Sink for user-facing console messages
pub trait Reporter {
    /// Emit one message at the given severity
    fn report(&self, level: Level, message: &str);

    /// Shorthand for [`Level::Success`]
    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    /// Shorthand for [`Level::Info`]
    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    /// Shorthand for [`Level::Warning`]
    fn warn(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    /// Shorthand for [`Level::Error`]
    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// Runs external programs (package managers, hook tools)
pub trait CommandRunner {
    /// Run `program` with `args` in `dir`, failing on a non-zero exit
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()>;
}
