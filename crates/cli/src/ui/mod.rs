//! Terminal user interface components for hookpilot
//!
//! - Interactive prompts
//! - Console reporter
//! - Status icons

pub mod icons;
pub mod prompt;
pub mod reporter;

pub use icons::{Icons, StatusIcon};
pub use prompt::DialoguerPrompter;
pub use reporter::ConsoleReporter;
