//! Status icons for console messages

use hookpilot_core::Level;

/// Icon constants
pub struct Icons;

impl Icons {
    // Status icons (simple text)
    pub const STATUS_SUCCESS: &'static str = "[OK]";
    pub const STATUS_WARNING: &'static str = "[!]";
    pub const STATUS_ERROR: &'static str = "[X]";
    pub const STATUS_INFO: &'static str = "[i]";

    // List bullet
    pub const HOOK: &'static str = "-";
}

/// Status icon type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Success,
    Warning,
    Error,
    Info,
}

impl StatusIcon {
    /// Text representation
    pub fn get(self) -> &'static str {
        match self {
            Self::Success => Icons::STATUS_SUCCESS,
            Self::Warning => Icons::STATUS_WARNING,
            Self::Error => Icons::STATUS_ERROR,
            Self::Info => Icons::STATUS_INFO,
        }
    }
}

impl From<Level> for StatusIcon {
    fn from(level: Level) -> Self {
        match level {
            Level::Success => Self::Success,
            Level::Warning => Self::Warning,
            Level::Error => Self::Error,
            Level::Info => Self::Info,
        }
    }
}
