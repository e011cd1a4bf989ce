//! Hook-management tools
//!
//! A project manages its Git hooks with exactly one [`HookTool`]. The tool
//! decides where hook scripts live on disk:
//!
//! - [`HookTool::Husky`] → `.husky/<hook>`
//! - [`HookTool::Git`] → `.git-hooks/<hook>` (wired up via `core.hooksPath`)
//! - [`HookTool::Lefthook`] → no script file; hooks are declared in `lefthook.yml`
//!
//! # Examples
//!
//! ```
//! use hookpilot_core::tool::{HookTool, hook_path};
//! use std::path::Path;
//!
//! let path = hook_path(HookTool::Husky, "pre-commit");
//! assert_eq!(path.as_deref(), Some(Path::new(".husky/pre-commit")));
//!
//! assert!(hook_path(HookTool::Lefthook, "pre-commit").is_none());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Lefthook's configuration file, relative to the project root
pub const LEFTHOOK_CONFIG: &str = "lefthook.yml";

/// Tool responsible for running the project's Git hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTool {
    /// Husky (npm package, scripts in `.husky/`)
    Husky,
    /// Lefthook (npm package, configured through `lefthook.yml`)
    Lefthook,
    /// Plain Git hooks in `.git-hooks/`
    Git,
}

impl HookTool {
    /// All tools, in the order they are offered to the user
    pub const ALL: [HookTool; 3] = [HookTool::Git, HookTool::Husky, HookTool::Lefthook];

    /// Canonical lowercase name, as stored in `hooks-config.json`
    pub fn name(self) -> &'static str {
        match self {
            HookTool::Husky => "husky",
            HookTool::Lefthook => "lefthook",
            HookTool::Git => "git",
        }
    }

    /// Human-readable label for prompts
    pub fn label(self) -> &'static str {
        match self {
            HookTool::Husky => "Husky",
            HookTool::Lefthook => "Lefthook",
            HookTool::Git => "Git hooks (no dependencies)",
        }
    }

    /// Directory holding the tool's hook scripts, relative to the project root
    pub fn hooks_dir(self) -> &'static str {
        match self {
            HookTool::Husky => ".husky",
            HookTool::Lefthook => ".lefthook",
            HookTool::Git => ".git-hooks",
        }
    }

    /// npm package providing the tool, if any
    pub fn package(self) -> Option<&'static str> {
        match self {
            HookTool::Husky => Some("husky"),
            HookTool::Lefthook => Some("lefthook"),
            HookTool::Git => None,
        }
    }

    /// Whether Git must point `core.hooksPath` at [`HookTool::hooks_dir`]
    ///
    /// Lefthook installs its own shims into `.git/hooks`.
    pub fn uses_hooks_path(self) -> bool {
        !matches!(self, HookTool::Lefthook)
    }
}

/// Resolve the script location for `hook_type` under `tool`
///
/// Returns `None` for Lefthook, which has no per-hook script file.
pub fn hook_path(tool: HookTool, hook_type: &str) -> Option<PathBuf> {
    match tool {
        HookTool::Lefthook => None,
        HookTool::Husky | HookTool::Git => Some(PathBuf::from(tool.hooks_dir()).join(hook_type)),
    }
}

impl fmt::Display for HookTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HookTool {
    type Err = crate::Error;

    /// Parse a tool name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "husky" => Ok(HookTool::Husky),
            "lefthook" => Ok(HookTool::Lefthook),
            "git" | "git-hooks" => Ok(HookTool::Git),
            other => Err(crate::Error::Message(format!(
                "Unknown hook tool '{other}' (expected husky, lefthook or git)"
            ))),
        }
    }
}

impl Serialize for HookTool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for HookTool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
