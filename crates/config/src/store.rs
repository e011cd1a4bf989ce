//! Configuration store
//!
//! Owns `hooks-config.json` at the project root, the single source of truth
//! for which tool manages the hooks and which hooks are enabled:
//!
//! ```json
//! {
//!   "name": "husky",
//!   "directory": ".husky",
//!   "hooks": ["pre-commit"],
//!   "config": {
//!     "pre-commit": { "template": "lint", "command": "npm run lint" }
//!   }
//! }
//! ```
//!
//! Every mutation goes through [`ConfigStore::save`], which writes the whole
//! record atomically (temp file in the same directory, then rename).

use crate::catalog::TemplateId;
use crate::{Error, Result};
use hookpilot_core::HookTool;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the configuration store, relative to the project root
pub const CONFIG_FILE: &str = "hooks-config.json";

/// Parameters a hook script was generated with
///
/// Persisted so the script can be regenerated or inspected later. Keys this
/// version does not know about are kept in `extra` and written back as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookParams {
    /// Template the script was built from
    pub template: TemplateId,

    /// Command run by the script (lint/test/format/install templates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Regular expression checked by the script (commit-message/branch templates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Source of a custom template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_path: Option<PathBuf>,

    /// Unrecognised keys
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl HookParams {
    /// Parameters carrying only the template id
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            command: None,
            pattern: None,
            custom_path: None,
            extra: IndexMap::new(),
        }
    }

    /// Set the command
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the pattern
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the custom template path
    #[must_use]
    pub fn with_custom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.custom_path = Some(path.into());
        self
    }
}

/// The persisted configuration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Tool managing the hooks
    pub name: HookTool,

    /// Directory holding the hook scripts
    pub directory: String,

    /// Enabled hook types, unique, in insertion order
    #[serde(default)]
    pub hooks: Vec<String>,

    /// Generation parameters per enabled hook type
    #[serde(default)]
    pub config: IndexMap<String, HookParams>,
}

impl HooksConfig {
    /// Empty record for `tool`
    pub fn new(tool: HookTool) -> Self {
        Self {
            name: tool,
            directory: tool.hooks_dir().to_string(),
            hooks: Vec::new(),
            config: IndexMap::new(),
        }
    }

    /// Record `hook_type` as enabled with `params`
    ///
    /// The hook list never gains a duplicate; the parameters always reflect
    /// the latest script written for the hook. Returns `true` if the hook
    /// was not enabled before.
    pub fn add_hook(&mut self, hook_type: &str, params: HookParams) -> bool {
        let added = !self.contains(hook_type);
        if added {
            self.hooks.push(hook_type.to_string());
        }
        self.config.insert(hook_type.to_string(), params);
        added
    }

    /// Drop every listed hook type from both `hooks` and `config`
    ///
    /// Names that are not enabled are ignored. Returns how many hooks were
    /// removed.
    pub fn remove_hooks<S: AsRef<str>>(&mut self, hook_types: &[S]) -> usize {
        let before = self.hooks.len();
        let doomed = |hook: &str| hook_types.iter().any(|h| h.as_ref() == hook);
        self.hooks.retain(|hook| !doomed(hook));
        self.config.retain(|hook, _| !doomed(hook));
        before - self.hooks.len()
    }

    /// Disable all hooks, keeping the tool selection
    pub fn clear_hooks(&mut self) {
        self.hooks.clear();
        self.config.clear();
    }

    /// Whether `hook_type` is enabled
    pub fn contains(&self, hook_type: &str) -> bool {
        self.hooks.iter().any(|h| h == hook_type)
    }

    /// Check the `hooks`/`config` invariants
    fn check_consistency(&self) -> std::result::Result<(), String> {
        for (i, hook) in self.hooks.iter().enumerate() {
            if self.hooks[..i].contains(hook) {
                return Err(format!("hook '{hook}' is listed more than once"));
            }
            if !self.config.contains_key(hook) {
                return Err(format!("hook '{hook}' has no entry in \"config\""));
            }
        }
        if let Some(orphan) = self.config.keys().find(|key| !self.contains(key)) {
            return Err(format!(
                "\"config\" has an entry for '{orphan}' which is not in \"hooks\""
            ));
        }
        Ok(())
    }
}

/// Reads and writes `hooks-config.json`
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for the project rooted at `project_root`
    pub fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(CONFIG_FILE),
        }
    }

    /// Path of the configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the configuration file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the record, failing if the project is not initialized
    pub fn require(&self) -> Result<HooksConfig> {
        if !self.exists() {
            return Err(Error::NotInitialized);
        }
        self.load()
    }

    /// Parse the configuration file
    ///
    /// Corrupt JSON, a missing field or a record breaking the
    /// `hooks`/`config` invariants is an error; nothing is defaulted.
    pub fn load(&self) -> Result<HooksConfig> {
        let content = fs::read_to_string(&self.path)?;
        let record: HooksConfig =
            serde_json::from_str(&content).map_err(|e| self.invalid(e.to_string()))?;
        record.check_consistency().map_err(|message| self.invalid(message))?;

        tracing::debug!(
            path = %self.path.display(),
            tool = %record.name,
            hooks = record.hooks.len(),
            "Loaded hooks configuration"
        );
        Ok(record)
    }

    /// Enabled hook names, tolerating a malformed file
    ///
    /// Returns an empty list when the file is missing, not JSON, or has no
    /// `hooks` array. Non-string entries are skipped.
    pub fn hook_names_lenient(&self) -> Vec<String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&content) else {
            tracing::debug!(path = %self.path.display(), "Configuration is not valid JSON");
            return Vec::new();
        };

        match value.get("hooks").and_then(serde_json::Value::as_array) {
            Some(hooks) => hooks
                .iter()
                .filter_map(|hook| hook.as_str().map(str::to_string))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Write the complete record
    pub fn save(&self, record: &HooksConfig) -> Result<()> {
        let mut content = serde_json::to_string_pretty(record)
            .map_err(|e| Error::Message(format!("Failed to serialize configuration: {e}")))?;
        content.push('\n');

        write_atomic(&self.path, content.as_bytes())?;
        tracing::debug!(path = %self.path.display(), hooks = ?record.hooks, "Saved hooks configuration");
        Ok(())
    }

    /// Create the configuration file for `tool`
    pub fn create(&self, tool: HookTool) -> Result<HooksConfig> {
        if self.exists() {
            return Err(Error::AlreadyInitialized {
                path: self.path.clone(),
            });
        }
        let record = HooksConfig::new(tool);
        self.save(&record)?;
        tracing::info!(path = %self.path.display(), %tool, "Created hooks configuration");
        Ok(record)
    }

    /// Delete the configuration file, returning whether it existed
    pub fn delete(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn invalid(&self, message: String) -> Error {
        Error::InvalidConfig {
            path: self.path.clone(),
            message,
        }
    }
}

/// Replace `path` with `content` via a sibling temp file and rename
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o644))?;
    }

    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
