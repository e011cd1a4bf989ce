//! Template catalog
//!
//! Maps each supported Git hook type to the templates that make sense for
//! it. The built-in catalog ships inside the binary (`templates/catalog.json`)
//! and can be replaced with a user file of the same shape:
//!
//! ```json
//! {
//!   "pre-commit": ["lint", "test", "custom"],
//!   "commit-msg": ["conventional-commit", "custom"]
//! }
//! ```
//!
//! The catalog is built once at startup and passed by reference to the
//! components that need it.

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const BUILTIN_CATALOG: &str = include_str!("../templates/catalog.json");

/// Identifier of a hook script template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    /// Run the project's lint command
    Lint,
    /// Run the project's test command
    Test,
    /// Check formatting
    Format,
    /// Enforce Conventional Commits in the commit message
    ConventionalCommit,
    /// Enforce a branch naming pattern before pushing
    BranchName,
    /// Reinstall dependencies when the lockfile changed
    InstallDeps,
    /// User-supplied shell script
    Custom,
}

impl TemplateId {
    /// Identifier as written in the catalog and the configuration file
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Lint => "lint",
            TemplateId::Test => "test",
            TemplateId::Format => "format",
            TemplateId::ConventionalCommit => "conventional-commit",
            TemplateId::BranchName => "branch-name",
            TemplateId::InstallDeps => "install-deps",
            TemplateId::Custom => "custom",
        }
    }

    /// Human-readable label for prompts
    pub fn label(self) -> &'static str {
        match self {
            TemplateId::Lint => "Linting (npm run lint)",
            TemplateId::Test => "Unit Tests (npm test)",
            TemplateId::Format => "Formatting check (prettier --check)",
            TemplateId::ConventionalCommit => "Commit Message Check (Conventional Commits)",
            TemplateId::BranchName => "Branch Name Check",
            TemplateId::InstallDeps => "Reinstall dependencies when the lockfile changes",
            TemplateId::Custom => "Custom (bring your own script)",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .map_err(|_| Error::Catalog(format!("unknown template '{s}'")))
    }
}

/// Read-only mapping from hook type to compatible templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    entries: IndexMap<String, Vec<TemplateId>>,
}

impl TemplateCatalog {
    /// Catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Catalog(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a catalog from JSON
    ///
    /// Rejects unknown template ids, empty template lists and duplicate
    /// templates within a hook.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: IndexMap<String, Vec<TemplateId>> =
            serde_json::from_str(json).map_err(|e| Error::Catalog(e.to_string()))?;

        if entries.is_empty() {
            return Err(Error::Catalog("catalog defines no hook types".to_string()));
        }

        for (hook, templates) in &entries {
            if templates.is_empty() {
                return Err(Error::Catalog(format!("hook '{hook}' has no templates")));
            }
            for (i, template) in templates.iter().enumerate() {
                if templates[..i].contains(template) {
                    return Err(Error::Catalog(format!(
                        "hook '{hook}' lists template '{template}' twice"
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Hook types in catalog order
    pub fn hook_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Templates compatible with `hook_type`, in catalog order
    pub fn templates_for(&self, hook_type: &str) -> Result<&[TemplateId]> {
        self.entries
            .get(hook_type)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownHookType(hook_type.to_string()))
    }

    /// Whether `template` may be used for `hook_type`
    pub fn is_compatible(&self, hook_type: &str, template: TemplateId) -> bool {
        self.entries
            .get(hook_type)
            .is_some_and(|templates| templates.contains(&template))
    }

    /// Number of hook types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty (never true for a parsed catalog)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
