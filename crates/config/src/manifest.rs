//! `package.json` script injection
//!
//! When the project has a `package.json`, init adds a `setup:git-hooks`
//! script and chains it into `postinstall`, so a fresh `npm install`
//! re-points Git at the hook directory. Uninstall strips exactly those two
//! additions and leaves every other script alone.
//!
//! The manifest is handled as a generic JSON object (`serde_json` with
//! `preserve_order`), so unrelated keys keep their order and content.

use crate::store::write_atomic;
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// npm manifest file name
pub const PACKAGE_JSON: &str = "package.json";

/// Script name owned by hookpilot
pub const SETUP_SCRIPT: &str = "setup:git-hooks";

const POSTINSTALL: &str = "postinstall";
const SEPARATOR: &str = " && ";
const RUNNERS: [&str; 3] = ["npm", "yarn", "pnpm"];

/// A project's `package.json`
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    root: Map<String, Value>,
}

impl PackageManifest {
    /// Path of `package.json` under `project_root`
    pub fn path_in(project_root: &Path) -> PathBuf {
        project_root.join(PACKAGE_JSON)
    }

    /// Whether `project_root` has a `package.json`
    pub fn exists(project_root: &Path) -> bool {
        Self::path_in(project_root).is_file()
    }

    /// Read `package.json` from `project_root`
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path_in(project_root);
        let content = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| Error::Manifest {
            path: path.clone(),
            message: e.to_string(),
        })?;

        match value {
            Value::Object(root) => Ok(Self { path, root }),
            _ => Err(Error::Manifest {
                path,
                message: "top-level value is not an object".to_string(),
            }),
        }
    }

    /// Value of `scripts[name]`, if it is a string
    pub fn script(&self, name: &str) -> Option<&str> {
        self.root
            .get("scripts")
            .and_then(|scripts| scripts.get(name))
            .and_then(Value::as_str)
    }

    /// Write the manifest back with 2-space indentation
    pub fn save(&self) -> Result<()> {
        let mut content =
            serde_json::to_string_pretty(&self.root).map_err(|e| Error::Manifest {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        content.push('\n');
        write_atomic(&self.path, content.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "Saved package manifest");
        Ok(())
    }

    /// Add `setup:git-hooks` and chain it into `postinstall`
    ///
    /// `setup_command` becomes the body of `setup:git-hooks`. `run_prefix`
    /// is the package manager's run form (`npm run`, `yarn run`,
    /// `pnpm run`). An existing `postinstall` gets the new segment appended
    /// with `&&` unless it already invokes the setup script.
    pub fn inject_setup_script(&mut self, setup_command: &str, run_prefix: &str) -> Result<()> {
        let path = self.path.clone();
        let scripts = self.scripts_mut()?;

        scripts.insert(SETUP_SCRIPT.to_string(), Value::from(setup_command));

        let invocation = format!("{run_prefix} {SETUP_SCRIPT}");
        let postinstall = match scripts.get(POSTINSTALL) {
            None => invocation,
            Some(Value::String(existing)) if existing.trim().is_empty() => invocation,
            Some(Value::String(existing)) if existing.contains(SETUP_SCRIPT) => existing.clone(),
            Some(Value::String(existing)) => format!("{existing}{SEPARATOR}{invocation}"),
            Some(_) => {
                return Err(Error::Manifest {
                    path,
                    message: "\"scripts.postinstall\" is not a string".to_string(),
                });
            }
        };
        scripts.insert(POSTINSTALL.to_string(), Value::from(postinstall));

        tracing::info!(script = SETUP_SCRIPT, "Injected setup script into package.json");
        Ok(())
    }

    /// Remove `setup:git-hooks` and its `postinstall` segment
    ///
    /// Returns `true` if anything changed. `postinstall` is dropped when the
    /// setup invocation was its only segment.
    pub fn strip_setup_script(&mut self) -> bool {
        let Some(Value::Object(scripts)) = self.root.get_mut("scripts") else {
            return false;
        };

        let mut changed = scripts.shift_remove(SETUP_SCRIPT).is_some();

        if let Some(Value::String(existing)) = scripts.get(POSTINSTALL) {
            let kept: Vec<&str> = existing
                .split("&&")
                .map(str::trim)
                .filter(|segment| !segment.is_empty() && !is_setup_invocation(segment))
                .collect();
            let rebuilt = kept.join(SEPARATOR);

            if rebuilt != existing.trim() {
                changed = true;
                if rebuilt.is_empty() {
                    scripts.shift_remove(POSTINSTALL);
                } else {
                    scripts.insert(POSTINSTALL.to_string(), Value::from(rebuilt));
                }
            }
        }

        if changed {
            tracing::info!(script = SETUP_SCRIPT, "Removed setup script from package.json");
        }
        changed
    }

    fn scripts_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let scripts = self
            .root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        match scripts {
            Value::Object(map) => Ok(map),
            _ => Err(Error::Manifest {
                path: self.path.clone(),
                message: "\"scripts\" is not an object".to_string(),
            }),
        }
    }
}

/// `npm run setup:git-hooks`, `yarn setup:git-hooks`, `pnpm run setup:git-hooks`
fn is_setup_invocation(segment: &str) -> bool {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    match tokens.as_slice() {
        [runner, "run", script] | [runner, script] => {
            RUNNERS.contains(runner) && *script == SETUP_SCRIPT
        }
        _ => false,
    }
}
