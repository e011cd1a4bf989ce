//! Package manager detection and invocation
//!
//! Husky and Lefthook are installed as npm dev dependencies with whichever
//! package manager the project already uses, detected from its lockfile.

use hookpilot_core::{CommandRunner, Result};
use std::fmt;
use std::path::Path;

/// JavaScript package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// npm
    Npm,
    /// Yarn
    Yarn,
    /// pnpm
    Pnpm,
}

impl PackageManager {
    /// Detect the package manager from the lockfile in `project_root`
    ///
    /// `pnpm-lock.yaml` wins over `yarn.lock`; npm is the fallback.
    pub fn detect(project_root: &Path) -> Self {
        let manager = if project_root.join("pnpm-lock.yaml").is_file() {
            PackageManager::Pnpm
        } else if project_root.join("yarn.lock").is_file() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        };
        tracing::debug!(%manager, "Detected package manager");
        manager
    }

    /// Executable name
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Prefix for running a `package.json` script (`npm run`)
    pub fn run_prefix(self) -> String {
        format!("{} run", self.program())
    }

    /// Command reinstalling all dependencies
    pub fn install_command(self) -> String {
        format!("{} install", self.program())
    }

    /// Add `package` as a dev dependency
    pub fn add_dev(self, runner: &dyn CommandRunner, dir: &Path, package: &str) -> Result<()> {
        let args: [&str; 3] = match self {
            PackageManager::Npm => ["install", "--save-dev", package],
            PackageManager::Yarn => ["add", "--dev", package],
            PackageManager::Pnpm => ["add", "--save-dev", package],
        };
        tracing::info!(manager = %self, package, "Installing dev dependency");
        runner.run(self.program(), &args, dir)
    }

    /// Remove `package` from the project's dependencies
    pub fn remove(self, runner: &dyn CommandRunner, dir: &Path, package: &str) -> Result<()> {
        let verb = match self {
            PackageManager::Npm => "uninstall",
            PackageManager::Yarn | PackageManager::Pnpm => "remove",
        };
        tracing::info!(manager = %self, package, "Removing dependency");
        runner.run(self.program(), &[verb, package], dir)
    }

    /// Run a binary installed in `node_modules/.bin`
    pub fn exec(self, runner: &dyn CommandRunner, dir: &Path, bin: &str, args: &[&str]) -> Result<()> {
        let (program, mut full): (&str, Vec<&str>) = match self {
            PackageManager::Npm => ("npx", Vec::new()),
            PackageManager::Yarn => ("yarn", Vec::new()),
            PackageManager::Pnpm => ("pnpm", vec!["exec"]),
        };
        full.push(bin);
        full.extend_from_slice(args);
        runner.run(program, &full, dir)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
