//! Git configuration plumbing
//!
//! Only `core.hooksPath` is touched, always in the repository-local config
//! (`.git/config`), through libgit2.

use git2::{ConfigLevel, ErrorCode, Repository};
use hookpilot_core::{Error, Result};
use std::path::Path;

const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// Helper function to convert git2 errors to `hookpilot_core` errors
#[inline]
#[allow(clippy::needless_pass_by_value)]
fn git_err(e: git2::Error) -> Error {
    Error::Git(e.message().to_string())
}

fn open(project_root: &Path) -> Result<Repository> {
    Repository::discover(project_root).map_err(|e| {
        Error::Git(format!(
            "{} is not inside a Git repository ({})",
            project_root.display(),
            e.message()
        ))
    })
}

fn local_config(repo: &Repository) -> Result<git2::Config> {
    repo.config()
        .and_then(|config| config.open_level(ConfigLevel::Local))
        .map_err(git_err)
}

/// Fail unless `project_root` is inside a Git repository
pub fn ensure_repository(project_root: &Path) -> Result<()> {
    open(project_root).map(|_| ())
}

/// Point `core.hooksPath` at `hooks_dir`
pub fn set_hooks_path(project_root: &Path, hooks_dir: &str) -> Result<()> {
    let repo = open(project_root)?;
    let mut config = local_config(&repo)?;
    config.set_str(HOOKS_PATH_KEY, hooks_dir).map_err(git_err)?;
    tracing::info!(hooks_dir, "Set core.hooksPath");
    Ok(())
}

/// Current local `core.hooksPath`, if set
pub fn hooks_path(project_root: &Path) -> Result<Option<String>> {
    let repo = open(project_root)?;
    let config = local_config(&repo)?;
    match config.get_string(HOOKS_PATH_KEY) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(git_err(e)),
    }
}

/// Remove `core.hooksPath`, returning whether it was set
pub fn unset_hooks_path(project_root: &Path) -> Result<bool> {
    let repo = open(project_root)?;
    let mut config = local_config(&repo)?;
    match config.remove(HOOKS_PATH_KEY) {
        Ok(()) => {
            tracing::info!("Unset core.hooksPath");
            Ok(true)
        }
        Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
        Err(e) => Err(git_err(e)),
    }
}
