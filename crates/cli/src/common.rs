//! Common types shared across CLI commands

use crate::error::{CommandError, Result};
use crate::ui::{ConsoleReporter, DialoguerPrompter};
use hookpilot_config::TemplateCatalog;
use hookpilot_engine::{DuctRunner, ProjectContext};
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime context for CLI commands
///
/// Owns the resources every command shares: the canonical project
/// directory, the template catalog and the terminal-backed collaborators.
pub struct RuntimeContext {
    project_dir: PathBuf,
    catalog: TemplateCatalog,
    prompter: DialoguerPrompter,
    reporter: ConsoleReporter,
    runner: DuctRunner,
}

impl RuntimeContext {
    /// Create a new runtime context
    ///
    /// `catalog_path` replaces the built-in template catalog when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the project directory does not exist or the
    /// catalog cannot be loaded.
    pub fn new(project_dir: &Path, catalog_path: Option<&Path>) -> Result<Self> {
        let project_dir = fs::canonicalize(project_dir).map_err(|source| {
            CommandError::InvalidProjectDir {
                path: project_dir.to_path_buf(),
                source,
            }
        })?;

        let catalog = match catalog_path {
            Some(path) => TemplateCatalog::load(path),
            None => TemplateCatalog::builtin(),
        }
        .map_err(CommandError::catalog)?;

        Ok(Self {
            project_dir,
            catalog,
            prompter: DialoguerPrompter::new(),
            reporter: ConsoleReporter,
            runner: DuctRunner,
        })
    }

    /// Canonical project directory
    #[inline]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Engine context borrowing this runtime's resources
    pub fn project(&self) -> ProjectContext<'_> {
        ProjectContext::new(
            &self.project_dir,
            &self.catalog,
            &self.prompter,
            &self.reporter,
            &self.runner,
        )
    }
}
