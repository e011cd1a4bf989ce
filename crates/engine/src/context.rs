//! Per-invocation project context
//!
//! Bundles the project root, the configuration store, the template catalog
//! and the collaborators every operation talks to. Built once by the CLI
//! and passed by reference.

use hookpilot_config::{ConfigStore, HooksConfig, TemplateCatalog};
use hookpilot_core::{CommandRunner, Error, Prompter, Reporter, Result};
use std::path::{Path, PathBuf};

/// Everything an operation needs to act on one project
pub struct ProjectContext<'a> {
    root: PathBuf,
    store: ConfigStore,
    catalog: &'a TemplateCatalog,
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
    runner: &'a dyn CommandRunner,
}

impl<'a> ProjectContext<'a> {
    /// Create a context for the project at `root`
    pub fn new(
        root: impl Into<PathBuf>,
        catalog: &'a TemplateCatalog,
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        let root = root.into();
        let store = ConfigStore::new(&root);
        Self {
            root,
            store,
            catalog,
            prompter,
            reporter,
            runner,
        }
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configuration store for this project
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Template catalog
    pub fn catalog(&self) -> &TemplateCatalog {
        self.catalog
    }

    /// Interactive prompt
    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter
    }

    /// Console feedback sink
    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter
    }

    /// External command runner
    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner
    }

    /// Resolve a project-relative path
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Load the configuration, failing with [`Error::NotInitialized`] if absent
    ///
    /// Nothing is touched before the check.
    pub fn require_config(&self) -> Result<HooksConfig> {
        if !self.store.exists() {
            tracing::debug!(path = %self.store.path().display(), "Configuration file missing");
            return Err(Error::NotInitialized);
        }
        self.store.load()
    }
}
