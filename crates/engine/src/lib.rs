//! # hookpilot engine
//!
//! Reconciles `hooks-config.json` with the hook scripts on disk.
//!
//! - **Selection**: pick a catalog template and render its script
//! - **Validation**: check user-supplied shell scripts
//! - **Installation/Removal**: write or delete scripts and keep the store in step
//! - **Lifecycle**: set up, restore and uninstall the hook tool
//! - **Plumbing**: package managers, `core.hooksPath`, external commands
//!
//! Every operation takes a [`ProjectContext`], which carries the prompt,
//! reporter and command runner, so the whole engine can run against the
//! scripted fakes in `testing` (enabled by the `testing` feature).

pub mod context;
pub mod git;
pub mod installer;
pub mod lifecycle;
pub mod listing;
pub mod package;
pub mod remover;
pub mod runner;
pub mod selector;
pub mod templates;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod validator;

// Re-export error types from core
pub use hookpilot_core::{Error, Result};

pub use context::ProjectContext;
pub use installer::{InstallOutcome, add, install};
pub use lifecycle::{
    InitOutcome, RestoreOutcome, UninstallOutcome, init, restore, setup_tool, uninstall,
};
pub use listing::list_hooks;
pub use package::PackageManager;
pub use remover::{RemoveReport, remove, remove_interactive};
pub use runner::DuctRunner;
pub use selector::{GeneratedTemplate, generate_content, select_template};
pub use validator::{TemplateCheck, validate};
