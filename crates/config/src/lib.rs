//! Configuration management for hookpilot
//!
//! This crate handles:
//! - The `hooks-config.json` store
//! - The template catalog
//! - `package.json` script injection
//! - Logging initialization

pub mod catalog;
pub mod logging;
pub mod manifest;
pub mod store;

// Re-export error types from core
pub use hookpilot_core::{Error, Result};

pub use catalog::{TemplateCatalog, TemplateId};
pub use manifest::{PACKAGE_JSON, PackageManifest, SETUP_SCRIPT};
pub use store::{CONFIG_FILE, ConfigStore, HookParams, HooksConfig};
