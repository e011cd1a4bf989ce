//! Base error types for hookpilot
//!
//! This module provides the foundation error types that all crates can use.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file does not exist yet
    #[error("Configuration not initialized. Please run 'hookpilot init' first.")]
    NotInitialized,

    /// The configuration file already exists
    #[error("Configuration already exists: {}", path.display())]
    AlreadyInitialized { path: PathBuf },

    /// The configuration file exists but cannot be used
    #[error("Invalid configuration in {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    /// Hook type missing from the template catalog
    #[error("Unknown hook type '{0}'")]
    UnknownHookType(String),

    /// Template id not offered for the hook type
    #[error("Template '{template}' is not compatible with hook '{hook}'")]
    IncompatibleTemplate { hook: String, template: String },

    /// Template catalog cannot be parsed
    #[error("Invalid template catalog: {0}")]
    Catalog(String),

    /// Custom template or generated pattern rejected
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// Interactive prompt failed or was aborted
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// External command exited unsuccessfully
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// External program not available on PATH
    #[error("Required program '{0}' not found in PATH")]
    ToolNotFound(String),

    /// Git configuration error
    #[error("Git error: {0}")]
    Git(String),

    /// Package manifest (package.json) error
    #[error("Package manifest error in {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
