//! Error types for CLI commands

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Error from the engine or configuration layer
    #[error(transparent)]
    Hookpilot(#[from] hookpilot_core::Error),

    /// The `--project-dir` path cannot be used
    #[error("Invalid project directory {}: {source}", path.display())]
    InvalidProjectDir {
        /// The path given on the command line
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The template catalog cannot be loaded
    #[error("Failed to load template catalog: {0}")]
    CatalogLoad(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;

impl CommandError {
    /// Create a `CatalogLoad` error from any error type
    pub fn catalog<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::CatalogLoad(Box::new(err))
    }
}
