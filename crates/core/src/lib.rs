//! Core types and utilities for hookpilot
//!
//! This is the foundation crate that all other hookpilot crates depend on.
//! It provides:
//! - Base error types
//! - The [`HookTool`] variant and hook path resolution
//! - Collaborator traits (`Prompter`, `Reporter`, `CommandRunner`)
//!
//! This crate has no dependencies on other hookpilot crates.

pub mod error;
pub mod tool;
pub mod traits;

pub use error::{Error, Result};
pub use tool::{HookTool, hook_path};
pub use traits::{CommandRunner, Level, Prompter, Reporter};
