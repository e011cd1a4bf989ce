//! CLI command implementations
//!
//! One module per hookpilot subcommand.

pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod restore;
pub mod uninstall;
