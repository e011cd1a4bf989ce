//! Restore command implementation
//!
//! Drops every hook and puts the tool back to its freshly initialized state.

use clap::Args;
use hookpilot_engine::RestoreOutcome;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Remove every hook and restore the tool's default configuration
#[derive(Debug, Args)]
pub struct RestoreCommand {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl Command for RestoreCommand {
    type Output = RestoreOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<RestoreOutcome> {
        Ok(hookpilot_engine::restore(&context.project(), self.yes)?)
    }
}
