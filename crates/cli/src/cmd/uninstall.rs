//! Uninstall command implementation

use clap::Args;
use hookpilot_engine::UninstallOutcome;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Remove the hook manager and all generated files
#[derive(Debug, Args)]
pub struct UninstallCommand {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl Command for UninstallCommand {
    type Output = UninstallOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<UninstallOutcome> {
        Ok(hookpilot_engine::uninstall(&context.project(), self.yes)?)
    }
}
