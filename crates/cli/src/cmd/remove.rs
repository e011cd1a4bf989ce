//! Remove command implementation

use clap::Args;
use hookpilot_engine::RemoveReport;
use tracing::debug;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Remove configured Git hooks
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Hooks to remove (choose interactively when omitted)
    #[arg(value_name = "HOOKS")]
    pub hooks: Vec<String>,
}

impl Command for RemoveCommand {
    type Output = RemoveReport;

    fn execute(&self, context: &RuntimeContext) -> Result<RemoveReport> {
        let project = context.project();

        let report = if self.hooks.is_empty() {
            hookpilot_engine::remove_interactive(&project)?
        } else {
            hookpilot_engine::remove(&project, &self.hooks)?
        };
        debug!(
            removed = report.removed.len(),
            missing = report.missing.len(),
            "Remove finished"
        );

        Ok(report)
    }
}
