//! Add command implementation

use clap::Args;
use hookpilot_engine::InstallOutcome;
use tracing::debug;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Add a Git hook from a template
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Hook type to set up (prompted for when omitted)
    #[arg(value_name = "HOOK")]
    pub hook: Option<String>,
}

impl Command for AddCommand {
    type Output = InstallOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<InstallOutcome> {
        let project = context.project();

        let outcome = match self.hook.as_deref() {
            Some(hook) => hookpilot_engine::install(&project, &hook.to_lowercase())?,
            None => hookpilot_engine::add(&project)?,
        };
        debug!(?outcome, "Add finished");

        Ok(outcome)
    }
}
