//! Init command implementation
//!
//! Choose a hook manager, install it and create `hooks-config.json`.

use clap::Args;
use hookpilot_engine::InitOutcome;
use tracing::info;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Set up a hook manager for the project
#[derive(Debug, Args)]
pub struct InitCommand {}

impl Command for InitCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let project = context.project();

        let InitOutcome::Initialized {
            tool,
            package_manager,
        } = hookpilot_engine::init(&project)?
        else {
            return Ok(());
        };
        info!(%tool, ?package_manager, "Hook manager initialized");

        if project
            .prompter()
            .confirm("Would you like to add hooks now?", true)?
        {
            hookpilot_engine::add(&project)?;
        }

        Ok(())
    }
}
