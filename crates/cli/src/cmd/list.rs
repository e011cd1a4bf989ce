//! List command implementation

use clap::Args;
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;
use crate::ui::Icons;

/// List configured Git hooks
#[derive(Debug, Args)]
pub struct ListCommand {}

impl Command for ListCommand {
    type Output = Vec<String>;

    fn execute(&self, context: &RuntimeContext) -> Result<Vec<String>> {
        let hooks = hookpilot_engine::list_hooks(&context.project())?;

        if hooks.is_empty() {
            println!("No hooks found.");
        } else {
            for hook in &hooks {
                println!("{} {}", Icons::HOOK.dimmed(), hook.bold());
            }
        }

        Ok(hooks)
    }
}
