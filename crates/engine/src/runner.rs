//! External command execution

use hookpilot_core::{CommandRunner, Error, Result};
use std::path::Path;

/// Runs programs found on `PATH` with `duct`, inheriting stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    #[tracing::instrument(skip(self), fields(dir = %dir.display()))]
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()> {
        let executable =
            which::which(program).map_err(|_| Error::ToolNotFound(program.to_string()))?;

        tracing::debug!(executable = %executable.display(), ?args, "Executing command");

        duct::cmd(&executable, args)
            .dir(dir)
            .run()
            .map(|_| ())
            .map_err(|e| Error::CommandFailed {
                command: format!("{program} {}", args.join(" ")),
                message: e.to_string(),
            })
    }
}
