//! Command trait for hookpilot CLI
//!
//! Every subcommand implements [`Command`], receiving the shared
//! [`RuntimeContext`] built once per invocation.

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all hookpilot commands
///
/// # Example
///
/// ```rust,ignore
/// use crate::command::Command;
/// use crate::common::RuntimeContext;
/// use crate::error::Result;
/// use clap::Args;
///
/// #[derive(Debug, Args)]
/// pub struct MyCommand {
///     #[arg(short, long)]
///     pub yes: bool,
/// }
///
/// impl Command for MyCommand {
///     type Output = ();
///
///     fn execute(&self, context: &RuntimeContext) -> Result<()> {
///         let project = context.project();
///         // drive an engine operation with `project`
///         Ok(())
///     }
/// }
/// ```
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails to execute.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
