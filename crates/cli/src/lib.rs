//! hookpilot CLI library
//!
//! This library contains all the CLI logic for hookpilot, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;

/// hookpilot - Git hook setup for Husky, Lefthook and plain Git
#[derive(Parser, Debug)]
#[command(name = "hookpilot")]
#[command(about = "Set up and manage Git hooks with Husky, Lefthook or plain Git")]
#[command(version)]
#[command(long_about = "Set up and manage Git hooks with Husky, Lefthook or plain Git

Pick a hook manager once with `hookpilot init`, then add, remove, list and
restore hook scripts built from a catalog of templates. The chosen tool and
the enabled hooks are recorded in hooks-config.json at the project root.")]
pub struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(
        short = 'C',
        long,
        env = "HOOKPILOT_PROJECT_DIR",
        value_name = "DIR",
        global = true
    )]
    pub project_dir: Option<PathBuf>,

    /// Use a custom template catalog instead of the built-in one
    #[arg(long, env = "HOOKPILOT_CATALOG", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "HOOKPILOT_LOG_FILE", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for hookpilot CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose a hook manager and set it up for this project
    Init(cmd::init::InitCommand),

    /// Add a Git hook from a template
    Add(cmd::add::AddCommand),

    /// Remove configured Git hooks
    Remove(cmd::remove::RemoveCommand),

    /// List configured Git hooks
    #[command(alias = "ls")]
    List(cmd::list::ListCommand),

    /// Remove every hook and restore the tool's default configuration
    Restore(cmd::restore::RestoreCommand),

    /// Remove the hook manager and all generated files
    Uninstall(cmd::uninstall::UninstallCommand),
}

/// Execute the command based on the command type
fn execute_command(command: &Commands, context: &RuntimeContext) -> error::Result<()> {
    match command {
        Commands::Init(init_cmd) => init_cmd.execute(context),
        Commands::Add(add_cmd) => add_cmd.execute(context).map(drop),
        Commands::Remove(remove_cmd) => remove_cmd.execute(context).map(drop),
        Commands::List(list_cmd) => list_cmd.execute(context).map(drop),
        Commands::Restore(restore_cmd) => restore_cmd.execute(context).map(drop),
        Commands::Uninstall(uninstall_cmd) => uninstall_cmd.execute(context).map(drop),
    }
}

/// Build the runtime context and run the parsed command
///
/// Logging is left to [`run`], so this can be called repeatedly.
///
/// # Errors
///
/// Returns an error if the project directory or catalog cannot be loaded,
/// or if the command fails.
pub fn run_command(cli: &Cli) -> Result<()> {
    let project_dir = match &cli.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let context = RuntimeContext::new(&project_dir, cli.catalog.as_deref())?;
    tracing::debug!(project_dir = %context.project_dir().display(), "Resolved project directory");

    execute_command(&cli.command, &context)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - The project directory or template catalog cannot be loaded
/// - Command execution fails
pub fn run(cli: Cli) -> Result<()> {
    hookpilot_config::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    run_command(&cli)
}
