//! Tool lifecycle: setting up, restoring and removing the hook manager
//!
//! - [`init`]: choose a tool, install it and write the first configuration
//! - [`restore`]: wipe every managed hook but keep the tool
//! - [`uninstall`]: remove the tool and everything hookpilot generated

mod init;
mod restore;
mod uninstall;

pub use init::{InitOutcome, init, setup_tool};
pub use restore::{RestoreOutcome, restore};
pub use uninstall::{UninstallOutcome, uninstall};

use crate::context::ProjectContext;
use crate::templates::DEFAULT_LEFTHOOK_CONFIG;
use hookpilot_core::Result;
use hookpilot_core::tool::LEFTHOOK_CONFIG;
use std::fs;

/// Write the default `lefthook.yml`, returning whether it was written
///
/// An existing file is only replaced when `overwrite` is set.
fn write_lefthook_config(ctx: &ProjectContext<'_>, overwrite: bool) -> Result<bool> {
    let path = ctx.resolve(LEFTHOOK_CONFIG);
    if path.exists() && !overwrite {
        tracing::debug!(path = %path.display(), "Keeping existing lefthook.yml");
        return Ok(false);
    }
    fs::write(&path, DEFAULT_LEFTHOOK_CONFIG)?;
    tracing::info!(path = %path.display(), "Wrote default lefthook.yml");
    Ok(true)
}
