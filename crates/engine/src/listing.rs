//! Listing configured hooks

use crate::context::ProjectContext;
use hookpilot_core::{Error, Result};

/// Enabled hook types, read leniently
///
/// A malformed `hooks` field yields an empty list instead of an error, so
/// `list` still works on a hand-edited file.
pub fn list_hooks(ctx: &ProjectContext<'_>) -> Result<Vec<String>> {
    if !ctx.store().exists() {
        return Err(Error::NotInitialized);
    }
    Ok(ctx.store().hook_names_lenient())
}
