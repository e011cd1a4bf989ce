//! Hook removal
//!
//! Deletes hook scripts and drops their entries from the store. A script
//! that is already gone is reported and skipped; the store entry is still
//! removed so the configuration matches the disk again. A script that
//! cannot be deleted keeps its entry; the rest of the batch still runs and
//! is saved before the first such error is returned.

use crate::context::ProjectContext;
use hookpilot_config::HooksConfig;
use hookpilot_core::{Error, Result, hook_path};
use std::fs;
use std::io::ErrorKind;

/// What [`remove`] did, per hook type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveReport {
    /// Hooks whose script was deleted
    pub removed: Vec<String>,
    /// Hooks whose script was already missing
    pub missing: Vec<String>,
    /// Hooks with no script file to delete (Lefthook)
    pub manual: Vec<String>,
    /// Requested hooks that were not configured
    pub not_configured: Vec<String>,
}

impl RemoveReport {
    /// Hook types dropped from the store
    pub fn dropped(&self) -> impl Iterator<Item = &String> {
        self.removed.iter().chain(&self.missing).chain(&self.manual)
    }

    /// Whether the store changed
    pub fn is_empty(&self) -> bool {
        self.dropped().next().is_none()
    }
}

/// Ask which configured hooks to remove, then remove them
pub fn remove_interactive(ctx: &ProjectContext<'_>) -> Result<RemoveReport> {
    let record = ctx.require_config()?;
    if record.hooks.is_empty() {
        ctx.reporter().warn("No hooks configured to remove.");
        return Ok(RemoveReport::default());
    }

    let selected = ctx
        .prompter()
        .multi_select("Select the hooks to remove", &record.hooks)?;
    let hook_types = selected
        .into_iter()
        .map(|index| {
            record
                .hooks
                .get(index)
                .cloned()
                .ok_or_else(|| Error::Prompt(format!("selection {index} out of range")))
        })
        .collect::<Result<Vec<_>>>()?;

    remove_from(ctx, record, &hook_types)
}

/// Remove `hook_types` from disk and from the store
pub fn remove<S: AsRef<str>>(ctx: &ProjectContext<'_>, hook_types: &[S]) -> Result<RemoveReport> {
    let record = ctx.require_config()?;
    if record.hooks.is_empty() {
        ctx.reporter().warn("No hooks configured to remove.");
        return Ok(RemoveReport::default());
    }
    remove_from(ctx, record, hook_types)
}

fn remove_from<S: AsRef<str>>(
    ctx: &ProjectContext<'_>,
    mut record: HooksConfig,
    hook_types: &[S],
) -> Result<RemoveReport> {
    if hook_types.is_empty() {
        ctx.reporter().warn("No hooks selected for removal.");
        return Ok(RemoveReport::default());
    }

    let mut report = RemoveReport::default();
    let mut first_error: Option<Error> = None;
    for hook_type in hook_types {
        let hook_type = hook_type.as_ref();
        if !record.contains(hook_type) {
            ctx.reporter()
                .warn(&format!("Hook '{hook_type}' is not configured."));
            report.not_configured.push(hook_type.to_string());
            continue;
        }

        let Some(relative) = hook_path(record.name, hook_type) else {
            ctx.reporter().warn(&format!(
                "Remove the '{hook_type}' entry from lefthook.yml manually."
            ));
            report.manual.push(hook_type.to_string());
            continue;
        };

        match fs::remove_file(ctx.resolve(&relative)) {
            Ok(()) => {
                tracing::info!(hook_type, path = %relative.display(), "Deleted hook script");
                report.removed.push(hook_type.to_string());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(hook_type, path = %relative.display(), "Hook script already gone");
                ctx.reporter().warn(&format!(
                    "No hook file found for '{hook_type}'. It might have been manually deleted."
                ));
                report.missing.push(hook_type.to_string());
            }
            Err(e) => {
                tracing::warn!(hook_type, path = %relative.display(), error = %e, "Failed to delete hook script");
                ctx.reporter()
                    .error(&format!("Could not remove hook '{hook_type}': {e}"));
                first_error.get_or_insert(e.into());
            }
        }
    }

    if report.is_empty() {
        return first_error.map_or(Ok(report), Err);
    }

    let dropped: Vec<&String> = report.dropped().collect();
    record.remove_hooks(&dropped);
    ctx.store().save(&record)?;

    let names: Vec<&str> = dropped.iter().map(|s| s.as_str()).collect();
    ctx.reporter()
        .success(&format!("Removed hooks: {}", names.join(", ")));
    first_error.map_or(Ok(report), Err)
}
