//! Hook installation
//!
//! Writes the generated script where the configured tool expects it and
//! records the hook in the store. The store is only saved once the script
//! is on disk, so a failed write never leaves a hook listed without a file.

use crate::context::ProjectContext;
use crate::selector::{self, GeneratedTemplate};
use hookpilot_config::TemplateId;
use hookpilot_core::{Error, HookTool, Result, hook_path};
use std::fs;
use std::path::{Path, PathBuf};

/// Mode of installed hook scripts
pub const HOOK_MODE: u32 = 0o755;

/// What [`install`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The script was written and the hook recorded
    Installed {
        /// Hook type
        hook_type: String,
        /// Template the script was built from
        template: TemplateId,
        /// Tool managing the hook
        tool: HookTool,
        /// Project-relative script path
        path: PathBuf,
    },
    /// The tool has no script file; the user must edit its configuration
    ManualConfiguration {
        /// Hook type
        hook_type: String,
        /// Template the user picked
        template: TemplateId,
    },
}

/// Ask for a hook type, then install it
pub fn add(ctx: &ProjectContext<'_>) -> Result<InstallOutcome> {
    if !ctx.store().exists() {
        return Err(Error::NotInitialized);
    }

    let hook_types: Vec<String> = ctx.catalog().hook_types().map(str::to_string).collect();
    let index = ctx
        .prompter()
        .select("Which Git hook do you want to set up?", &hook_types, 0)?;
    let hook_type = hook_types
        .get(index)
        .ok_or_else(|| Error::Prompt(format!("selection {index} out of range")))?;

    install(ctx, hook_type)
}

/// Install `hook_type` for the configured tool
pub fn install(ctx: &ProjectContext<'_>, hook_type: &str) -> Result<InstallOutcome> {
    let mut record = ctx.require_config()?;
    let tool = record.name;

    let template = selector::select_template(ctx, hook_type)?;
    let GeneratedTemplate { content, params } =
        selector::generate_content(ctx, template, hook_type)?;

    let Some(relative) = hook_path(tool, hook_type) else {
        tracing::info!(hook_type, %template, "Tool needs manual hook configuration");
        ctx.reporter().warn(&format!(
            "Lefthook requires manual configuration. Add the '{template}' template for \
             '{hook_type}' to lefthook.yml."
        ));
        return Ok(InstallOutcome::ManualConfiguration {
            hook_type: hook_type.to_string(),
            template,
        });
    };

    let target = ctx.resolve(&relative);
    if target.exists() {
        tracing::debug!(path = %target.display(), "Overwriting existing hook script");
    }
    write_hook_script(&target, &content)?;

    record.add_hook(hook_type, params);
    ctx.store().save(&record)?;

    tracing::info!(hook_type, %template, %tool, path = %relative.display(), "Installed hook");
    ctx.reporter().success(&format!(
        "Hook '{hook_type}' installed with template '{template}' using {tool} at {}",
        relative.display()
    ));

    Ok(InstallOutcome::Installed {
        hook_type: hook_type.to_string(),
        template,
        tool,
        path: relative,
    })
}

/// Write `content` to `path` and make it executable
fn write_hook_script(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(HOOK_MODE))?;
    }

    Ok(())
}
