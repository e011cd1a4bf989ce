use crate::context::ProjectContext;
use crate::git;
use crate::package::PackageManager;
use hookpilot_config::PackageManifest;
use hookpilot_core::tool::LEFTHOOK_CONFIG;
use hookpilot_core::{HookTool, Result};
use std::fs;

/// What [`uninstall`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// The user declined; nothing changed
    Cancelled,
    /// The tool and all generated files are gone
    Uninstalled,
}

/// Remove the hook tool and everything hookpilot generated
///
/// Asks for confirmation (default no) unless `assume_yes` is set. Only the
/// scripts hookpilot injected are removed from `package.json`.
pub fn uninstall(ctx: &ProjectContext<'_>, assume_yes: bool) -> Result<UninstallOutcome> {
    let record = ctx.require_config()?;
    let tool = record.name;

    let proceed = assume_yes
        || ctx.prompter().confirm(
            &format!("This will remove {tool}, its hooks and the hookpilot configuration. Continue?"),
            false,
        )?;
    if !proceed {
        ctx.reporter().warn("Uninstall cancelled.");
        return Ok(UninstallOutcome::Cancelled);
    }

    let root = ctx.root();
    // Parsed up front so a broken package.json fails before anything is removed
    let mut manifest = if PackageManifest::exists(root) {
        Some(PackageManifest::load(root)?)
    } else {
        None
    };
    let has_manifest = manifest.is_some();

    if let Some(package) = tool.package().filter(|_| has_manifest) {
        let manager = PackageManager::detect(root);
        if tool == HookTool::Lefthook {
            if let Err(e) = manager.exec(ctx.runner(), root, "lefthook", &["uninstall"]) {
                tracing::warn!(error = %e, "lefthook uninstall failed");
                ctx.reporter()
                    .warn(&format!("Could not run 'lefthook uninstall': {e}"));
            }
        }
        ctx.reporter()
            .info(&format!("Removing {package} with {manager}..."));
        manager.remove(ctx.runner(), root, package)?;
    }

    if tool.uses_hooks_path() {
        let hooks_dir = ctx.resolve(tool.hooks_dir());
        if hooks_dir.exists() {
            fs::remove_dir_all(&hooks_dir)?;
            ctx.reporter()
                .success(&format!("Removed {}", tool.hooks_dir()));
        } else {
            ctx.reporter()
                .warn(&format!("Hook directory {} does not exist.", tool.hooks_dir()));
        }
    }

    if tool == HookTool::Lefthook {
        let config = ctx.resolve(LEFTHOOK_CONFIG);
        if config.exists() {
            fs::remove_file(&config)?;
            ctx.reporter().success(&format!("Removed {LEFTHOOK_CONFIG}"));
        }
    }

    if tool.uses_hooks_path() {
        match git::unset_hooks_path(root) {
            Ok(true) => ctx.reporter().success("Git hooks path reset."),
            Ok(false) => tracing::debug!("core.hooksPath was not set"),
            Err(e) => ctx
                .reporter()
                .warn(&format!("Could not reset core.hooksPath: {e}")),
        }
    }

    if let Some(manifest) = manifest.as_mut()
        && manifest.strip_setup_script()
    {
        manifest.save()?;
    }

    ctx.store().delete()?;

    tracing::info!(%tool, "Uninstalled hook tool");
    ctx.reporter()
        .success("All configuration and generated files have been removed.");
    Ok(UninstallOutcome::Uninstalled)
}
