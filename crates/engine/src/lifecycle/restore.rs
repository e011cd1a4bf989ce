use super::write_lefthook_config;
use crate::context::ProjectContext;
use crate::git;
use hookpilot_core::{Result, hook_path};
use std::fs;
use std::io::ErrorKind;

/// What [`restore`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The user declined; nothing changed
    Cancelled,
    /// All hooks were cleared
    Restored {
        /// Hook types that were configured before the restore
        cleared: Vec<String>,
    },
}

/// Reset the project to the tool's empty default state
///
/// Asks for confirmation (default no) unless `assume_yes` is set. The tool
/// selection survives; every hook does not.
pub fn restore(ctx: &ProjectContext<'_>, assume_yes: bool) -> Result<RestoreOutcome> {
    let mut record = ctx.require_config()?;
    let tool = record.name;
    ctx.reporter().info(&format!("Detected tool: {tool}"));

    let proceed = assume_yes
        || ctx.prompter().confirm(
            "Existing configuration will be removed. Do you want to continue?",
            false,
        )?;
    if !proceed {
        ctx.reporter().warn("Hook restoration cancelled.");
        return Ok(RestoreOutcome::Cancelled);
    }

    // The store is saved before the directory and tool steps so it never
    // lists a script that is already gone.
    let cleared = record.hooks.clone();
    let mut kept: Vec<&String> = Vec::new();
    let mut first_error = None;
    for hook_type in &cleared {
        let Some(relative) = hook_path(tool, hook_type) else {
            continue;
        };
        match fs::remove_file(ctx.resolve(&relative)) {
            Ok(()) => tracing::debug!(hook_type, "Deleted hook script"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(hook_type, error = %e, "Failed to delete hook script");
                ctx.reporter()
                    .error(&format!("Could not remove hook '{hook_type}': {e}"));
                kept.push(hook_type);
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        let gone: Vec<&String> = cleared.iter().filter(|h| !kept.contains(h)).collect();
        record.remove_hooks(&gone);
        ctx.store().save(&record)?;
        return Err(e.into());
    }
    record.clear_hooks();
    ctx.store().save(&record)?;

    if tool.uses_hooks_path() {
        let dir = ctx.resolve(tool.hooks_dir());
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir)?;
        if git::ensure_repository(ctx.root()).is_ok() {
            git::set_hooks_path(ctx.root(), tool.hooks_dir())?;
        }
    } else {
        write_lefthook_config(ctx, true)?;
    }
    ctx.reporter()
        .success(&format!("Default configuration for {tool} restored."));

    tracing::info!(%tool, cleared = cleared.len(), "Restored hooks");
    ctx.reporter().success("Hook restoration process complete!");
    Ok(RestoreOutcome::Restored { cleared })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use crate::testing::{Answer, RecordingReporter, RecordingRunner, ScriptedPrompter};
    use hookpilot_config::{ConfigStore, HookParams, TemplateCatalog, TemplateId};
    use hookpilot_core::tool::LEFTHOOK_CONFIG;
    use hookpilot_core::{Error, HookTool, Level};
    use std::path::Path;
    use tempfile::TempDir;

    fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
        let mut entries = Vec::new();
        let mut stack = vec![root.to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    let name = path.strip_prefix(root).unwrap().display().to_string();
                    entries.push((name, fs::read(&path).unwrap()));
                }
            }
        }
        entries.sort();
        entries
    }

    fn project(tool: HookTool, hooks: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path());
        let mut record = store.create(tool).unwrap();
        for hook in hooks {
            record.add_hook(hook, HookParams::new(TemplateId::Custom));
            if let Some(path) = hook_path(tool, hook) {
                let path = temp.path().join(path);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(path, "#!/bin/sh\n").unwrap();
            }
        }
        store.save(&record).unwrap();
        temp
    }

    #[test]
    fn test_declining_leaves_everything_untouched() {
        let temp = project(HookTool::Husky, &["pre-commit", "commit-msg"]);
        fs::write(temp.path().join(".husky/notes.txt"), "keep").unwrap();
        let before = snapshot(temp.path());

        let catalog = TemplateCatalog::builtin().unwrap();
        let prompter = ScriptedPrompter::new([Answer::Confirm(false)]);
        let reporter = RecordingReporter::new();
        let runner = RecordingRunner::new();
        let ctx = ProjectContext::new(temp.path(), &catalog, &prompter, &reporter, &runner);

        let outcome = restore(&ctx, false).unwrap();

        assert_eq!(outcome, RestoreOutcome::Cancelled);
        assert_eq!(snapshot(temp.path()), before);
        assert_eq!(
            reporter.at(Level::Warning),
            vec!["Hook restoration cancelled."]
        );
    }

    #[test]
    fn test_accepting_clears_hooks_and_keeps_tool() {
        let temp = project(HookTool::Husky, &["pre-commit", "commit-msg"]);
        let catalog = TemplateCatalog::builtin().unwrap();
        let prompter = ScriptedPrompter::new([Answer::Confirm(true)]);
        let reporter = RecordingReporter::new();
        let runner = RecordingRunner::new();
        let ctx = ProjectContext::new(temp.path(), &catalog, &prompter, &reporter, &runner);

        let outcome = restore(&ctx, false).unwrap();

        assert_eq!(
            outcome,
            RestoreOutcome::Restored {
                cleared: vec!["pre-commit".to_string(), "commit-msg".to_string()]
            }
        );
        let husky = temp.path().join(".husky");
        assert!(husky.is_dir());
        assert_eq!(fs::read_dir(&husky).unwrap().count(), 0);

        let record = ConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(record.name, HookTool::Husky);
        assert_eq!(record.directory, ".husky");
        assert!(record.hooks.is_empty());
        assert!(record.config.is_empty());
    }

    #[test]
    fn test_assume_yes_skips_prompt_and_rewrites_lefthook_config() {
        let temp = project(HookTool::Lefthook, &["pre-commit"]);
        fs::write(temp.path().join(LEFTHOOK_CONFIG), "pre-commit:\n  commands: {lint: {run: x}}\n")
            .unwrap();
        let catalog = TemplateCatalog::builtin().unwrap();
        let prompter = ScriptedPrompter::new([]);
        let reporter = RecordingReporter::new();
        let runner = RecordingRunner::new();
        let ctx = ProjectContext::new(temp.path(), &catalog, &prompter, &reporter, &runner);

        restore(&ctx, true).unwrap();

        assert!(prompter.asked().is_empty());
        assert_eq!(
            fs::read_to_string(temp.path().join(LEFTHOOK_CONFIG)).unwrap(),
            crate::templates::DEFAULT_LEFTHOOK_CONFIG
        );
    }

    #[test]
    fn test_undeletable_script_stays_configured() {
        let temp = project(HookTool::Git, &["pre-commit", "pre-push"]);
        let pre_push = temp.path().join(".git-hooks/pre-push");
        fs::remove_file(&pre_push).unwrap();
        fs::create_dir(&pre_push).unwrap();
        let catalog = TemplateCatalog::builtin().unwrap();
        let prompter = ScriptedPrompter::new([]);
        let reporter = RecordingReporter::new();
        let runner = RecordingRunner::new();
        let ctx = ProjectContext::new(temp.path(), &catalog, &prompter, &reporter, &runner);

        assert!(matches!(restore(&ctx, true), Err(Error::Io(_))));

        assert!(!temp.path().join(".git-hooks/pre-commit").exists());
        let record = ConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(record.hooks, vec!["pre-push"]);
        assert!(reporter.contains(Level::Error, "pre-push"));
    }

    #[test]
    fn test_store_is_cleared_before_tool_config_is_rewritten() {
        let temp = project(HookTool::Lefthook, &["pre-commit"]);
        fs::create_dir(temp.path().join(LEFTHOOK_CONFIG)).unwrap();
        let catalog = TemplateCatalog::builtin().unwrap();
        let prompter = ScriptedPrompter::new([]);
        let reporter = RecordingReporter::new();
        let runner = RecordingRunner::new();
        let ctx = ProjectContext::new(temp.path(), &catalog, &prompter, &reporter, &runner);

        assert!(restore(&ctx, true).is_err());

        let record = ConfigStore::new(temp.path()).load().unwrap();
        assert!(record.hooks.is_empty());
    }

    #[test]
    fn test_uninitialized() {
        let temp = TempDir::new().unwrap();
        let catalog = TemplateCatalog::builtin().unwrap();
        let prompter = ScriptedPrompter::new([Answer::Confirm(true)]);
        let reporter = RecordingReporter::new();
        let runner = RecordingRunner::new();
        let ctx = ProjectContext::new(temp.path(), &catalog, &prompter, &reporter, &runner);

        assert!(matches!(restore(&ctx, false), Err(Error::NotInitialized)));
        assert_eq!(prompter.remaining(), 1);
    }
}
