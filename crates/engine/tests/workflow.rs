//! End-to-end hook management against a real Git repository

use git2::Repository;
use hookpilot_config::{ConfigStore, TemplateCatalog, TemplateId};
use hookpilot_core::{Error, HookTool, Level};
use hookpilot_engine::testing::{Answer, RecordingReporter, RecordingRunner, ScriptedPrompter};
use hookpilot_engine::{
    InitOutcome, InstallOutcome, ProjectContext, RestoreOutcome, UninstallOutcome, git, init,
    install, list_hooks, remove, restore, uninstall,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_git_hooks_full_lifecycle() {
    let temp = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    fs::write(
        temp.path().join("check.sh"),
        "#!/bin/sh\necho checking\n",
    )
    .unwrap();

    let catalog = TemplateCatalog::builtin().unwrap();
    let prompter = ScriptedPrompter::new([
        // init: Git hooks
        Answer::Select(0),
        // install pre-commit: custom template
        Answer::Select(3),
        Answer::Input("check.sh".to_string()),
        // install commit-msg: conventional-commit with the default pattern
        Answer::Select(0),
        Answer::Input(String::new()),
        // restore
        Answer::Confirm(true),
        // uninstall
        Answer::Confirm(true),
    ]);
    let reporter = RecordingReporter::new();
    let runner = RecordingRunner::new();
    let ctx = ProjectContext::new(temp.path(), &catalog, &prompter, &reporter, &runner);

    assert!(matches!(
        init(&ctx).unwrap(),
        InitOutcome::Initialized {
            tool: HookTool::Git,
            ..
        }
    ));

    let outcome = install(&ctx, "pre-commit").unwrap();
    assert!(matches!(
        outcome,
        InstallOutcome::Installed {
            template: TemplateId::Custom,
            ..
        }
    ));
    assert_eq!(
        fs::read_to_string(temp.path().join(".git-hooks/pre-commit")).unwrap(),
        "#!/bin/sh\necho checking\n"
    );

    install(&ctx, "commit-msg").unwrap();
    assert_eq!(list_hooks(&ctx).unwrap(), vec!["pre-commit", "commit-msg"]);

    // the commit-msg script is deleted behind our back
    fs::remove_file(temp.path().join(".git-hooks/commit-msg")).unwrap();
    let report = remove(&ctx, &["commit-msg"]).unwrap();
    assert_eq!(report.missing, vec!["commit-msg"]);
    assert_eq!(list_hooks(&ctx).unwrap(), vec!["pre-commit"]);

    assert_eq!(
        restore(&ctx, false).unwrap(),
        RestoreOutcome::Restored {
            cleared: vec!["pre-commit".to_string()]
        }
    );
    assert!(list_hooks(&ctx).unwrap().is_empty());
    assert!(!temp.path().join(".git-hooks/pre-commit").exists());

    assert_eq!(uninstall(&ctx, false).unwrap(), UninstallOutcome::Uninstalled);
    assert!(!ConfigStore::new(temp.path()).exists());
    assert!(!temp.path().join(".git-hooks").exists());
    assert_eq!(git::hooks_path(temp.path()).unwrap(), None);
    assert!(matches!(list_hooks(&ctx), Err(Error::NotInitialized)));

    assert_eq!(prompter.remaining(), 0);
    assert!(reporter.at(Level::Error).is_empty());
    assert!(runner.commands().is_empty());
}

#[test]
fn test_every_operation_requires_initialization() {
    let temp = TempDir::new().unwrap();
    let catalog = TemplateCatalog::builtin().unwrap();
    let prompter = ScriptedPrompter::new([]);
    let reporter = RecordingReporter::new();
    let runner = RecordingRunner::new();
    let ctx = ProjectContext::new(temp.path(), &catalog, &prompter, &reporter, &runner);

    let results = [
        ("install", install(&ctx, "pre-commit").map(|_| ())),
        ("remove", remove(&ctx, &["pre-commit"]).map(|_| ())),
        ("list", list_hooks(&ctx).map(|_| ())),
        ("restore", restore(&ctx, true).map(|_| ())),
        ("uninstall", uninstall(&ctx, true).map(|_| ())),
    ];

    for (operation, result) in results {
        assert!(
            matches!(result, Err(Error::NotInitialized)),
            "{operation}: {result:?}"
        );
    }
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    assert!(prompter.asked().is_empty());
    assert!(reporter.messages().is_empty());
}
