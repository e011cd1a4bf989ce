use super::write_lefthook_config;
use crate::context::ProjectContext;
use crate::git;
use crate::package::PackageManager;
use hookpilot_config::{CONFIG_FILE, PackageManifest, SETUP_SCRIPT};
use hookpilot_core::{Error, HookTool, Result};
use std::fs;

/// What [`init`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// A configuration was already present; nothing changed
    AlreadyInitialized,
    /// The tool was set up and the configuration written
    Initialized {
        /// Chosen tool
        tool: HookTool,
        /// Package manager used, when the project has a `package.json`
        package_manager: Option<PackageManager>,
    },
}

/// Ask for a tool and set it up
pub fn init(ctx: &ProjectContext<'_>) -> Result<InitOutcome> {
    if ctx.store().exists() {
        ctx.reporter().warn("Configuration already exists.");
        return Ok(InitOutcome::AlreadyInitialized);
    }

    let labels: Vec<String> = HookTool::ALL.iter().map(|t| t.label().to_string()).collect();
    let index = ctx
        .prompter()
        .select("Which tool do you want to use to manage Git hooks?", &labels, 0)?;
    let tool = HookTool::ALL
        .get(index)
        .copied()
        .ok_or_else(|| Error::Prompt(format!("selection {index} out of range")))?;

    setup_tool(ctx, tool)
}

/// Set up `tool` for the project without prompting
pub fn setup_tool(ctx: &ProjectContext<'_>, tool: HookTool) -> Result<InitOutcome> {
    if ctx.store().exists() {
        ctx.reporter().warn("Configuration already exists.");
        return Ok(InitOutcome::AlreadyInitialized);
    }

    let root = ctx.root();
    let has_manifest = PackageManifest::exists(root);

    if let Some(package) = tool.package() {
        if !has_manifest {
            return Err(Error::Manifest {
                path: PackageManifest::path_in(root),
                message: format!("{package} is installed from npm and needs a package.json"),
            });
        }
    }
    if tool.uses_hooks_path() {
        git::ensure_repository(root)?;
    }

    let package_manager = has_manifest.then(|| PackageManager::detect(root));
    tracing::info!(%tool, ?package_manager, "Setting up hook tool");

    if let (Some(package), Some(manager)) = (tool.package(), package_manager) {
        ctx.reporter()
            .info(&format!("Installing {package} with {manager}..."));
        manager.add_dev(ctx.runner(), root, package)?;
    }

    if tool.uses_hooks_path() {
        fs::create_dir_all(ctx.resolve(tool.hooks_dir()))?;
        git::set_hooks_path(root, tool.hooks_dir())?;
        ctx.reporter()
            .success(&format!("Git hooks path set to {}", tool.hooks_dir()));
    } else {
        if write_lefthook_config(ctx, false)? {
            ctx.reporter().success("Default lefthook.yml created.");
        }
        if let Some(manager) = package_manager {
            manager.exec(ctx.runner(), root, "lefthook", &["install"])?;
        }
    }

    ctx.store().create(tool)?;
    ctx.reporter()
        .success(&format!("Configuration file generated: {CONFIG_FILE}"));

    if let Some(manager) = package_manager {
        let mut manifest = PackageManifest::load(root)?;
        manifest.inject_setup_script(&setup_command(tool), &manager.run_prefix())?;
        manifest.save()?;
        ctx.reporter().success(&format!(
            "'{SETUP_SCRIPT}' script added to package.json and chained into postinstall."
        ));
    }

    ctx.reporter().success("Hooks setup complete!");
    Ok(InitOutcome::Initialized {
        tool,
        package_manager,
    })
}

/// Body of the `setup:git-hooks` script for `tool`
fn setup_command(tool: HookTool) -> String {
    if tool.uses_hooks_path() {
        format!("git config core.hooksPath {}", tool.hooks_dir())
    } else {
        "lefthook install".to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use crate::testing::{Answer, RecordingReporter, RecordingRunner, ScriptedPrompter};
    use git2::Repository;
    use hookpilot_config::{ConfigStore, TemplateCatalog};
    use hookpilot_core::Level;
    use hookpilot_core::tool::LEFTHOOK_CONFIG;
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        catalog: TemplateCatalog,
        reporter: RecordingReporter,
        runner: RecordingRunner,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            Repository::init(temp.path()).unwrap();
            Self {
                temp,
                catalog: TemplateCatalog::builtin().unwrap(),
                reporter: RecordingReporter::new(),
                runner: RecordingRunner::new(),
            }
        }

        fn with_package_json(self) -> Self {
            fs::write(
                self.temp.path().join("package.json"),
                "{\n  \"name\": \"demo\"\n}\n",
            )
            .unwrap();
            self
        }

        fn ctx<'a>(&'a self, prompter: &'a ScriptedPrompter) -> ProjectContext<'a> {
            ProjectContext::new(
                self.temp.path(),
                &self.catalog,
                prompter,
                &self.reporter,
                &self.runner,
            )
        }
    }

    #[test]
    fn test_init_git_without_package_json() {
        let fx = Fixture::new();
        let prompter = ScriptedPrompter::new([Answer::Select(0)]);

        let outcome = init(&fx.ctx(&prompter)).unwrap();

        assert_eq!(
            outcome,
            InitOutcome::Initialized {
                tool: HookTool::Git,
                package_manager: None
            }
        );
        assert!(fx.temp.path().join(".git-hooks").is_dir());
        assert_eq!(
            git::hooks_path(fx.temp.path()).unwrap().as_deref(),
            Some(".git-hooks")
        );
        assert_eq!(
            ConfigStore::new(fx.temp.path()).load().unwrap().name,
            HookTool::Git
        );
        assert!(fx.runner.commands().is_empty());
    }

    #[test]
    fn test_init_husky_installs_and_injects_scripts() {
        let fx = Fixture::new().with_package_json();
        fs::write(fx.temp.path().join("pnpm-lock.yaml"), "").unwrap();
        let prompter = ScriptedPrompter::new([Answer::Select(1)]);

        init(&fx.ctx(&prompter)).unwrap();

        assert_eq!(
            fx.runner.command_lines(),
            vec!["pnpm add --save-dev husky"]
        );
        let manifest = PackageManifest::load(fx.temp.path()).unwrap();
        assert_eq!(
            manifest.script(SETUP_SCRIPT),
            Some("git config core.hooksPath .husky")
        );
        assert_eq!(
            manifest.script("postinstall"),
            Some("pnpm run setup:git-hooks")
        );
        assert!(fx.temp.path().join(".husky").is_dir());
    }

    #[test]
    fn test_init_lefthook_writes_config_and_runs_install() {
        let fx = Fixture::new().with_package_json();
        let prompter = ScriptedPrompter::new([Answer::Select(2)]);

        init(&fx.ctx(&prompter)).unwrap();

        assert_eq!(
            fx.runner.command_lines(),
            vec!["npm install --save-dev lefthook", "npx lefthook install"]
        );
        assert!(fx.temp.path().join(LEFTHOOK_CONFIG).is_file());
        assert_eq!(git::hooks_path(fx.temp.path()).unwrap(), None);
    }

    #[test]
    fn test_init_husky_requires_package_json() {
        let fx = Fixture::new();
        let prompter = ScriptedPrompter::new([Answer::Select(1)]);

        let err = init(&fx.ctx(&prompter)).unwrap_err();

        assert!(matches!(err, Error::Manifest { .. }));
        assert!(!ConfigStore::new(fx.temp.path()).exists());
        assert!(fx.runner.commands().is_empty());
    }

    #[test]
    fn test_init_existing_configuration_warns() {
        let fx = Fixture::new();
        ConfigStore::new(fx.temp.path())
            .create(HookTool::Husky)
            .unwrap();
        let prompter = ScriptedPrompter::new([]);

        let outcome = init(&fx.ctx(&prompter)).unwrap();

        assert_eq!(outcome, InitOutcome::AlreadyInitialized);
        assert_eq!(
            fx.reporter.at(Level::Warning),
            vec!["Configuration already exists."]
        );
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_failed_package_install_writes_no_config() {
        let fx = Fixture::new().with_package_json();
        let runner = RecordingRunner::new().failing("npm");
        let prompter = ScriptedPrompter::new([]);
        let ctx = ProjectContext::new(
            fx.temp.path(),
            &fx.catalog,
            &prompter,
            &fx.reporter,
            &runner,
        );

        let err = setup_tool(&ctx, HookTool::Husky).unwrap_err();

        assert!(matches!(err, Error::CommandFailed { .. }));
        assert!(!ConfigStore::new(fx.temp.path()).exists());
    }
}
