//! Template selection and script generation
//!
//! The selector only offers templates the catalog lists for the hook type,
//! then turns the chosen template into script text plus the parameters
//! persisted alongside the hook in `hooks-config.json`.

use crate::context::ProjectContext;
use crate::package::PackageManager;
use crate::templates;
use crate::validator::{self, TemplateCheck};
use hookpilot_config::{HookParams, TemplateId};
use hookpilot_core::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Attempts allowed for a custom path or a pattern before giving up
pub const MAX_ATTEMPTS: usize = 3;

/// Script bytes and the parameters it was generated from
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTemplate {
    /// Hook script content, copied byte for byte for custom templates
    pub content: Vec<u8>,
    /// Parameters to persist for the hook
    pub params: HookParams,
}

/// Ask which compatible template to use for `hook_type`
pub fn select_template(ctx: &ProjectContext<'_>, hook_type: &str) -> Result<TemplateId> {
    let templates = ctx.catalog().templates_for(hook_type)?;
    let labels: Vec<String> = templates.iter().map(|t| t.label().to_string()).collect();

    let index = ctx.prompter().select(
        &format!("Which template do you want to use for '{hook_type}'?"),
        &labels,
        0,
    )?;
    let template = templates
        .get(index)
        .copied()
        .ok_or_else(|| Error::Prompt(format!("selection {index} out of range")))?;

    tracing::debug!(hook_type, %template, "Selected template");
    Ok(template)
}

/// Produce the script for `template`, prompting for its choices
pub fn generate_content(
    ctx: &ProjectContext<'_>,
    template: TemplateId,
    hook_type: &str,
) -> Result<GeneratedTemplate> {
    if !ctx.catalog().is_compatible(hook_type, template) {
        return Err(Error::IncompatibleTemplate {
            hook: hook_type.to_string(),
            template: template.to_string(),
        });
    }

    let params = HookParams::new(template);
    let generated = match template {
        TemplateId::Lint | TemplateId::Test | TemplateId::Format => {
            let default = match template {
                TemplateId::Lint => templates::DEFAULT_LINT_COMMAND,
                TemplateId::Test => templates::DEFAULT_TEST_COMMAND,
                _ => templates::DEFAULT_FORMAT_COMMAND,
            };
            let command = prompt_command(ctx, template, default)?;
            GeneratedTemplate {
                content: templates::command_script(hook_type, template, &command).into_bytes(),
                params: params.with_command(command),
            }
        }
        TemplateId::InstallDeps => {
            let default = PackageManager::detect(ctx.root()).install_command();
            let command = prompt_command(ctx, template, &default)?;
            GeneratedTemplate {
                content: templates::install_deps_script(hook_type, &command).into_bytes(),
                params: params.with_command(command),
            }
        }
        TemplateId::ConventionalCommit => {
            let pattern = prompt_pattern(
                ctx,
                "Commit message pattern (regular expression)",
                templates::DEFAULT_COMMIT_PATTERN,
            )?;
            GeneratedTemplate {
                content: templates::commit_message_script(hook_type, &pattern).into_bytes(),
                params: params.with_pattern(pattern),
            }
        }
        TemplateId::BranchName => {
            let pattern = prompt_pattern(
                ctx,
                "Branch name pattern (regular expression)",
                templates::DEFAULT_BRANCH_PATTERN,
            )?;
            GeneratedTemplate {
                content: templates::branch_name_script(hook_type, &pattern).into_bytes(),
                params: params.with_pattern(pattern),
            }
        }
        TemplateId::Custom => {
            let (entered, resolved) = prompt_custom_path(ctx)?;
            let content = fs::read(&resolved)?;
            GeneratedTemplate {
                content,
                params: params.with_custom_path(entered),
            }
        }
    };

    Ok(generated)
}

fn prompt_command(ctx: &ProjectContext<'_>, template: TemplateId, default: &str) -> Result<String> {
    let answer = ctx
        .prompter()
        .input(&format!("Command to run for '{template}'"), Some(default))?;
    let answer = answer.trim();
    Ok(if answer.is_empty() { default } else { answer }.to_string())
}

fn prompt_pattern(ctx: &ProjectContext<'_>, prompt: &str, default: &str) -> Result<String> {
    let mut last_error = String::new();
    for attempt in 1..=MAX_ATTEMPTS {
        let answer = ctx.prompter().input(prompt, Some(default))?;
        let pattern = match answer.trim() {
            "" => default,
            other => other,
        };

        match Regex::new(pattern) {
            Ok(_) => return Ok(pattern.to_string()),
            Err(e) => {
                last_error = format!("Invalid regular expression '{pattern}': {e}");
                tracing::debug!(attempt, pattern, "Rejected pattern");
                ctx.reporter().error(&last_error);
            }
        }
    }
    Err(Error::InvalidTemplate(last_error))
}

/// Prompt until a custom template validates
///
/// Returns the path as entered and the path resolved against the project
/// root.
fn prompt_custom_path(ctx: &ProjectContext<'_>) -> Result<(PathBuf, PathBuf)> {
    let mut last_check = TemplateCheck::MissingShebang;
    for attempt in 1..=MAX_ATTEMPTS {
        let answer = ctx
            .prompter()
            .input("Path to your custom hook script", None)?;
        let entered = PathBuf::from(answer.trim());
        let resolved = resolve_custom_path(ctx.root(), &entered);

        let check = validator::validate(&resolved);
        if check.is_valid() {
            ctx.reporter().success(&check.to_string());
            return Ok((entered, resolved));
        }

        tracing::debug!(attempt, path = %resolved.display(), %check, "Rejected custom template");
        ctx.reporter().error(&check.to_string());
        last_check = check;
    }
    Err(Error::InvalidTemplate(last_check.to_string()))
}

fn resolve_custom_path(root: &Path, entered: &Path) -> PathBuf {
    if entered.as_os_str().is_empty() || entered.is_absolute() {
        entered.to_path_buf()
    } else {
        root.join(entered)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use crate::testing::{Answer, RecordingReporter, RecordingRunner, ScriptedPrompter};
    use hookpilot_config::TemplateCatalog;
    use hookpilot_core::Level;
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        catalog: TemplateCatalog,
        reporter: RecordingReporter,
        runner: RecordingRunner,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                temp: TempDir::new().unwrap(),
                catalog: TemplateCatalog::builtin().unwrap(),
                reporter: RecordingReporter::new(),
                runner: RecordingRunner::new(),
            }
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
    fn test_select_offers_only_compatible_templates() {
        let fx = Fixture::new();
        let prompter = ScriptedPrompter::new([Answer::Select(0)]);

        let template = select_template(&fx.ctx(&prompter), "commit-msg").unwrap();
        assert_eq!(template, TemplateId::ConventionalCommit);
    }

    #[test]
    fn test_select_unknown_hook_type_does_not_prompt() {
        let fx = Fixture::new();
        let prompter = ScriptedPrompter::new([]);

        let err = select_template(&fx.ctx(&prompter), "pre-applypatch").unwrap_err();
        assert!(matches!(err, Error::UnknownHookType(_)));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_generate_incompatible_template() {
        let fx = Fixture::new();
        let prompter = ScriptedPrompter::new([]);

        let err = generate_content(&fx.ctx(&prompter), TemplateId::Lint, "commit-msg").unwrap_err();
        assert!(matches!(err, Error::IncompatibleTemplate { .. }));
    }

    #[test]
    fn test_generate_lint_uses_default_on_empty_input() {
        let fx = Fixture::new();
        let prompter = ScriptedPrompter::new([Answer::Input(String::new())]);

        let generated =
            generate_content(&fx.ctx(&prompter), TemplateId::Lint, "pre-commit").unwrap();
        assert!(String::from_utf8(generated.content).unwrap().contains("npm run lint"));
        assert_eq!(generated.params.command.as_deref(), Some("npm run lint"));
        assert_eq!(generated.params.template, TemplateId::Lint);
    }

    #[test]
    fn test_generate_install_deps_defaults_to_detected_manager() {
        let fx = Fixture::new();
        fs::write(fx.temp.path().join("yarn.lock"), "").unwrap();
        let prompter = ScriptedPrompter::new([Answer::Input(String::new())]);

        let generated =
            generate_content(&fx.ctx(&prompter), TemplateId::InstallDeps, "post-merge").unwrap();
        assert_eq!(generated.params.command.as_deref(), Some("yarn install"));
    }

    #[test]
    fn test_generate_pattern_reprompts_on_invalid_regex() {
        let fx = Fixture::new();
        let prompter = ScriptedPrompter::new([
            Answer::Input("^(feat".to_string()),
            Answer::Input("^(feat|fix): .+".to_string()),
        ]);

        let generated =
            generate_content(&fx.ctx(&prompter), TemplateId::ConventionalCommit, "commit-msg")
                .unwrap();
        assert_eq!(generated.params.pattern.as_deref(), Some("^(feat|fix): .+"));
        assert_eq!(fx.reporter.at(Level::Error).len(), 1);
    }

    #[test]
    fn test_custom_template_need_not_be_utf8() {
        let fx = Fixture::new();
        let script = b"#!/bin/sh\n# \xff\xfe latin-1 comment\nexit 0\n".to_vec();
        fs::write(fx.temp.path().join("legacy.sh"), &script).unwrap();
        let prompter = ScriptedPrompter::new([Answer::Input("legacy.sh".to_string())]);

        let generated =
            generate_content(&fx.ctx(&prompter), TemplateId::Custom, "pre-commit").unwrap();
        assert_eq!(generated.content, script);
    }

    #[test]
    fn test_custom_template_is_copied_verbatim() {
        let fx = Fixture::new();
        let script = "#!/bin/sh\necho custom\n";
        fs::write(fx.temp.path().join("my-hook.sh"), script).unwrap();
        let prompter = ScriptedPrompter::new([Answer::Input("my-hook.sh".to_string())]);

        let generated =
            generate_content(&fx.ctx(&prompter), TemplateId::Custom, "pre-rebase").unwrap();
        assert_eq!(generated.content, script.as_bytes());
        assert_eq!(
            generated.params.custom_path.as_deref(),
            Some(Path::new("my-hook.sh"))
        );
        assert_eq!(fx.reporter.at(Level::Success), vec!["Custom template validated"]);
    }

    #[test]
    fn test_custom_template_reprompts_then_accepts() {
        let fx = Fixture::new();
        fs::write(fx.temp.path().join("no-shebang.sh"), "echo hi\n").unwrap();
        fs::write(fx.temp.path().join("good"), "#!/bin/sh\n").unwrap();
        let prompter = ScriptedPrompter::new([
            Answer::Input("no-shebang.sh".to_string()),
            Answer::Input("good".to_string()),
        ]);

        generate_content(&fx.ctx(&prompter), TemplateId::Custom, "pre-commit").unwrap();
        assert!(fx.reporter.contains(Level::Error, "Missing shebang"));
    }

    #[test]
    fn test_custom_template_gives_up_after_three_attempts() {
        let fx = Fixture::new();
        let prompter = ScriptedPrompter::new([
            Answer::Input("a.sh".to_string()),
            Answer::Input("b.txt".to_string()),
            Answer::Input("c.sh".to_string()),
            Answer::Input("never-asked.sh".to_string()),
        ]);

        let err = generate_content(&fx.ctx(&prompter), TemplateId::Custom, "pre-commit").unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate(_)));
        assert_eq!(fx.reporter.at(Level::Error).len(), MAX_ATTEMPTS);
        assert_eq!(prompter.remaining(), 1);
    }
}
