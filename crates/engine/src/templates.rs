//! Built-in hook script bodies
//!
//! Every script is POSIX `sh`, starts with a shebang and a marker line
//! naming the hook and template, and exits non-zero to block the Git
//! operation.

use hookpilot_config::TemplateId;

/// Default lint command
pub const DEFAULT_LINT_COMMAND: &str = "npm run lint";

/// Default test command
pub const DEFAULT_TEST_COMMAND: &str = "npm test";

/// Default format-check command
pub const DEFAULT_FORMAT_COMMAND: &str = "npx prettier --check .";

/// Default Conventional Commits subject pattern
pub const DEFAULT_COMMIT_PATTERN: &str =
    r"^(feat|fix|docs|style|refactor|perf|test|build|ci|chore|revert)(\([a-z0-9._-]+\))?!?: .+";

/// Default branch naming pattern
pub const DEFAULT_BRANCH_PATTERN: &str =
    r"^(main|master|develop|(feature|fix|hotfix|release|chore)/[a-z0-9._-]+)$";

/// Lockfiles whose change triggers a reinstall
const LOCKFILE_PATTERN: &str = r"^(package-lock\.json|yarn\.lock|pnpm-lock\.yaml)$";

/// Default `lefthook.yml` written by init and restore
pub const DEFAULT_LEFTHOOK_CONFIG: &str = "\
# Git hooks managed by Lefthook.
# See https://github.com/evilmartians/lefthook for the configuration format.

pre-commit:
  parallel: true
  commands: {}
";

fn header(hook_type: &str, template: TemplateId) -> String {
    format!("#!/bin/sh\n# hookpilot: {hook_type} ({template})\n")
}

/// Quote `value` for a single-quoted shell string
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Script running `command`, failing the hook if it fails
pub fn command_script(hook_type: &str, template: TemplateId, command: &str) -> String {
    format!("{}set -e\n\n{command}\n", header(hook_type, template))
}

/// `commit-msg` script checking the subject line against `pattern`
pub fn commit_message_script(hook_type: &str, pattern: &str) -> String {
    format!(
        r#"{header}pattern={pattern}
subject=$(head -n 1 "$1")

if ! printf '%s\n' "$subject" | grep -Eq "$pattern"; then
  echo "Commit message does not follow Conventional Commits:" >&2
  echo "  $subject" >&2
  echo "Expected: <type>(<scope>): <description>" >&2
  exit 1
fi
"#,
        header = header(hook_type, TemplateId::ConventionalCommit),
        pattern = shell_quote(pattern),
    )
}

/// `pre-push` script checking the current branch name against `pattern`
pub fn branch_name_script(hook_type: &str, pattern: &str) -> String {
    format!(
        r#"{header}pattern={pattern}
branch=$(git rev-parse --abbrev-ref HEAD)

if ! printf '%s\n' "$branch" | grep -Eq "$pattern"; then
  echo "Branch name '$branch' does not match $pattern" >&2
  exit 1
fi
"#,
        header = header(hook_type, TemplateId::BranchName),
        pattern = shell_quote(pattern),
    )
}

/// Script running `command` when a lockfile changed between two revisions
///
/// `post-checkout` receives the revisions as arguments; other hooks
/// compare `ORIG_HEAD` with `HEAD`.
pub fn install_deps_script(hook_type: &str, command: &str) -> String {
    let range = if hook_type == "post-checkout" {
        r#""$1" "$2""#
    } else {
        "ORIG_HEAD HEAD"
    };
    format!(
        r#"{header}changed=$(git diff-tree -r --name-only --no-commit-id {range} 2>/dev/null || true)

if printf '%s\n' "$changed" | grep -Eq {lockfiles}; then
  echo "Lockfile changed, reinstalling dependencies..."
  {command}
fi
"#,
        header = header(hook_type, TemplateId::InstallDeps),
        lockfiles = shell_quote(LOCKFILE_PATTERN),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use regex::Regex;

    #[test]
    fn test_command_script_starts_with_shebang() {
        let script = command_script("pre-commit", TemplateId::Lint, "npm run lint");
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("# hookpilot: pre-commit (lint)"));
        assert!(script.ends_with("npm run lint\n"));
    }

    #[test]
    fn test_patterns_are_single_quoted() {
        let script = commit_message_script("commit-msg", "^it's: .+");
        assert!(script.contains(r"pattern='^it'\''s: .+'"));
    }

    #[test]
    fn test_install_deps_revision_range() {
        assert!(install_deps_script("post-checkout", "npm install").contains(r#""$1" "$2""#));
        assert!(install_deps_script("post-merge", "npm install").contains("ORIG_HEAD HEAD"));
    }

    #[test]
    fn test_default_commit_pattern() {
        let pattern = Regex::new(DEFAULT_COMMIT_PATTERN).unwrap();
        // (subject, expected match)
        let cases = [
            ("feat: add list command", true),
            ("fix(store)!: write atomically", true),
            ("chore(deps): bump serde", true),
            ("Added stuff", false),
            ("feat:missing space", false),
        ];
        for (subject, expected) in cases {
            assert_eq!(pattern.is_match(subject), expected, "{subject}");
        }
    }

    #[test]
    fn test_default_branch_pattern() {
        let pattern = Regex::new(DEFAULT_BRANCH_PATTERN).unwrap();
        assert!(pattern.is_match("main"));
        assert!(pattern.is_match("feature/add-list"));
        assert!(!pattern.is_match("my-branch"));
        assert!(!pattern.is_match("feature/Upper"));
    }
}
