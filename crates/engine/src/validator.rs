//! Custom template validation
//!
//! A custom template must be an existing file, named with no extension or
//! `.sh`, starting with a `#!` shebang. Checks run in that order and the
//! first failure wins. Validation never modifies anything.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Outcome of validating a custom template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateCheck {
    /// Usable shell script
    Valid,
    /// Nothing exists at the path
    NotFound(PathBuf),
    /// Extension other than `.sh`
    BadExtension(String),
    /// First two bytes are not `#!`
    MissingShebang,
    /// The path exists but could not be read as a file
    Unreadable(PathBuf),
}

impl TemplateCheck {
    /// Whether the template may be installed
    pub fn is_valid(&self) -> bool {
        matches!(self, TemplateCheck::Valid)
    }
}

impl fmt::Display for TemplateCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateCheck::Valid => f.write_str("Custom template validated"),
            TemplateCheck::NotFound(path) => {
                write!(f, "Template file not found: {}", path.display())
            }
            TemplateCheck::BadExtension(ext) => write!(
                f,
                "Invalid file format: .{ext}. Supported formats are: .sh, no extension"
            ),
            TemplateCheck::MissingShebang => f.write_str(
                "Invalid shell script: Missing shebang (e.g., #!/bin/sh) at the top of the file.",
            ),
            TemplateCheck::Unreadable(path) => {
                write!(f, "Template file could not be read: {}", path.display())
            }
        }
    }
}

/// Validate the custom template at `path`
pub fn validate(path: &Path) -> TemplateCheck {
    if !path.exists() {
        return TemplateCheck::NotFound(path.to_path_buf());
    }

    if let Some(ext) = path.extension() {
        if ext != "sh" {
            return TemplateCheck::BadExtension(ext.to_string_lossy().into_owned());
        }
    }

    let mut head = Vec::with_capacity(2);
    let read = File::open(path).and_then(|file| file.take(2).read_to_end(&mut head));
    if let Err(e) = read {
        tracing::debug!(path = %path.display(), error = %e, "Failed to read custom template");
        return TemplateCheck::Unreadable(path.to_path_buf());
    }

    if head != b"#!" {
        return TemplateCheck::MissingShebang;
    }

    TemplateCheck::Valid
}
