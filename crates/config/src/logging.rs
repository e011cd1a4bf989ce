//! Logging configuration for the hookpilot CLI
//!
//! Diagnostic output goes through `tracing`. User-facing messages do not:
//! they are emitted through the `Reporter` trait.

use crate::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the hookpilot crates at `level`
fn default_directive(level: &str) -> String {
    format!("hookpilot={level},hookpilot_engine={level},hookpilot_config={level}")
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging with timestamps
/// * `log_file` - Optional path to append a detailed log to
///
/// `RUST_LOG` overrides the stdout filter. The file layer always records
/// at debug level.
///
/// # Examples
/// ```ignore
/// init(false, None)?;
/// init(true, Some(Path::new("hookpilot.log")))?;
/// ```
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(level)))
        .map_err(|e| Error::Message(format!("Invalid log filter: {e}")))?;

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let filter = EnvFilter::try_new(default_directive("debug"))
                .map_err(|e| Error::Message(format!("Invalid log filter: {e}")))?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .with_filter(filter),
            )
        }
        None => None,
    };

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true);

    // No timestamps in normal mode
    let stdout_layer = if verbose {
        stdout_layer.with_filter(env_filter).boxed()
    } else {
        stdout_layer.without_time().with_filter(env_filter).boxed()
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Message(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_all_crates() {
        let directive = default_directive("debug");
        assert!(directive.contains("hookpilot=debug"));
        assert!(directive.contains("hookpilot_engine=debug"));
        assert!(directive.contains("hookpilot_config=debug"));
        assert!(EnvFilter::try_new(directive).is_ok());
    }
}
