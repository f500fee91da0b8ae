//! Tracing subscriber setup for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{FplError, Result};

/// Pick the filter directive: `RUST_LOG` wins, then `--debug`, then the config level.
pub fn filter_directive(rust_log: Option<&str>, default_level: &str, debug: bool) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if debug => "fpl_player=debug".to_string(),
        _ => format!("fpl_player={default_level}"),
    }
}

/// Install a stderr subscriber so stdout stays free for command output.
pub fn init_logging(default_level: &str, debug: bool) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), default_level, debug);

    fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| FplError::Config {
            message: format!("failed to initialise logging: {e}"),
        })
}
