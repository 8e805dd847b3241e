use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset. Kept quiet so only the report and
/// its diagnostics show up on a normal run.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize the logging system with environment-based filtering.
///
/// Logs always go to stderr; stdout carries the report.
/// - Compact human-readable lines when stderr is a terminal
/// - Flattened JSON events otherwise
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match default_log_mode() {
        LogMode::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init(),
        LogMode::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Pretty,
    Json,
}
