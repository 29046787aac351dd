//! Logging setup. Events go to stderr so they never mix with chat output.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Target prefix for this crate's events.
pub const TARGET_PREFIX: &str = "shopdesk";

/// Default filter for a given `-v` count. `RUST_LOG` takes precedence.
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("warn,{TARGET_PREFIX}={level}")
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .compact()
        .try_init();
}
