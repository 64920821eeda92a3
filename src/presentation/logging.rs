//! Diagnostic logging setup
//!
//! `tracing` output always goes to stderr so it never mixes with the
//! operator transcript or NDJSON on stdout.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

/// Filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `-v` when set and valid. Calling this twice is a
/// no-op.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
