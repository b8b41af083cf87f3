//! Diagnostic logging setup.
//!
//! Product output goes to stdout through the `Console` port, so tracing
//! events always go to stderr.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Maps the CLI `-v` count to a filter directive.
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
