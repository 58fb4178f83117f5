//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
