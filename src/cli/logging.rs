//! Diagnostic output for the command line

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Send diagnostics to stderr.
///
/// Warnings always show; `verbose` lowers the floor to debug. `RUST_LOG`
/// directives apply on top. Library records emitted through `log` are
/// picked up by the subscriber's log bridge.
pub fn init(verbose: bool) {
    let floor = if verbose { Level::DEBUG } else { Level::WARN };
    // a second call keeps the subscriber that is already installed
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(floor.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
