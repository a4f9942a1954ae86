//! Logging bootstrap for standalone modules

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber for standalone runs.
///
/// Hosted processes own the global subscriber, so this is best-effort: a
/// subscriber that is already installed wins and the call does nothing.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
