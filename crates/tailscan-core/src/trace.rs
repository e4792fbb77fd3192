//! Tracing setup helpers.

use tracing_subscriber::EnvFilter;

/// Install a global subscriber filtered by `filter`, falling back to
/// `RUST_LOG`, then `info`. Later calls are no-ops once a subscriber is
/// set, so tests can call this freely.
pub fn init(filter: Option<&str>) {
    let env_filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
