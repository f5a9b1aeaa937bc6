//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber once per process. `RUST_LOG`
//! takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber; later calls are no-ops
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level, "logging initialized");
    }
}

/// Emit a frontend-supplied message at the named level
pub fn log_at_level(level: &str, message: &str) {
    match level.to_ascii_lowercase().as_str() {
        "error" => tracing::error!(target: "frontend", "{}", message),
        "warn" | "warning" => tracing::warn!(target: "frontend", "{}", message),
        "debug" => tracing::debug!(target: "frontend", "{}", message),
        "trace" => tracing::trace!(target: "frontend", "{}", message),
        _ => tracing::info!(target: "frontend", "{}", message),
    }
}
