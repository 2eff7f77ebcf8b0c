//! Tracing setup.
//!
//! Diagnostics go to stderr; stdout is reserved for the progress stream.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber from `RUST_LOG`, defaulting to
/// `info`.
pub fn initialize_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
