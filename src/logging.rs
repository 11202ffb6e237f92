//! Diagnostic logging to stderr.
//!
//! Filtered by `RUST_LOG`, `warn` when unset. Passwords are never logged;
//! `debug` shows attempt counts and entropy, `trace` shows each retry.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
