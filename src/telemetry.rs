//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured `log_level`. Production emits JSON
//! lines; other environments use the human-readable formatter.

use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::{SubscriberInitExt as _, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ServerConfig;

/// Build the filter from `RUST_LOG`, falling back to `default_directives`.
pub fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(server: &ServerConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(&server.log_level));

    if server.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    }
}
