//! Tracing initialization for embedding hosts.
//!
//! The core instruments its handler, filter, and catalog paths with `tracing`
//! spans and events. Installing a subscriber is the host's choice; this
//! module offers a ready-made one for hosts and debugging sessions that do
//! not bring their own.

use tracing_subscriber::EnvFilter;

use crate::Config;

/// Installs a formatting tracing subscriber filtered by the configured level.
///
/// # Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. The `RUST_LOG` environment variable
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// Does nothing visible if the host already installed a global subscriber.
///
/// # Example
///
/// ```
/// use bookbrowse::{observability, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// observability::init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = match &config.trace_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
