//! Tracing setup shared by the GUI and CLI binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVES: &str = "info,egy_core=debug";

/// Install a compact stdout subscriber.
///
/// `RUST_LOG` overrides `default_directives`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init(default_directives: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let stdout_layer = fmt::layer().with_target(true).compact();

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!("Tracing initialized");
    }
}
