//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for VENVLITE_QUIET, LOG_LEVEL, LOG_JSON.

use tracing_subscriber::{prelude::*, EnvFilter};
use venvlite_core::config::ObservabilityConfig;

/// Initialize tracing. Call at process startup.
/// When VENVLITE_QUIET=1, only WARN and above are logged. RUST_LOG overrides
/// everything.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        "venvlite=warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}
