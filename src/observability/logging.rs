//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Apply the configured default level, `RUST_LOG` takes precedence

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber.
///
/// Called once at startup, before any other subsystem logs.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!("demo_webapp={},tower_http=info", config.log_level);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
