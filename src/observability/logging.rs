//! Structured logging.
//!
//! One `tracing` subscriber per process, installed before any bootstrap
//! work so compilation and migration attempts are visible. `RUST_LOG`
//! overrides the configured level wholesale.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::schema::ObservabilitySettings;

/// Install the global subscriber. Called exactly once, at the top of each
/// binary's main.
pub fn init(settings: &ObservabilitySettings) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(&settings.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter(level: &str) -> String {
    format!("gateway_core={level},tower_http={level}")
}
