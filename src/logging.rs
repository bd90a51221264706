//! Structured logging utilities for the component tracker.
//!
//! Helper functions keep field names consistent across the crate. Nothing
//! here is emitted above `debug` on the hot tracking path.

use crate::location::Location;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable switching [`init`] to JSON output.
pub const JSON_ENV_VAR: &str = "COMPONENT_TRACKER_JSON";

/// Install a stderr subscriber for hosts that do not bring their own.
///
/// `RUST_LOG` wins over `level`. Returns false if a global subscriber was
/// already set.
pub fn init(level: tracing::Level) -> bool {
    let fallback_filter = format!("component_tracker={}", level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback_filter.into());

    if std::env::var(JSON_ENV_VAR).is_ok() {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .is_ok()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    }
}

/// Log the tracking mode once it is known.
pub fn log_mode_resolved(production_mode: bool) {
    tracing::info!(
        production_mode,
        tracking = !production_mode,
        "Component tracking mode resolved"
    );
}

/// Log an incomplete service lookup chain.
pub fn log_mode_unresolved() {
    tracing::debug!("Production mode not available yet, tracking disabled");
}

/// Log a recorded location.
pub fn log_location_recorded(kind: &str, component: &str, location: Option<&Location>) {
    match location {
        Some(loc) => tracing::trace!(kind, component, location = %loc, "Location recorded"),
        None => tracing::trace!(kind, component, "No location resolved"),
    }
}

/// Log the navigation-origin fallback.
pub fn log_navigation_fallback(kind: &str, component: &str) {
    tracing::trace!(kind, component, "Navigation origin, falling back");
}

/// Log entries removed for dropped components.
pub fn log_sweep(table: &str, removed: usize, remaining: usize) {
    tracing::debug!(table, removed, remaining, "Swept dropped components");
}

/// Log a config load failure that was replaced by defaults.
pub fn log_config_fallback(error: &dyn std::fmt::Display) {
    tracing::warn!(error = %error, "Failed to load tracker config, using defaults");
}
