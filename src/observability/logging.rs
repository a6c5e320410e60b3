//! # Structured Logging
//!
//! Subscriber setup and span helpers built on the tracing ecosystem.

use crate::config::ObservabilityConfig;
use crate::errors::{ReconcileError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Create a tracing span for one reconciliation triggered by a deployed resource.
///
/// ```rust,ignore
/// let span = reconcile_span!("update", "iris-classifier");
/// let span = reconcile_span!("remove", "iris-classifier", namespace = "default");
/// ```
#[macro_export]
macro_rules! reconcile_span {
    ($operation:expr, $resource:expr) => {
        tracing::info_span!(
            "reconcile",
            operation = %$operation,
            resource = %$resource,
            reconcile_id = %uuid::Uuid::new_v4()
        )
    };
    ($operation:expr, $resource:expr, $($field:tt)*) => {
        tracing::info_span!(
            "reconcile",
            operation = %$operation,
            resource = %$resource,
            reconcile_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => log_filter(&config.log_level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json_logging {
        registry.with(tracing_subscriber::fmt::layer().json().with_current_span(true)).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| {
        ReconcileError::config_with_source("Failed to install tracing subscriber", Box::new(e))
    })
}

/// Parse a configured log level or directive list into a filter
pub fn log_filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(log_level).map_err(|e| {
        ReconcileError::config_with_source(format!("Invalid log level '{}'", log_level), Box::new(e))
    })
}

/// Log configuration at startup
pub fn log_config_info(config: &crate::config::AppConfig) {
    tracing::info!(
        service_name = %config.observability.service_name,
        gateway_id = %config.gateway.gateway_id,
        load_balancer_scheme = %config.gateway.load_balancer_scheme,
        vpc_link_configured = config.gateway.vpc_link_integration_id.is_some(),
        metrics_enabled = %config.observability.enable_metrics,
        "Gateway reconciler configuration"
    );
}
