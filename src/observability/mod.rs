//! # Observability Infrastructure
//!
//! Structured logging and metrics for the gateway reconciler.

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, log_config_info, log_filter};
pub use metrics::MetricsRecorder;

use crate::config::ObservabilityConfig;
use crate::errors::Result;
use ::tracing::info;

/// Initialize logging and return the metrics recorder matching the config
pub fn init_observability(config: &ObservabilityConfig) -> Result<MetricsRecorder> {
    init_logging(config)?;

    let recorder = MetricsRecorder::new(config.enable_metrics);

    info!(
        service_name = %config.service_name,
        log_level = %config.log_level,
        metrics_enabled = %config.enable_metrics,
        json_logging = %config.json_logging,
        "Observability initialized successfully"
    );

    Ok(recorder)
}
