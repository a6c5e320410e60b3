//! # Metrics Collection
//!
//! Counters for gateway mutations and reconciliation outcomes, recorded
//! through the `metrics` facade. Installing an exporter is left to the host
//! process.

use metrics::{counter, describe_counter};

/// Metrics recorder that tracks reconciliation activity
#[derive(Debug, Clone, Default)]
pub struct MetricsRecorder {
    enabled: bool,
}

impl MetricsRecorder {
    /// Create a new metrics recorder instance
    pub fn new(enabled: bool) -> Self {
        if enabled {
            describe_metrics();
        }
        Self { enabled }
    }

    /// Recorder that drops every measurement
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one call against the gateway control plane
    pub fn record_gateway_operation(&self, operation: &str, success: bool) {
        if !self.enabled {
            return;
        }
        let status = if success { "success" } else { "error" };
        let labels = [("operation", operation.to_string()), ("status", status.to_string())];
        counter!("gateway_operations_total", &labels).increment(1);
    }

    /// Record the outcome of one reconciliation
    pub fn record_reconcile(&self, plan: &str, success: bool) {
        if !self.enabled {
            return;
        }
        let status = if success { "success" } else { "error" };
        let labels = [("plan", plan.to_string()), ("status", status.to_string())];
        counter!("reconciliations_total", &labels).increment(1);
    }
}

fn describe_metrics() {
    describe_counter!("gateway_operations_total", "Calls issued against the API gateway and cluster topology");
    describe_counter!("reconciliations_total", "Endpoint reconciliations by plan and outcome");
}
