//! Cluster network topology
//!
//! Resolves where internet-facing gateway integrations should send traffic.

use crate::errors::{ReconcileError, Result};
use async_trait::async_trait;

/// Reader for the cluster's API load balancer
#[async_trait]
pub trait Topology: Send + Sync {
    /// Base URL of the internet-facing API load balancer
    async fn load_balancer_url(&self) -> Result<String>;
}

/// Topology backed by a load balancer URL known at startup
#[derive(Debug, Clone, Default)]
pub struct StaticTopology {
    load_balancer_url: Option<String>,
}

impl StaticTopology {
    pub fn new(load_balancer_url: Option<String>) -> Self {
        Self { load_balancer_url }
    }

    pub fn from_config(config: &crate::config::GatewayConfig) -> Self {
        Self::new(config.load_balancer_url.clone())
    }
}

#[async_trait]
impl Topology for StaticTopology {
    async fn load_balancer_url(&self) -> Result<String> {
        self.load_balancer_url
            .clone()
            .ok_or_else(|| ReconcileError::topology("API load balancer URL is not configured"))
    }
}
