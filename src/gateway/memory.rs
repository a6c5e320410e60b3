//! In-memory gateway adapter
//!
//! Keeps routes and integrations in concurrent maps. Useful for dry runs and
//! as a faithful stand-in for the control plane in tests.

use super::GatewayAdapter;
use crate::config::GatewayConfig;
use crate::domain::{GatewayId, GatewayRoute, IntegrationId};
use crate::errors::{ReconcileError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// HTTP integration stored by the in-memory gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredIntegration {
    pub gateway_id: GatewayId,
    pub target_url: String,
}

/// Gateway adapter backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    routes: DashMap<(GatewayId, String), GatewayRoute>,
    integrations: DashMap<IntegrationId, StoredIntegration>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway for `config`, with the configured VPC link already registered
    pub fn from_config(config: &GatewayConfig) -> Self {
        let gateway = Self::new();
        match config.vpc_link_integration_id() {
            Some(vpc_link) => gateway.with_integration(&config.gateway_id(), vpc_link),
            None => gateway,
        }
    }

    /// Register an integration that exists independently of any route, such as a VPC link
    pub fn with_integration(self, gateway_id: &GatewayId, integration_id: IntegrationId) -> Self {
        self.integrations.insert(
            integration_id,
            StoredIntegration { gateway_id: gateway_id.clone(), target_url: String::new() },
        );
        self
    }

    /// Current route at `path`
    pub fn route(&self, gateway_id: &GatewayId, path: &str) -> Option<GatewayRoute> {
        self.routes.get(&(gateway_id.clone(), path.to_string())).map(|r| r.value().clone())
    }

    /// Current integration by id
    pub fn integration(&self, integration_id: &IntegrationId) -> Option<StoredIntegration> {
        self.integrations.get(integration_id).map(|i| i.value().clone())
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn integration_count(&self) -> usize {
        self.integrations.len()
    }
}

#[async_trait]
impl GatewayAdapter for InMemoryGateway {
    async fn get_route(&self, gateway_id: &GatewayId, path: &str) -> Result<Option<GatewayRoute>> {
        Ok(self.route(gateway_id, path))
    }

    async fn create_route(
        &self,
        gateway_id: &GatewayId,
        integration_id: &IntegrationId,
        path: &str,
    ) -> Result<()> {
        if !self.integrations.contains_key(integration_id) {
            return Err(ReconcileError::gateway(
                "create_route",
                gateway_id.as_str(),
                format!("integration '{}' does not exist", integration_id),
            ));
        }

        let key = (gateway_id.clone(), path.to_string());
        if self.routes.contains_key(&key) {
            return Err(ReconcileError::gateway(
                "create_route",
                gateway_id.as_str(),
                format!("route '{}' already exists", path),
            ));
        }

        debug!(gateway_id = %gateway_id, path, integration_id = %integration_id, "Storing route");
        self.routes.insert(key, GatewayRoute::bound_to(path, integration_id));
        Ok(())
    }

    async fn delete_route(
        &self,
        gateway_id: &GatewayId,
        path: &str,
    ) -> Result<Option<GatewayRoute>> {
        Ok(self.routes.remove(&(gateway_id.clone(), path.to_string())).map(|(_, route)| route))
    }

    async fn create_http_integration(
        &self,
        gateway_id: &GatewayId,
        target_url: &str,
    ) -> Result<IntegrationId> {
        let integration_id = IntegrationId::generate();
        self.integrations.insert(
            integration_id.clone(),
            StoredIntegration { gateway_id: gateway_id.clone(), target_url: target_url.to_string() },
        );
        Ok(integration_id)
    }

    async fn delete_integration(
        &self,
        gateway_id: &GatewayId,
        integration_id: &IntegrationId,
    ) -> Result<()> {
        match self.integrations.remove(integration_id) {
            Some(_) => Ok(()),
            None => Err(ReconcileError::gateway(
                "delete_integration",
                gateway_id.as_str(),
                format!("integration '{}' does not exist", integration_id),
            )),
        }
    }
}
