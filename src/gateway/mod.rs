//! Gateway adapter abstraction
//!
//! Route and integration primitives against the API gateway control plane.
//! Implementations own timeouts, retries and credentials; the reconciler
//! only sequences calls.

pub mod memory;

pub use memory::InMemoryGateway;

use crate::domain::{GatewayId, GatewayRoute, IntegrationId};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for API gateway control planes
///
/// Implementations must be Send + Sync for use in async contexts.
#[async_trait]
pub trait GatewayAdapter: Send + Sync {
    /// Look up the route at `path`, if one exists
    async fn get_route(&self, gateway_id: &GatewayId, path: &str) -> Result<Option<GatewayRoute>>;

    /// Create a route at `path` bound to `integration_id`
    async fn create_route(
        &self,
        gateway_id: &GatewayId,
        integration_id: &IntegrationId,
        path: &str,
    ) -> Result<()>;

    /// Delete the route at `path`.
    ///
    /// Returns the deleted route, or `None` when no route existed. A missing
    /// route is not an error.
    async fn delete_route(&self, gateway_id: &GatewayId, path: &str)
        -> Result<Option<GatewayRoute>>;

    /// Create an HTTP proxy integration forwarding to `target_url`
    async fn create_http_integration(
        &self,
        gateway_id: &GatewayId,
        target_url: &str,
    ) -> Result<IntegrationId>;

    /// Delete an integration
    async fn delete_integration(
        &self,
        gateway_id: &GatewayId,
        integration_id: &IntegrationId,
    ) -> Result<()>;
}
