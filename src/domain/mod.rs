//! Domain layer
//!
//! Pure value types for gateway reconciliation with zero infrastructure
//! dependencies.
//!
//! ## Module Organization
//!
//! - `id`: Type-safe gateway and integration identifiers
//! - `endpoint`: Endpoint descriptors, gateway types and load balancer schemes
//! - `route`: Route handles returned by the gateway

pub mod endpoint;
pub mod id;
pub mod route;

pub use endpoint::{EndpointDescriptor, GatewayType, LoadBalancerScheme};
pub use id::{GatewayId, IntegrationId};
pub use route::{route_target, GatewayRoute, INTEGRATION_TARGET_PREFIX};
