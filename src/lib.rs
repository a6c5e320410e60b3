//! # gateway-reconciler
//!
//! Converges the routes and integrations of an API gateway with the desired
//! exposure of externally deployed HTTP endpoints.
//!
//! ## Architecture
//!
//! ```text
//! deployed resource ──► ResourceReader ──┐
//!                                        ▼
//! (prev, next) descriptors ──► ReconcilePlan ──► GatewayReconciler ──► GatewayAdapter
//!                                                        │
//!                                                        └──► Topology (load balancer URL)
//! ```
//!
//! The reconciler is event-triggered and stateless: every call re-reads the
//! gateway through the adapter, and every operation is idempotent so a failed
//! reconciliation can simply be re-run on the next event.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gateway_reconciler::{
//!     AppConfig, EndpointDescriptor, GatewayReconciler, InMemoryGateway, Result,
//!     StaticTopology, VirtualServiceReader,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let reconciler = GatewayReconciler::from_config(
//!         &config.gateway,
//!         Arc::new(InMemoryGateway::from_config(&config.gateway)),
//!         Arc::new(StaticTopology::from_config(&config.gateway)),
//!         Arc::new(VirtualServiceReader::new()),
//!     )?;
//!
//!     reconciler
//!         .update(&EndpointDescriptor::disabled("/iris"), &EndpointDescriptor::public("/iris"))
//!         .await
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod gateway;
pub mod observability;
pub mod reconciler;
pub mod resource;
pub mod topology;
pub mod utils;

// Re-export commonly used types and traits
pub use config::{AppConfig, GatewayConfig, ObservabilityConfig};
pub use domain::{
    EndpointDescriptor, GatewayId, GatewayRoute, GatewayType, IntegrationId, LoadBalancerScheme,
};
pub use errors::{ReconcileError, Result};
pub use gateway::{GatewayAdapter, InMemoryGateway};
pub use observability::{init_observability, MetricsRecorder};
pub use reconciler::{GatewayReconciler, ReconcilePlan};
pub use resource::{ResourceReader, VirtualServiceReader};
pub use topology::{StaticTopology, Topology};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
