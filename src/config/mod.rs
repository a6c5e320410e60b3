//! # Configuration Management
//!
//! Process-wide, read-only configuration supplied at startup: which gateway
//! to manage, how the cluster load balancer is exposed, and how to log.

pub mod settings;

pub use settings::{AppConfig, GatewayConfig, ObservabilityConfig, ENV_PREFIX};
