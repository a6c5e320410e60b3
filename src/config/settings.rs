//! # Configuration Settings
//!
//! Defines the configuration structure for the gateway reconciler.

use crate::domain::{GatewayId, IntegrationId, LoadBalancerScheme};
use crate::errors::{ReconcileError, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Prefix shared by every environment variable the reconciler reads
pub const ENV_PREFIX: &str = "GATEWAY_RECONCILER_";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Gateway and cluster topology configuration
    #[validate(nested)]
    pub gateway: GatewayConfig,

    /// Logging and metrics configuration
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(ReconcileError::from)?;
        self.gateway.validate_custom()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let config =
            Self { gateway: GatewayConfig::from_env()?, observability: ObservabilityConfig::from_env() };
        config.validate()?;
        Ok(config)
    }
}

/// Gateway and cluster topology configuration, read once at startup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GatewayConfig {
    /// Identifier of the managed API gateway
    #[validate(length(min = 1, message = "Gateway ID cannot be empty"))]
    pub gateway_id: String,

    /// Exposure scheme of the cluster's API load balancer
    pub load_balancer_scheme: LoadBalancerScheme,

    /// Shared VPC-link integration used by internal routes
    pub vpc_link_integration_id: Option<String>,

    /// Base URL of the internet-facing load balancer
    pub load_balancer_url: Option<String>,
}

impl GatewayConfig {
    /// Checks that go beyond what the validator derive expresses
    pub fn validate_custom(&self) -> Result<()> {
        if self.gateway_id.trim().is_empty() {
            return Err(ReconcileError::validation_field("Gateway ID cannot be empty", "gateway_id"));
        }

        if self.load_balancer_scheme == LoadBalancerScheme::Internal
            && self.vpc_link_integration_id.as_deref().map_or(true, |id| id.trim().is_empty())
        {
            return Err(ReconcileError::validation_field(
                "VPC link integration ID is required when the load balancer scheme is internal",
                "vpc_link_integration_id",
            ));
        }

        if let Some(raw) = &self.load_balancer_url {
            let parsed = url::Url::parse(raw).map_err(|e| {
                ReconcileError::validation_field(
                    format!("Invalid load balancer URL '{}': {}", raw, e),
                    "load_balancer_url",
                )
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ReconcileError::validation_field(
                    "Load balancer URL must use http or https",
                    "load_balancer_url",
                ));
            }
        }

        Ok(())
    }

    pub fn gateway_id(&self) -> GatewayId {
        GatewayId::from(self.gateway_id.as_str())
    }

    pub fn vpc_link_integration_id(&self) -> Option<IntegrationId> {
        self.vpc_link_integration_id.as_deref().map(IntegrationId::from)
    }

    /// Create GatewayConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let gateway_id = env_var("GATEWAY_ID").unwrap_or_default();

        let load_balancer_scheme = match env_var("LOAD_BALANCER_SCHEME") {
            Some(raw) => raw.parse().map_err(ReconcileError::config)?,
            None => LoadBalancerScheme::InternetFacing,
        };

        Ok(Self {
            gateway_id,
            load_balancer_scheme,
            vpc_link_integration_id: env_var("VPC_LINK_INTEGRATION_ID"),
            load_balancer_url: env_var("LOAD_BALANCER_URL"),
        })
    }
}

/// Logging and metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ObservabilityConfig {
    /// Enable metrics collection
    pub enable_metrics: bool,

    /// Service name attached to logs
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,

    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enable_metrics: true,
            service_name: "gateway-reconciler".to_string(),
            log_level: "info".to_string(),
            json_logging: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create ObservabilityConfig from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enable_metrics: env_flag("ENABLE_METRICS").unwrap_or(defaults.enable_metrics),
            service_name: env_var("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: env_var("LOG_LEVEL").unwrap_or(defaults.log_level),
            json_logging: env_flag("JSON_LOGGING").unwrap_or(defaults.json_logging),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, name)).ok().filter(|v| !v.trim().is_empty())
}

fn env_flag(name: &str) -> Option<bool> {
    env_var(name).map(|v| v.trim().eq_ignore_ascii_case("true") || v.trim() == "1")
}
