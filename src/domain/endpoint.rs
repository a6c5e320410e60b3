//! Endpoint exposure types
//!
//! Describes how a single deployed API is exposed through the gateway and
//! how the cluster's load balancer is reachable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an endpoint is exposed through the API gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GatewayType {
    /// Not exposed; the disabled value
    None,
    /// Publicly routed through the gateway
    #[default]
    Public,
}

impl GatewayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Public => "public",
        }
    }

    /// Whether this type requires a gateway route
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for GatewayType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "public" => Ok(Self::Public),
            _ => Err(format!("Unknown API gateway type: {}", s)),
        }
    }
}

impl fmt::Display for GatewayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exposure scheme of the cluster's API load balancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadBalancerScheme {
    /// Reachable only inside the VPC; routes go through the shared VPC link
    Internal,
    /// Reachable from the internet; each route proxies to the load balancer URL
    InternetFacing,
}

impl LoadBalancerScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::InternetFacing => "internet-facing",
        }
    }
}

impl FromStr for LoadBalancerScheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "internet-facing" | "internet_facing" => Ok(Self::InternetFacing),
            _ => Err(format!("Unknown load balancer scheme: {}", s)),
        }
    }
}

impl fmt::Display for LoadBalancerScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exposure of one API endpoint: its path and gateway type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub path: String,
    pub gateway_type: GatewayType,
}

impl EndpointDescriptor {
    pub fn new(path: impl Into<String>, gateway_type: GatewayType) -> Self {
        Self { path: path.into(), gateway_type }
    }

    /// Endpoint routed publicly through the gateway
    pub fn public(path: impl Into<String>) -> Self {
        Self::new(path, GatewayType::Public)
    }

    /// Endpoint kept off the gateway
    pub fn disabled(path: impl Into<String>) -> Self {
        Self::new(path, GatewayType::None)
    }

    pub fn is_exposed(&self) -> bool {
        self.gateway_type.is_enabled()
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.gateway_type)
    }
}
