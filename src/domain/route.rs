//! Gateway route handles
//!
//! A route as reported back by the gateway control plane. Routes bound to an
//! integration carry a target of the form `integrations/<id>`.

use super::id::IntegrationId;
use serde::{Deserialize, Serialize};

/// Prefix the gateway puts in front of an integration id in a route target
pub const INTEGRATION_TARGET_PREFIX: &str = "integrations/";

/// A route on the gateway, identified by its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayRoute {
    /// Path the route matches
    pub path: String,
    /// Raw route target, if any
    pub target: Option<String>,
}

impl GatewayRoute {
    /// Route bound to the given integration
    pub fn bound_to(path: impl Into<String>, integration_id: &IntegrationId) -> Self {
        Self { path: path.into(), target: Some(route_target(integration_id)) }
    }

    /// The integration this route points at, read from its stored target.
    pub fn integration_id(&self) -> Option<IntegrationId> {
        let target = self.target.as_deref()?;
        let id = target.strip_prefix(INTEGRATION_TARGET_PREFIX).unwrap_or(target);
        if id.is_empty() {
            return None;
        }
        Some(IntegrationId::from(id))
    }
}

/// Build the route target that binds a route to an integration
pub fn route_target(integration_id: &IntegrationId) -> String {
    format!("{}{}", INTEGRATION_TARGET_PREFIX, integration_id)
}
