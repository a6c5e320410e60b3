//! Reconciliation decision table
//!
//! Maps a previous and desired endpoint descriptor to the gateway work
//! needed to converge. Pure; no collaborator is consulted.

use crate::domain::{EndpointDescriptor, GatewayType};
use std::fmt;

/// Gateway work required to move from one endpoint descriptor to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcilePlan {
    /// Gateway already matches the desired state
    Noop,
    /// Expose a newly public endpoint
    Add(EndpointDescriptor),
    /// Withdraw an endpoint that is no longer public
    Remove(EndpointDescriptor),
    /// Move a public endpoint to a new path; `add` runs before `remove`
    Replace { add: EndpointDescriptor, remove: EndpointDescriptor },
}

impl ReconcilePlan {
    /// Decide what to do for `prev -> next`
    pub fn between(prev: &EndpointDescriptor, next: &EndpointDescriptor) -> Self {
        match (prev.gateway_type, next.gateway_type) {
            (GatewayType::None, GatewayType::None) => Self::Noop,
            (GatewayType::Public, GatewayType::None) => Self::Remove(prev.clone()),
            (GatewayType::None, GatewayType::Public) => Self::Add(next.clone()),
            (GatewayType::Public, GatewayType::Public) if prev.path == next.path => Self::Noop,
            (GatewayType::Public, GatewayType::Public) => {
                Self::Replace { add: next.clone(), remove: prev.clone() }
            }
        }
    }

    /// Short label used in logs and metrics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Replace { .. } => "replace",
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }
}

impl fmt::Display for ReconcilePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => write!(f, "noop"),
            Self::Add(e) => write!(f, "add {}", e.path),
            Self::Remove(e) => write!(f, "remove {}", e.path),
            Self::Replace { add, remove } => write!(f, "replace {} with {}", remove.path, add.path),
        }
    }
}
