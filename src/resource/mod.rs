//! Deployed resource translation
//!
//! Recovers the endpoint descriptor currently in effect from a deployed
//! Kubernetes resource. The mapping is pure: it reads annotations and the
//! resource spec, and fails with a metadata error when either is malformed.

use crate::domain::{EndpointDescriptor, GatewayType};
use crate::errors::{ReconcileError, Result};
use kube::core::DynamicObject;
use serde_json::Value;
use std::collections::BTreeSet;

/// Annotation keys read from deployed resources
pub mod annotations {
    /// Gateway type of the API served by the resource (`public` or `none`)
    pub const API_GATEWAY: &str = "networking.gateway-reconciler.io/api-gateway";
}

/// Reads endpoint metadata from a deployed resource
pub trait ResourceReader: Send + Sync {
    /// Gateway type and endpoint path recorded on the resource
    fn gateway_type_and_path(&self, resource: &DynamicObject) -> Result<(GatewayType, String)>;

    /// Endpoint descriptor recorded on the resource
    fn descriptor(&self, resource: &DynamicObject) -> Result<EndpointDescriptor> {
        let (gateway_type, path) = self.gateway_type_and_path(resource)?;
        Ok(EndpointDescriptor::new(path, gateway_type))
    }
}

/// Reader for Istio `VirtualService` objects
///
/// The gateway type comes from the [`annotations::API_GATEWAY`] annotation and
/// the path from the `exact` or `prefix` URI matchers under `spec.http`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualServiceReader;

impl VirtualServiceReader {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceReader for VirtualServiceReader {
    fn gateway_type_and_path(&self, resource: &DynamicObject) -> Result<(GatewayType, String)> {
        let gateway_type = gateway_type_from_annotations(resource)?;
        let path = endpoint_from_virtual_service(resource)?;
        Ok((gateway_type, path))
    }
}

/// Name of the resource for logging, `<unnamed>` when absent
pub fn resource_name(resource: &DynamicObject) -> String {
    resource.metadata.name.clone().unwrap_or_else(|| "<unnamed>".to_string())
}

/// Read the gateway type annotation
pub fn gateway_type_from_annotations(resource: &DynamicObject) -> Result<GatewayType> {
    let raw = resource
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(annotations::API_GATEWAY))
        .ok_or_else(|| {
            ReconcileError::metadata(
                annotations::API_GATEWAY,
                format!("annotation is missing on '{}'", resource_name(resource)),
            )
        })?;

    raw.parse().map_err(|e: String| ReconcileError::metadata(annotations::API_GATEWAY, e))
}

/// Read the single endpoint path routed by a virtual service
pub fn endpoint_from_virtual_service(resource: &DynamicObject) -> Result<String> {
    let endpoints = virtual_service_endpoints(resource)?;
    if endpoints.len() != 1 {
        return Err(ReconcileError::metadata(
            "spec.http",
            format!(
                "expected exactly one endpoint on '{}', found {}",
                resource_name(resource),
                endpoints.len()
            ),
        ));
    }
    endpoints
        .into_iter()
        .next()
        .ok_or_else(|| ReconcileError::metadata("spec.http", "no endpoint found"))
}

fn virtual_service_endpoints(resource: &DynamicObject) -> Result<BTreeSet<String>> {
    let http = resource
        .data
        .get("spec")
        .and_then(|spec| spec.get("http"))
        .and_then(Value::as_array)
        .ok_or_else(|| ReconcileError::metadata("spec.http", "expected a list of HTTP routes"))?;

    let mut endpoints = BTreeSet::new();
    for route in http {
        let Some(matches) = route.get("match").and_then(Value::as_array) else {
            continue;
        };
        for matcher in matches {
            let Some(uri) = matcher.get("uri") else {
                continue;
            };
            for kind in ["exact", "prefix"] {
                if let Some(path) = uri.get(kind).and_then(Value::as_str) {
                    endpoints.insert(path.to_string());
                }
            }
        }
    }
    Ok(endpoints)
}
