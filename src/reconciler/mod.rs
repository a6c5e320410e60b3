//! Gateway reconciler
//!
//! Converges the API gateway with the desired exposure of one endpoint.
//! Calls against the gateway are issued strictly in sequence and every
//! failure is returned as-is: nothing is retried and nothing already applied
//! is rolled back. An integration created just before a failed route
//! creation stays in place for the next reconciliation or an operator.
//!
//! Concurrent reconciliations of the same path must be serialized by the
//! caller; the existence check in [`GatewayReconciler::add`] is not atomic.

pub mod plan;

pub use plan::ReconcilePlan;

use crate::config::GatewayConfig;
use crate::domain::{EndpointDescriptor, GatewayId, IntegrationId, LoadBalancerScheme};
use crate::errors::{ReconcileError, Result};
use crate::gateway::GatewayAdapter;
use crate::observability::MetricsRecorder;
use crate::resource::{resource_name, ResourceReader};
use crate::topology::Topology;
use crate::utils::join_url;
use kube::core::DynamicObject;
use std::sync::Arc;
use tracing::{debug, info, instrument, Instrument};

/// Reconciles gateway routes and integrations for deployed endpoints
#[derive(Clone)]
pub struct GatewayReconciler {
    gateway_id: GatewayId,
    scheme: LoadBalancerScheme,
    vpc_link_integration_id: Option<IntegrationId>,
    gateway: Arc<dyn GatewayAdapter>,
    topology: Arc<dyn Topology>,
    reader: Arc<dyn ResourceReader>,
    metrics: MetricsRecorder,
}

impl std::fmt::Debug for GatewayReconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayReconciler")
            .field("gateway_id", &self.gateway_id)
            .field("scheme", &self.scheme)
            .field("vpc_link_integration_id", &self.vpc_link_integration_id)
            .finish_non_exhaustive()
    }
}

impl GatewayReconciler {
    /// Build a reconciler from validated gateway configuration
    pub fn from_config(
        config: &GatewayConfig,
        gateway: Arc<dyn GatewayAdapter>,
        topology: Arc<dyn Topology>,
        reader: Arc<dyn ResourceReader>,
    ) -> Result<Self> {
        config.validate_custom()?;
        Ok(Self {
            gateway_id: config.gateway_id(),
            scheme: config.load_balancer_scheme,
            vpc_link_integration_id: config.vpc_link_integration_id(),
            gateway,
            topology,
            reader,
            metrics: MetricsRecorder::disabled(),
        })
    }

    /// Record gateway calls and reconciliation outcomes with `metrics`
    pub fn with_metrics(mut self, metrics: MetricsRecorder) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn gateway_id(&self) -> &GatewayId {
        &self.gateway_id
    }

    pub fn scheme(&self) -> LoadBalancerScheme {
        self.scheme
    }

    /// Expose `endpoint` through the gateway.
    ///
    /// Does nothing for disabled endpoints or when a route already exists at
    /// the endpoint's path.
    #[instrument(
        skip(self, endpoint),
        fields(gateway_id = %self.gateway_id, path = %endpoint.path)
    )]
    pub async fn add(&self, endpoint: &EndpointDescriptor) -> Result<()> {
        if !endpoint.is_exposed() {
            return Ok(());
        }

        let existing = self
            .observe("get_route", self.gateway.get_route(&self.gateway_id, &endpoint.path).await)?;
        if existing.is_some() {
            debug!("Route already exists, skipping creation");
            return Ok(());
        }

        let integration_id = match self.scheme {
            LoadBalancerScheme::Internal => {
                self.vpc_link_integration_id.clone().ok_or_else(|| {
                    ReconcileError::config(
                        "VPC link integration ID is required for internal load balancers",
                    )
                })?
            }
            LoadBalancerScheme::InternetFacing => {
                let load_balancer_url =
                    self.observe("load_balancer_url", self.topology.load_balancer_url().await)?;
                let target = join_url(&load_balancer_url, &endpoint.path);
                let integration_id = self.observe(
                    "create_http_integration",
                    self.gateway.create_http_integration(&self.gateway_id, &target).await,
                )?;
                info!(
                    integration_id = %integration_id,
                    target_url = %target,
                    "Created HTTP integration"
                );
                integration_id
            }
        };

        self.observe(
            "create_route",
            self.gateway.create_route(&self.gateway_id, &integration_id, &endpoint.path).await,
        )?;
        info!(integration_id = %integration_id, "Created gateway route");
        Ok(())
    }

    /// Withdraw `endpoint` from the gateway.
    ///
    /// Deleting a route that does not exist succeeds. Under an internet-facing
    /// load balancer the integration owned by the deleted route is deleted
    /// too; the shared VPC link used by internal routes is never touched.
    #[instrument(
        skip(self, endpoint),
        fields(gateway_id = %self.gateway_id, path = %endpoint.path)
    )]
    pub async fn remove(&self, endpoint: &EndpointDescriptor) -> Result<()> {
        if !endpoint.is_exposed() {
            return Ok(());
        }

        let deleted = self.observe(
            "delete_route",
            self.gateway.delete_route(&self.gateway_id, &endpoint.path).await,
        )?;
        let Some(route) = deleted else {
            debug!("No route to delete");
            return Ok(());
        };
        info!("Deleted gateway route");

        if self.scheme != LoadBalancerScheme::InternetFacing {
            return Ok(());
        }
        if let Some(integration_id) = route.integration_id() {
            self.observe(
                "delete_integration",
                self.gateway.delete_integration(&self.gateway_id, &integration_id).await,
            )?;
            info!(integration_id = %integration_id, "Deleted HTTP integration");
        }
        Ok(())
    }

    /// Converge the gateway from `prev` to `next`.
    ///
    /// On a path change the new route is created before the old one is
    /// deleted, so the endpoint stays reachable throughout. If the add fails
    /// the old route is left untouched.
    #[instrument(
        skip(self, prev, next),
        fields(gateway_id = %self.gateway_id, prev = %prev, next = %next)
    )]
    pub async fn update(&self, prev: &EndpointDescriptor, next: &EndpointDescriptor) -> Result<()> {
        let plan = ReconcilePlan::between(prev, next);
        debug!(plan = %plan, "Planned gateway reconciliation");

        let result = self.apply(&plan).await;
        self.metrics.record_reconcile(plan.name(), result.is_ok());
        result
    }

    /// Execute a plan produced by [`ReconcilePlan::between`]
    pub async fn apply(&self, plan: &ReconcilePlan) -> Result<()> {
        match plan {
            ReconcilePlan::Noop => Ok(()),
            ReconcilePlan::Add(next) => self.add(next).await,
            ReconcilePlan::Remove(prev) => self.remove(prev).await,
            ReconcilePlan::Replace { add, remove } => {
                self.add(add).await?;
                self.remove(remove).await
            }
        }
    }

    /// Withdraw the endpoint served by a deployed resource.
    ///
    /// `None` means the resource is not running, which needs no work. The
    /// removal is planned like any other update so it is counted the same way.
    pub async fn remove_from_resource(&self, resource: Option<&DynamicObject>) -> Result<()> {
        let Some(resource) = resource else {
            return Ok(());
        };

        let span = crate::reconcile_span!("remove", resource_name(resource));
        async {
            let prev = self.reader.descriptor(resource)?;
            let next = EndpointDescriptor::disabled(prev.path.clone());
            self.update(&prev, &next).await
        }
        .instrument(span)
        .await
    }

    /// Converge from the endpoint served by a deployed resource to `next`.
    ///
    /// A missing previous resource counts as a disabled endpoint at the
    /// desired path, so the call reduces to adding `next`.
    pub async fn update_from_resource(
        &self,
        prev: Option<&DynamicObject>,
        next: &EndpointDescriptor,
    ) -> Result<()> {
        let Some(resource) = prev else {
            let prev = EndpointDescriptor::disabled(next.path.clone());
            return self.update(&prev, next).await;
        };

        let span = crate::reconcile_span!("update", resource_name(resource));
        async {
            let prev = self.reader.descriptor(resource)?;
            self.update(&prev, next).await
        }
        .instrument(span)
        .await
    }

    fn observe<T>(&self, operation: &str, result: Result<T>) -> Result<T> {
        self.metrics.record_gateway_operation(operation, result.is_ok());
        result
    }
}
