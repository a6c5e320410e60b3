//! Recording collaborators for reconciler tests
//!
//! Every collaborator call is appended to one shared log so tests can assert
//! on the exact order of gateway and topology calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gateway_reconciler::{
    GatewayAdapter, GatewayConfig, GatewayId, GatewayReconciler, GatewayRoute, IntegrationId,
    LoadBalancerScheme, ReconcileError, Result, Topology, VirtualServiceReader,
};
use kube::core::DynamicObject;
use serde_json::json;

pub const GATEWAY_ID: &str = "gw-test";
pub const VPC_LINK: &str = "vpclink-1";
pub const LB_URL: &str = "http://lb.example.com";

/// One observed collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetRoute(String),
    CreateRoute { integration_id: String, path: String },
    DeleteRoute(String),
    CreateIntegration(String),
    DeleteIntegration(String),
    LoadBalancerUrl,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|&c| pred(c)).count()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Gateway adapter that records calls and keeps routes in a map
pub struct RecordingGateway {
    log: CallLog,
    routes: Mutex<HashMap<String, GatewayRoute>>,
    fail_on: Mutex<Option<&'static str>>,
    next_integration: AtomicUsize,
}

impl RecordingGateway {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            routes: Mutex::new(HashMap::new()),
            fail_on: Mutex::new(None),
            next_integration: AtomicUsize::new(1),
        }
    }

    /// Seed an existing route
    pub fn insert_route(&self, path: &str, target: Option<&str>) {
        self.routes.lock().unwrap().insert(
            path.to_string(),
            GatewayRoute { path: path.to_string(), target: target.map(str::to_string) },
        );
    }

    pub fn has_route(&self, path: &str) -> bool {
        self.routes.lock().unwrap().contains_key(path)
    }

    /// Make every call to `operation` fail
    pub fn fail_on(&self, operation: &'static str) {
        *self.fail_on.lock().unwrap() = Some(operation);
    }

    fn check(&self, operation: &str) -> Result<()> {
        if *self.fail_on.lock().unwrap() == Some(operation) {
            return Err(ReconcileError::gateway(operation, GATEWAY_ID, "injected failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl GatewayAdapter for RecordingGateway {
    async fn get_route(&self, _gateway_id: &GatewayId, path: &str) -> Result<Option<GatewayRoute>> {
        self.log.push(Call::GetRoute(path.to_string()));
        self.check("get_route")?;
        Ok(self.routes.lock().unwrap().get(path).cloned())
    }

    async fn create_route(
        &self,
        _gateway_id: &GatewayId,
        integration_id: &IntegrationId,
        path: &str,
    ) -> Result<()> {
        self.log.push(Call::CreateRoute {
            integration_id: integration_id.to_string(),
            path: path.to_string(),
        });
        self.check("create_route")?;
        self.insert_route(path, Some(&format!("integrations/{}", integration_id)));
        Ok(())
    }

    async fn delete_route(
        &self,
        _gateway_id: &GatewayId,
        path: &str,
    ) -> Result<Option<GatewayRoute>> {
        self.log.push(Call::DeleteRoute(path.to_string()));
        self.check("delete_route")?;
        Ok(self.routes.lock().unwrap().remove(path))
    }

    async fn create_http_integration(
        &self,
        _gateway_id: &GatewayId,
        target_url: &str,
    ) -> Result<IntegrationId> {
        self.log.push(Call::CreateIntegration(target_url.to_string()));
        self.check("create_http_integration")?;
        let n = self.next_integration.fetch_add(1, Ordering::SeqCst);
        Ok(IntegrationId::from(format!("int-{}", n)))
    }

    async fn delete_integration(
        &self,
        _gateway_id: &GatewayId,
        integration_id: &IntegrationId,
    ) -> Result<()> {
        self.log.push(Call::DeleteIntegration(integration_id.to_string()));
        self.check("delete_integration")
    }
}

/// Topology that records lookups of the load balancer URL
pub struct RecordingTopology {
    log: CallLog,
}

#[async_trait]
impl Topology for RecordingTopology {
    async fn load_balancer_url(&self) -> Result<String> {
        self.log.push(Call::LoadBalancerUrl);
        Ok(LB_URL.to_string())
    }
}

pub struct Harness {
    pub reconciler: GatewayReconciler,
    pub gateway: Arc<RecordingGateway>,
    pub log: CallLog,
}

pub fn harness(scheme: LoadBalancerScheme) -> Harness {
    let log = CallLog::default();
    let gateway = Arc::new(RecordingGateway::new(log.clone()));
    let config = GatewayConfig {
        gateway_id: GATEWAY_ID.to_string(),
        load_balancer_scheme: scheme,
        vpc_link_integration_id: Some(VPC_LINK.to_string()),
        load_balancer_url: None,
    };
    let reconciler = GatewayReconciler::from_config(
        &config,
        gateway.clone(),
        Arc::new(RecordingTopology { log: log.clone() }),
        Arc::new(VirtualServiceReader::new()),
    )
    .expect("valid test configuration");

    Harness { reconciler, gateway, log }
}

/// Deployed virtual service exposing `path` with the given gateway annotation
pub fn virtual_service(gateway_type: &str, path: &str) -> DynamicObject {
    serde_json::from_value(json!({
        "apiVersion": "networking.istio.io/v1beta1",
        "kind": "VirtualService",
        "metadata": {
            "name": "iris-classifier",
            "namespace": "default",
            "annotations": { (gateway_reconciler::resource::annotations::API_GATEWAY): gateway_type }
        },
        "spec": {
            "hosts": ["*"],
            "http": [{
                "match": [{ "uri": { "exact": path } }],
                "route": [{ "destination": { "host": "iris-classifier", "port": { "number": 8888 } } }]
            }]
        }
    }))
    .expect("valid virtual service")
}
