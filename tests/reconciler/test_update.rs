use gateway_reconciler::{EndpointDescriptor, LoadBalancerScheme, ReconcileError};

use crate::support::{harness, Call, LB_URL};

#[tokio::test]
async fn enabling_endpoint_creates_integration_and_route() {
    let h = harness(LoadBalancerScheme::InternetFacing);

    h.reconciler
        .update(&EndpointDescriptor::disabled("/a"), &EndpointDescriptor::public("/a"))
        .await
        .unwrap();

    assert_eq!(
        h.log.calls(),
        vec![
            Call::GetRoute("/a".to_string()),
            Call::LoadBalancerUrl,
            Call::CreateIntegration(format!("{}/a", LB_URL)),
            Call::CreateRoute { integration_id: "int-1".to_string(), path: "/a".to_string() },
        ]
    );
}

#[tokio::test]
async fn disabling_endpoint_deletes_route_then_integration() {
    let h = harness(LoadBalancerScheme::InternetFacing);
    h.gateway.insert_route("/a", Some("integrations/X"));

    h.reconciler
        .update(&EndpointDescriptor::public("/a"), &EndpointDescriptor::disabled("/a"))
        .await
        .unwrap();

    assert_eq!(
        h.log.calls(),
        vec![Call::DeleteRoute("/a".to_string()), Call::DeleteIntegration("X".to_string())]
    );
}

#[tokio::test]
async fn unchanged_public_endpoint_makes_no_calls() {
    let h = harness(LoadBalancerScheme::InternetFacing);
    h.gateway.insert_route("/a", Some("integrations/X"));

    h.reconciler
        .update(&EndpointDescriptor::public("/a"), &EndpointDescriptor::public("/a"))
        .await
        .unwrap();

    assert!(h.log.calls().is_empty());
}

#[tokio::test]
async fn disabled_to_disabled_makes_no_calls() {
    let h = harness(LoadBalancerScheme::Internal);

    h.reconciler
        .update(&EndpointDescriptor::disabled("/a"), &EndpointDescriptor::disabled("/b"))
        .await
        .unwrap();

    assert!(h.log.calls().is_empty());
}

#[tokio::test]
async fn path_change_adds_new_route_before_deleting_old() {
    let h = harness(LoadBalancerScheme::InternetFacing);
    h.gateway.insert_route("/a", Some("integrations/old"));

    h.reconciler
        .update(&EndpointDescriptor::public("/a"), &EndpointDescriptor::public("/b"))
        .await
        .unwrap();

    let calls = h.log.calls();
    let created = calls
        .iter()
        .position(|c| matches!(c, Call::CreateRoute { path, .. } if path == "/b"))
        .expect("route for /b should be created");
    let deleted = calls
        .iter()
        .position(|c| *c == Call::DeleteRoute("/a".to_string()))
        .expect("route for /a should be deleted");
    assert!(created < deleted);
    assert_eq!(calls.last(), Some(&Call::DeleteIntegration("old".to_string())));
    assert!(h.gateway.has_route("/b"));
    assert!(!h.gateway.has_route("/a"));
}

#[tokio::test]
async fn failed_add_keeps_previous_route() {
    let h = harness(LoadBalancerScheme::InternetFacing);
    h.gateway.insert_route("/a", Some("integrations/old"));
    h.gateway.fail_on("create_http_integration");

    let err = h
        .reconciler
        .update(&EndpointDescriptor::public("/a"), &EndpointDescriptor::public("/b"))
        .await
        .unwrap_err();

    assert!(matches!(err, ReconcileError::Gateway { .. }));
    assert_eq!(h.log.count(|c| matches!(c, Call::DeleteRoute(_))), 0);
    assert!(h.gateway.has_route("/a"));
}

#[tokio::test]
async fn path_change_under_internal_scheme_reuses_vpc_link() {
    let h = harness(LoadBalancerScheme::Internal);
    h.gateway.insert_route("/a", Some("integrations/vpclink-1"));

    h.reconciler
        .update(&EndpointDescriptor::public("/a"), &EndpointDescriptor::public("/b"))
        .await
        .unwrap();

    assert_eq!(
        h.log.calls(),
        vec![
            Call::GetRoute("/b".to_string()),
            Call::CreateRoute { integration_id: "vpclink-1".to_string(), path: "/b".to_string() },
            Call::DeleteRoute("/a".to_string()),
        ]
    );
}
