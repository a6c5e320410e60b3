use gateway_reconciler::{EndpointDescriptor, GatewayType, LoadBalancerScheme, ReconcilePlan};
use proptest::prelude::*;

use crate::support::harness;

fn scheme() -> impl Strategy<Value = LoadBalancerScheme> {
    prop_oneof![Just(LoadBalancerScheme::Internal), Just(LoadBalancerScheme::InternetFacing)]
}

fn gateway_type() -> impl Strategy<Value = GatewayType> {
    prop_oneof![Just(GatewayType::None), Just(GatewayType::Public)]
}

proptest! {
    #[test]
    fn disabled_endpoints_never_touch_the_gateway(
        prev_path in "/[a-z0-9/]{0,12}",
        next_path in "/[a-z0-9/]{0,12}",
        scheme in scheme(),
    ) {
        let h = harness(scheme);
        let prev = EndpointDescriptor::disabled(prev_path.clone());
        let next = EndpointDescriptor::disabled(next_path);

        tokio_test::block_on(async {
            h.reconciler.add(&prev).await.unwrap();
            h.reconciler.remove(&prev).await.unwrap();
            h.reconciler.update(&prev, &next).await.unwrap();
        });

        prop_assert!(h.log.calls().is_empty());
    }

    #[test]
    fn plan_only_replaces_on_public_path_change(
        prev_type in gateway_type(),
        next_type in gateway_type(),
        prev_path in "/[a-z]{1,4}",
        next_path in "/[a-z]{1,4}",
    ) {
        let prev = EndpointDescriptor::new(prev_path.clone(), prev_type);
        let next = EndpointDescriptor::new(next_path.clone(), next_type);

        let plan = ReconcilePlan::between(&prev, &next);
        let replaces = matches!(plan, ReconcilePlan::Replace { .. });
        prop_assert_eq!(
            replaces,
            prev_type == GatewayType::Public && next_type == GatewayType::Public && prev_path != next_path
        );
    }
}
