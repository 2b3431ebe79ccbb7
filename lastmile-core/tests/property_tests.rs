//! Property-based tests for pricing, grouping and ranking.
//!
//! # Invariants tested
//!
//! - **Monotone discounts:** `final <= after_consolidation <= base`.
//! - **Lossless grouping:** concatenated routes reproduce the input stops.
//! - **Capacity:** every multi-stop route stays within capacity.
//! - **Stable ranking:** ranks are 1..n, costs ascend and ties keep input order.
//! - **Additivity:** zone savings equal base minus final to the cent.

use lastmile_core::{
    PricingConfig, RouteCandidate, RouteGroup, RouteMetrics, Stop, evaluate, group_stops, price,
    summarize,
};
use proptest::prelude::*;

const CAPACITY_KG: f64 = 1000.0;

fn stops_strategy() -> impl Strategy<Value = Vec<Stop>> {
    prop::collection::vec((0.0_f64..1400.0, 0_i32..5), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (load, priority))| {
                Stop::new(format!("ORD-{i}"), load, priority).expect("generated stop is valid")
            })
            .collect()
    })
}

fn candidates_strategy() -> impl Strategy<Value = Vec<RouteCandidate>> {
    prop::collection::vec(
        (0.0_f64..400.0, 1_usize..6, 0.0_f64..1200.0, any::<bool>()),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (distance, stops, load, consolidated))| {
                let metrics = RouteMetrics::new(distance, 30.0).expect("generated metrics");
                RouteCandidate::new(format!("Route A{}", i + 1), stops, load, metrics, consolidated)
                    .expect("generated candidate")
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Discounts never raise the cost.
    #[test]
    fn discounts_only_reduce_cost(
        distance in 0.0_f64..1000.0,
        num_stops in 0_usize..10,
        load in 0.0_f64..2000.0,
        consolidated in any::<bool>(),
    ) {
        let cost = price(distance, num_stops, load, consolidated, &PricingConfig::default())
            .expect("valid inputs");
        prop_assert!(cost.final_cost_usd <= cost.after_consolidation_usd);
        prop_assert!(cost.after_consolidation_usd <= cost.base_cost_usd);
        prop_assert!(cost.total_savings_usd >= 0.0);
        prop_assert!(cost.savings_pct >= 0.0);
    }

    /// The consolidation discount needs both the flag and two stops.
    #[test]
    fn consolidation_requires_flag_and_stops(
        distance in 1.0_f64..1000.0,
        num_stops in 0_usize..10,
        consolidated in any::<bool>(),
    ) {
        let cost = price(distance, num_stops, 0.0, consolidated, &PricingConfig::default())
            .expect("valid inputs");
        let discounted = cost.after_consolidation_usd < cost.base_cost_usd;
        prop_assert_eq!(discounted, consolidated && num_stops >= 2);
    }

    /// Grouping neither drops, duplicates nor reorders stops.
    #[test]
    fn grouping_is_lossless(stops in stops_strategy()) {
        let expected: Vec<String> = stops.iter().map(|s| s.order_id().to_owned()).collect();
        let routes = group_stops(stops, CAPACITY_KG).expect("valid capacity");
        let actual: Vec<String> = routes
            .iter()
            .flat_map(RouteGroup::stops)
            .map(|s| s.order_id().to_owned())
            .collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(routes.iter().all(|r| r.num_stops() > 0));
    }

    /// Only a lone over-capacity stop may exceed the vehicle limit.
    #[test]
    fn grouping_respects_capacity(stops in stops_strategy()) {
        let routes = group_stops(stops, CAPACITY_KG).expect("valid capacity");
        for route in &routes {
            let load: f64 = route.stops().iter().map(Stop::load_kg).sum();
            prop_assert!((load - route.total_load_kg()).abs() < 1e-6);
            prop_assert!(route.total_load_kg() <= CAPACITY_KG || route.num_stops() == 1);
        }
    }

    /// Ranks are dense, costs ascend and repeated runs agree.
    #[test]
    fn ranking_is_stable(candidates in candidates_strategy()) {
        let config = PricingConfig::default();
        let first = evaluate(&candidates, "ZONE_A", &config).expect("valid config");
        let second = evaluate(&candidates, "ZONE_A", &config).expect("valid config");
        prop_assert_eq!(&first, &second);

        for (position, pair) in first.windows(2).enumerate() {
            prop_assert!(pair[0].cost.final_cost_usd <= pair[1].cost.final_cost_usd);
            prop_assert_eq!(pair[0].rank, position + 1);
            if pair[0].cost.final_cost_usd == pair[1].cost.final_cost_usd {
                let index = |name: &str| candidates.iter().position(|c| c.name() == name);
                prop_assert!(index(&pair[0].route_name) < index(&pair[1].route_name));
            }
        }
    }

    /// Zone savings equal base minus final within a cent.
    #[test]
    fn zone_summary_is_additive(candidates in candidates_strategy()) {
        let ranked = evaluate(&candidates, "ZONE_A", &PricingConfig::default())
            .expect("valid config");
        let summary = summarize(&ranked);
        prop_assert_eq!(summary.num_routes, candidates.len());
        let difference = summary.total_base_cost - summary.total_final_cost;
        prop_assert!((difference - summary.total_savings).abs() <= 0.010_000_1);
    }
}
