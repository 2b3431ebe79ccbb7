//! Behavioural tests for `ZoneOptimizer` driven by `rstest-bdd`.

use std::cell::RefCell;

use lastmile_core::{
    OrderSource, OrderSourceError, RouteMetrics, StaticDistanceTable, Stop, Zone, ZoneOptimizer,
    ZoneReport,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Orders for a single zone, or a simulated outage.
#[derive(Debug, Default)]
struct ScriptedOrders {
    loads: Vec<f64>,
    offline: bool,
}

impl OrderSource for ScriptedOrders {
    fn fetch_orders(&self, _zone: &Zone) -> Result<Vec<Stop>, OrderSourceError> {
        if self.offline {
            return Err(OrderSourceError::Unavailable {
                message: "connection refused".into(),
            });
        }
        self.loads
            .iter()
            .enumerate()
            .map(|(i, &load)| {
                let order_id = format!("ORD-{i}");
                Stop::new(order_id.clone(), load, 1)
                    .map_err(|source| OrderSourceError::InvalidRecord { order_id, source })
            })
            .collect()
    }
}

#[fixture]
fn orders() -> RefCell<ScriptedOrders> {
    RefCell::new(ScriptedOrders::default())
}

#[fixture]
fn distances() -> RefCell<StaticDistanceTable> {
    RefCell::new(StaticDistanceTable::new())
}

#[fixture]
fn report() -> RefCell<Option<ZoneReport>> {
    RefCell::new(None)
}

fn set_loads(orders: &RefCell<ScriptedOrders>, loads: &[f64]) {
    orders.borrow_mut().loads = loads.to_vec();
}

fn with_report<R>(report: &RefCell<Option<ZoneReport>>, check: impl FnOnce(&ZoneReport) -> R) -> R {
    let report = report.borrow();
    let report = report.as_ref().expect("zone optimised");
    check(report)
}

#[given("a zone with orders weighing 400 and 350 kilograms")]
fn light_orders(#[from(orders)] orders: &RefCell<ScriptedOrders>) {
    set_loads(orders, &[400.0, 350.0]);
}

#[given("a zone with orders weighing 700 and 650 kilograms")]
fn heavy_orders(#[from(orders)] orders: &RefCell<ScriptedOrders>) {
    set_loads(orders, &[700.0, 650.0]);
}

#[given("a zone with orders weighing 1200 and 100 kilograms")]
fn overweight_orders(#[from(orders)] orders: &RefCell<ScriptedOrders>) {
    set_loads(orders, &[1200.0, 100.0]);
}

#[given("a zone whose order source is offline")]
fn offline_orders(#[from(orders)] orders: &RefCell<ScriptedOrders>) {
    orders.borrow_mut().offline = true;
}

#[given("every route measures 118 km")]
fn fixed_distance(#[from(distances)] distances: &RefCell<StaticDistanceTable>) {
    let metrics = RouteMetrics::new(118.0, 31.0).expect("valid metrics");
    distances.replace_with(|table| table.clone().with_fallback(metrics));
}

#[when("I optimise the zone")]
fn optimise(
    #[from(orders)] orders: &RefCell<ScriptedOrders>,
    #[from(distances)] distances: &RefCell<StaticDistanceTable>,
    #[from(report)] report: &RefCell<Option<ZoneReport>>,
) {
    let orders = orders.borrow();
    let distances = distances.borrow();
    let optimizer = ZoneOptimizer::new(&*orders, &*distances);
    let zone = Zone::new("ZONE_A", "North Distribution Zone").expect("valid zone");
    let result = optimizer.optimize_zone(&zone).expect("zone optimised");
    report.replace(Some(result));
}

#[then("the zone has 0 routes")]
fn no_routes(#[from(report)] report: &RefCell<Option<ZoneReport>>) {
    with_report(report, |r| assert!(r.routes.is_empty()));
}

#[then("the zone has 1 route")]
fn one_route(#[from(report)] report: &RefCell<Option<ZoneReport>>) {
    with_report(report, |r| assert_eq!(r.routes.len(), 1));
}

#[then("the zone has 2 routes")]
fn two_routes(#[from(report)] report: &RefCell<Option<ZoneReport>>) {
    with_report(report, |r| assert_eq!(r.routes.len(), 2));
}

#[then("the cheapest route costs 82.96")]
fn cheapest_cost(#[from(report)] report: &RefCell<Option<ZoneReport>>) {
    with_report(report, |r| {
        let cheapest = r.routes.first().expect("at least one route");
        assert_eq!(cheapest.rank, 1);
        assert!((cheapest.cost.final_cost_usd - 82.96).abs() < 1e-9);
    });
}

#[then("no route is consolidated")]
fn none_consolidated(#[from(report)] report: &RefCell<Option<ZoneReport>>) {
    with_report(report, |r| assert!(r.routes.iter().all(|route| !route.consolidated)));
}

#[then("the zone savings are 0")]
fn zero_savings(#[from(report)] report: &RefCell<Option<ZoneReport>>) {
    with_report(report, |r| {
        assert_eq!(r.summary.summary.num_routes, 0);
        assert!(r.summary.summary.total_savings.abs() < f64::EPSILON);
        assert!(r.summary.summary.avg_savings_pct.abs() < f64::EPSILON);
    });
}

#[then("the first planned route is 120 percent loaded")]
fn overloaded_route(#[from(report)] report: &RefCell<Option<ZoneReport>>) {
    with_report(report, |r| {
        let first = r
            .routes
            .iter()
            .find(|route| route.route_name == "Route A1")
            .expect("first route present");
        assert!((first.cost.load_utilization_pct - 120.0).abs() < 1e-9);
        assert_eq!(first.cost.num_stops, 1);
    });
}

// Scenario parameters register the fixtures the steps borrow by name; the
// bodies only keep them alive for the scenario run.
#[scenario(path = "tests/features/zone_optimizer.feature", index = 0)]
fn light_orders_consolidate(
    orders: RefCell<ScriptedOrders>,
    distances: RefCell<StaticDistanceTable>,
    report: RefCell<Option<ZoneReport>>,
) {
    let _ = (orders, distances, report);
}

#[scenario(path = "tests/features/zone_optimizer.feature", index = 1)]
fn heavy_orders_split(
    orders: RefCell<ScriptedOrders>,
    distances: RefCell<StaticDistanceTable>,
    report: RefCell<Option<ZoneReport>>,
) {
    let _ = (orders, distances, report);
}

#[scenario(path = "tests/features/zone_optimizer.feature", index = 2)]
fn offline_source_is_empty(
    orders: RefCell<ScriptedOrders>,
    distances: RefCell<StaticDistanceTable>,
    report: RefCell<Option<ZoneReport>>,
) {
    let _ = (orders, distances, report);
}

#[scenario(path = "tests/features/zone_optimizer.feature", index = 3)]
fn overweight_order_is_kept(
    orders: RefCell<ScriptedOrders>,
    distances: RefCell<StaticDistanceTable>,
    report: RefCell<Option<ZoneReport>>,
) {
    let _ = (orders, distances, report);
}
