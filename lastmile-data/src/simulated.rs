//! Bundled demo dataset used when no order store or mapping service is
//! configured.
//!
//! Three zones carry three pre-planned routes each. The same figures back a
//! [`StaticDistanceTable`] keyed by demo route index. Grouped orders have no
//! relation to those demo routes, so offline live runs measure every route
//! with [`placeholder_distance_table`] instead.

use lastmile_core::{RouteCandidate, RouteMetrics, StaticDistanceTable, ValidationError};

/// Distance used for routes with no recorded figures.
pub const PLACEHOLDER_DISTANCE_KM: f64 = 140.0;
/// Duration used for routes with no recorded figures.
pub const PLACEHOLDER_DURATION_MIN: f64 = 38.0;

struct SimulatedRoute {
    name: &'static str,
    distance_km: f64,
    duration_min: f64,
    num_stops: usize,
    load_kg: f64,
    consolidated: bool,
}

const fn route(
    name: &'static str,
    distance_km: f64,
    duration_min: f64,
    num_stops: usize,
    load_kg: f64,
    consolidated: bool,
) -> SimulatedRoute {
    SimulatedRoute {
        name,
        distance_km,
        duration_min,
        num_stops,
        load_kg,
        consolidated,
    }
}

const ZONE_A_ROUTES: &[SimulatedRoute] = &[
    route("Route A1", 142.0, 38.0, 2, 205.50, false),
    route("Route A2", 158.0, 44.0, 2, 345.75, false),
    route("Route A3 (Consolidated)", 118.0, 31.0, 3, 406.25, true),
];

const ZONE_B_ROUTES: &[SimulatedRoute] = &[
    route("Route B1", 135.0, 36.0, 2, 475.50, false),
    route("Route B2", 149.0, 42.0, 2, 340.00, false),
    route("Route B3 (Consolidated)", 112.0, 29.0, 3, 610.00, true),
];

const ZONE_C_ROUTES: &[SimulatedRoute] = &[
    route("Route C1", 155.0, 40.0, 2, 275.00, false),
    route("Route C2", 163.0, 46.0, 2, 320.00, false),
    route("Route C3 (Consolidated)", 128.0, 34.0, 3, 505.00, true),
];

const ZONES: &[(&str, &[SimulatedRoute])] = &[
    ("ZONE_A", ZONE_A_ROUTES),
    ("ZONE_B", ZONE_B_ROUTES),
    ("ZONE_C", ZONE_C_ROUTES),
];

fn routes_for(zone_id: &str) -> &'static [SimulatedRoute] {
    ZONES
        .iter()
        .find(|(id, _)| *id == zone_id)
        .map_or(&[], |(_, routes)| *routes)
}

/// Pre-planned routes for `zone_id`; unknown zones have none.
///
/// # Errors
/// Never fails for the bundled figures; the `Result` carries the candidate
/// constructors' validation.
///
/// # Examples
/// ```
/// use lastmile_data::simulated::simulated_candidates;
///
/// # fn main() -> Result<(), lastmile_core::ValidationError> {
/// let routes = simulated_candidates("ZONE_A")?;
/// assert_eq!(routes.len(), 3);
/// assert!(simulated_candidates("ZONE_Z")?.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn simulated_candidates(zone_id: &str) -> Result<Vec<RouteCandidate>, ValidationError> {
    routes_for(zone_id)
        .iter()
        .map(|route| {
            let metrics = RouteMetrics::new(route.distance_km, route.duration_min)?;
            RouteCandidate::new(
                route.name,
                route.num_stops,
                route.load_kg,
                metrics,
                route.consolidated,
            )
        })
        .collect()
}

/// Distance table holding the bundled figures by zone and route index.
///
/// Only meaningful for the demo routes themselves: the index of a route
/// grouped from real orders says nothing about its length.
///
/// # Errors
/// Never fails for the bundled figures; the `Result` carries
/// [`RouteMetrics::new`]'s validation.
pub fn simulated_distance_table() -> Result<StaticDistanceTable, ValidationError> {
    let fallback = RouteMetrics::new(PLACEHOLDER_DISTANCE_KM, PLACEHOLDER_DURATION_MIN)?;
    ZONES.iter().try_fold(
        StaticDistanceTable::new().with_fallback(fallback),
        |table, (zone_id, routes)| {
            let metrics = routes
                .iter()
                .map(|route| RouteMetrics::new(route.distance_km, route.duration_min))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(table.with_zone(*zone_id, metrics))
        },
    )
}

/// Distance table that gives every route the placeholder figures.
///
/// Used to measure routes grouped from stored orders when no mapping
/// service is configured.
///
/// # Errors
/// Never fails for the bundled placeholder; the `Result` carries
/// [`RouteMetrics::new`]'s validation.
pub fn placeholder_distance_table() -> Result<StaticDistanceTable, ValidationError> {
    let fallback = RouteMetrics::new(PLACEHOLDER_DISTANCE_KM, PLACEHOLDER_DURATION_MIN)?;
    Ok(StaticDistanceTable::new().with_fallback(fallback))
}
