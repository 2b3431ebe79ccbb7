//! Distance provider backed by a fixed per-zone table.

use std::collections::HashMap;

use crate::{Stop, Zone};

use super::{DistanceError, DistanceProvider, RouteMetrics};

/// Static distances keyed by zone id and route index.
///
/// Used for demos, tests and offline runs where no mapping service is
/// available. Routes beyond the recorded entries fall back to the optional
/// `fallback` metrics.
///
/// # Examples
/// ```
/// use lastmile_core::{DistanceProvider, RouteMetrics, StaticDistanceTable, Stop, Zone};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = StaticDistanceTable::new()
///     .with_zone("ZONE_A", vec![RouteMetrics::new(142.0, 38.0)?])
///     .with_fallback(RouteMetrics::new(140.0, 38.0)?);
/// let zone = Zone::new("ZONE_A", "North")?;
/// let stop = Stop::new("ORD-1", 10.0, 1)?;
///
/// assert_eq!(table.measure(&zone, 0, &[stop.clone()])?.distance_km(), 142.0);
/// assert_eq!(table.measure(&zone, 5, &[stop])?.distance_km(), 140.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDistanceTable {
    routes: HashMap<String, Vec<RouteMetrics>>,
    fallback: Option<RouteMetrics>,
}

impl StaticDistanceTable {
    /// Construct an empty table without a fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record metrics for the routes of `zone_id`, in route order.
    #[must_use]
    pub fn with_zone(mut self, zone_id: impl Into<String>, metrics: Vec<RouteMetrics>) -> Self {
        self.routes.insert(zone_id.into(), metrics);
        self
    }

    /// Metrics returned for routes with no recorded entry.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: RouteMetrics) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Look up the metrics for a route, applying the fallback.
    #[must_use]
    pub fn lookup(&self, zone_id: &str, route_index: usize) -> Option<RouteMetrics> {
        self.routes
            .get(zone_id)
            .and_then(|routes| routes.get(route_index))
            .copied()
            .or(self.fallback)
    }
}

impl DistanceProvider for StaticDistanceTable {
    fn measure(
        &self,
        zone: &Zone,
        route_index: usize,
        stops: &[Stop],
    ) -> Result<RouteMetrics, DistanceError> {
        if stops.is_empty() {
            return Err(DistanceError::EmptyRoute);
        }
        self.lookup(zone.id(), route_index)
            .ok_or_else(|| DistanceError::UnknownRoute {
                zone: zone.id().to_owned(),
                index: route_index,
            })
    }
}
