//! Zone optimizer wiring the order source, grouper, distance provider,
//! evaluator and aggregator together.
//!
//! Supports two entry points: [`ZoneOptimizer::optimize_zone`] plans routes
//! from live orders, while [`ZoneOptimizer::evaluate_candidates`] prices
//! routes that were planned elsewhere.

use log::{debug, info, warn};
#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

use crate::{
    DistanceError, DistanceProvider, FleetSummary, OrderSource, PricingConfig, RankedRoute,
    RouteCandidate, ValidationError, Zone, ZoneCatalog, ZoneSummary, dispatch_order, evaluate,
    group_stops,
};

/// Errors returned by [`ZoneOptimizer`].
///
/// Order-source failures never appear here: a zone whose orders cannot be
/// fetched is optimised as an empty zone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// Configuration or route data failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The distance provider could not measure a route.
    #[error("failed to measure {route} in zone {zone}: {source}")]
    Distance {
        /// Zone identifier.
        zone: String,
        /// Route label.
        route: String,
        /// Provider failure.
        #[source]
        source: DistanceError,
    },
}

/// Ranked routes and totals for one zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ZoneReport {
    /// Zone that was optimised.
    pub zone: Zone,
    /// Routes ranked by ascending final cost.
    pub routes: Vec<RankedRoute>,
    /// Zone totals.
    pub summary: ZoneSummary,
}

impl ZoneReport {
    /// Price, rank and summarise pre-built candidates for `zone`.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when the configuration is invalid.
    pub fn evaluate(
        zone: &Zone,
        candidates: &[RouteCandidate],
        config: &PricingConfig,
    ) -> Result<Self, ValidationError> {
        let routes = evaluate(candidates, zone.id(), config)?;
        let summary = ZoneSummary::new(zone.id(), zone.name(), &routes);
        Ok(Self {
            zone: zone.clone(),
            routes,
            summary,
        })
    }
}

/// Per-zone reports with fleet-wide totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FleetReport {
    /// Zone reports in catalogue order.
    pub zones: Vec<ZoneReport>,
    /// Totals summed from the zone summaries.
    pub summary: FleetSummary,
}

impl FleetReport {
    /// Assemble a fleet report, summing the zone summaries' totals.
    #[must_use]
    pub fn from_zones(zones: Vec<ZoneReport>) -> Self {
        let summaries: Vec<ZoneSummary> = zones.iter().map(|zone| zone.summary.clone()).collect();
        Self {
            summary: FleetSummary::from_zones(&summaries),
            zones,
        }
    }
}

/// Plans and prices delivery routes zone by zone.
///
/// The optimizer is generic over its collaborators: an order source and a
/// distance provider. Zones are independent, so callers may run several
/// optimizers in parallel.
///
/// # Examples
/// ```
/// use lastmile_core::{
///     OrderSource, OrderSourceError, RouteMetrics, StaticDistanceTable, Stop, Zone,
///     ZoneOptimizer,
/// };
///
/// struct TwoOrders;
///
/// impl OrderSource for TwoOrders {
///     fn fetch_orders(&self, _zone: &Zone) -> Result<Vec<Stop>, OrderSourceError> {
///         let stops = [("ORD-1", 400.0), ("ORD-2", 350.0)]
///             .into_iter()
///             .map(|(id, load)| Stop::new(id, load, 1))
///             .collect::<Result<Vec<_>, _>>();
///         stops.map_err(|source| OrderSourceError::InvalidRecord {
///             order_id: "ORD".into(),
///             source,
///         })
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = StaticDistanceTable::new().with_fallback(RouteMetrics::new(118.0, 31.0)?);
/// let optimizer = ZoneOptimizer::new(TwoOrders, table);
/// let report = optimizer.optimize_zone(&Zone::new("ZONE_A", "North")?)?;
///
/// assert_eq!(report.routes.len(), 1);
/// assert_eq!(report.routes[0].route_name, "Route A1");
/// assert_eq!(report.routes[0].cost.final_cost_usd, 82.96);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ZoneOptimizer<O, D>
where
    O: OrderSource,
    D: DistanceProvider,
{
    orders: O,
    distances: D,
    config: PricingConfig,
}

impl<O, D> ZoneOptimizer<O, D>
where
    O: OrderSource,
    D: DistanceProvider,
{
    /// Construct an optimizer using the default pricing configuration.
    pub fn new(orders: O, distances: D) -> Self {
        Self {
            orders,
            distances,
            config: PricingConfig::default(),
        }
    }

    /// Construct an optimizer with explicit pricing configuration.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when `config` is invalid.
    pub fn with_config(
        orders: O,
        distances: D,
        config: PricingConfig,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            orders,
            distances,
            config,
        })
    }

    /// Pricing configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Fetch, order, group and measure the routes for `zone`.
    ///
    /// Each route is named after the zone suffix and its position, and is
    /// flagged consolidated when it carries two or more stops.
    ///
    /// # Errors
    /// Returns [`OptimizeError::Distance`] when a route cannot be measured.
    pub fn plan_routes(&self, zone: &Zone) -> Result<Vec<RouteCandidate>, OptimizeError> {
        let mut stops = self.orders.fetch_orders(zone).unwrap_or_else(|err| {
            warn!("no orders available for zone {}: {err}", zone.id());
            Vec::new()
        });
        dispatch_order(&mut stops);
        debug!("zone {}: {} orders pending", zone.id(), stops.len());

        let groups = group_stops(stops, self.config.max_load_kg)?;
        debug!("zone {}: {} routes planned", zone.id(), groups.len());
        groups
            .iter()
            .enumerate()
            .map(|(index, group)| -> Result<RouteCandidate, OptimizeError> {
                let name = zone.route_name(index);
                let metrics = self
                    .distances
                    .measure(zone, index, group.stops())
                    .map_err(|source| OptimizeError::Distance {
                        zone: zone.id().to_owned(),
                        route: name.clone(),
                        source,
                    })?;
                Ok(RouteCandidate::from_group(name, group, metrics)?)
            })
            .collect()
    }

    /// Plan, price and rank the routes for one zone.
    ///
    /// # Errors
    /// See [`ZoneOptimizer::plan_routes`].
    pub fn optimize_zone(&self, zone: &Zone) -> Result<ZoneReport, OptimizeError> {
        info!("optimising zone {} ({})", zone.id(), zone.name());
        let candidates = self.plan_routes(zone)?;
        self.evaluate_candidates(zone, &candidates)
    }

    /// Price and rank routes that were planned elsewhere.
    ///
    /// # Errors
    /// Returns [`OptimizeError::Validation`] when the configuration is
    /// invalid.
    pub fn evaluate_candidates(
        &self,
        zone: &Zone,
        candidates: &[RouteCandidate],
    ) -> Result<ZoneReport, OptimizeError> {
        let report = ZoneReport::evaluate(zone, candidates, &self.config)?;
        let summary = &report.summary.summary;
        info!(
            "zone {}: {} routes, base ${:.2}, final ${:.2}, saved ${:.2} ({}%)",
            zone.id(),
            summary.num_routes,
            summary.total_base_cost,
            summary.total_final_cost,
            summary.total_savings,
            summary.avg_savings_pct
        );
        Ok(report)
    }

    /// Optimise every zone in catalogue order.
    ///
    /// # Errors
    /// Stops at the first zone that fails; see
    /// [`ZoneOptimizer::optimize_zone`].
    pub fn optimize_fleet(&self, catalog: &ZoneCatalog) -> Result<FleetReport, OptimizeError> {
        let zones = catalog
            .iter()
            .map(|zone| self.optimize_zone(zone))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FleetReport::from_zones(zones))
    }
}
