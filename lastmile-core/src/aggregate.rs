//! Zone and fleet savings summaries.
//!
//! Zone totals are summed from unrounded route costs and rounded once. The
//! fleet summary then adds up the *rounded* zone totals, so rounding at the
//! zone level carries into the fleet figures; they are never re-reduced from
//! raw routes.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::RankedRoute;
use crate::rounding::{percent_of, round_currency};

/// Totals over a set of ranked routes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RouteSummary {
    /// Number of routes summarised.
    pub num_routes: usize,
    /// Sum of base costs.
    pub total_base_cost: f64,
    /// Sum of final costs.
    pub total_final_cost: f64,
    /// `total_base_cost - total_final_cost`.
    pub total_savings: f64,
    /// Savings as a percentage of base cost; zero when base is zero.
    pub avg_savings_pct: f64,
}

impl RouteSummary {
    fn from_totals(num_routes: usize, base: f64, final_cost: f64) -> Self {
        let total_savings = round_currency(base - final_cost);
        Self {
            num_routes,
            total_base_cost: round_currency(base),
            total_final_cost: round_currency(final_cost),
            total_savings,
            avg_savings_pct: percent_of(total_savings, base),
        }
    }
}

/// Reduce ranked routes to a [`RouteSummary`].
///
/// An empty slice yields zero routes and zero totals.
///
/// # Examples
/// ```
/// use lastmile_core::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.num_routes, 0);
/// assert_eq!(summary.avg_savings_pct, 0.0);
/// ```
#[must_use]
pub fn summarize(routes: &[RankedRoute]) -> RouteSummary {
    let (base, final_cost) = routes.iter().fold((0.0, 0.0), |(base, final_cost), route| {
        (
            base + route.cost.base_cost_usd,
            final_cost + route.cost.final_cost_usd,
        )
    });
    RouteSummary::from_totals(routes.len(), base, final_cost)
}

/// Summary for one zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ZoneSummary {
    /// Zone identifier.
    pub zone_id: String,
    /// Human-readable zone name.
    pub zone_name: String,
    /// Route totals for the zone.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub summary: RouteSummary,
}

impl ZoneSummary {
    /// Summarise a zone's ranked routes.
    #[must_use]
    pub fn new(
        zone_id: impl Into<String>,
        zone_name: impl Into<String>,
        routes: &[RankedRoute],
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            zone_name: zone_name.into(),
            summary: summarize(routes),
        }
    }
}

/// Fleet-wide totals built from zone summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FleetSummary {
    /// Number of zones included.
    pub num_zones: usize,
    /// Totals across every zone.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub summary: RouteSummary,
}

impl FleetSummary {
    /// Add up the rounded zone totals.
    ///
    /// # Examples
    /// ```
    /// use lastmile_core::FleetSummary;
    ///
    /// let fleet = FleetSummary::from_zones(&[]);
    /// assert_eq!(fleet.num_zones, 0);
    /// assert_eq!(fleet.summary.total_savings, 0.0);
    /// ```
    #[must_use]
    pub fn from_zones(zones: &[ZoneSummary]) -> Self {
        let (routes, base, final_cost) =
            zones
                .iter()
                .fold((0, 0.0, 0.0), |(routes, base, final_cost), zone| {
                    (
                        routes + zone.summary.num_routes,
                        base + zone.summary.total_base_cost,
                        final_cost + zone.summary.total_final_cost,
                    )
                });
        Self {
            num_zones: zones.len(),
            summary: RouteSummary::from_totals(routes, base, final_cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CostBreakdown;
    use rstest::rstest;

    fn ranked(base: f64, final_cost: f64) -> RankedRoute {
        RankedRoute {
            rank: 1,
            zone_id: "ZONE_A".into(),
            route_name: "Route A1".into(),
            duration_min: 30.0,
            consolidated: false,
            cost: CostBreakdown {
                base_cost_usd: base,
                after_consolidation_usd: base,
                final_cost_usd: final_cost,
                total_savings_usd: base - final_cost,
                savings_pct: 0.0,
                distance_km: 0.0,
                num_stops: 1,
                total_load_kg: 0.0,
                load_utilization_pct: 0.0,
            },
        }
    }

    fn approx(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[rstest]
    fn empty_zone_has_zero_totals() {
        let summary = summarize(&[]);
        assert_eq!(summary, RouteSummary::default());
    }

    #[rstest]
    fn zone_totals_add_route_costs() {
        let summary = summarize(&[ranked(120.7, 120.7), ranked(134.3, 134.3), ranked(100.3, 82.96)]);
        assert_eq!(summary.num_routes, 3);
        approx(summary.total_base_cost, 355.3);
        approx(summary.total_final_cost, 337.96);
        approx(summary.total_savings, 17.34);
        approx(summary.avg_savings_pct, 4.9);
    }

    #[rstest]
    fn zero_base_cost_reports_zero_percentage() {
        let summary = summarize(&[ranked(0.0, 0.0)]);
        approx(summary.avg_savings_pct, 0.0);
    }

    #[rstest]
    fn fleet_sums_zone_totals() {
        let zones = [
            ZoneSummary::new("ZONE_A", "North", &[ranked(100.0, 90.0)]),
            ZoneSummary::new("ZONE_B", "Central", &[ranked(50.0, 50.0), ranked(25.0, 20.0)]),
            ZoneSummary::new("ZONE_C", "South", &[]),
        ];
        let fleet = FleetSummary::from_zones(&zones);
        assert_eq!(fleet.num_zones, 3);
        assert_eq!(fleet.summary.num_routes, 3);
        approx(fleet.summary.total_base_cost, 175.0);
        approx(fleet.summary.total_final_cost, 160.0);
        approx(fleet.summary.total_savings, 15.0);
        approx(fleet.summary.avg_savings_pct, 8.6);
    }
}
