//! Price and rank the candidate routes of one zone.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::pricing::price_candidate;
use crate::{CostBreakdown, PricingConfig, RouteCandidate, ValidationError};

/// A priced route with its 1-based rank inside its zone.
///
/// Rank 1 is the cheapest route by final cost. Serialised records flatten
/// the cost breakdown next to the route metadata, which is the row shape
/// reporting sinks expect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RankedRoute {
    /// 1-based position by ascending final cost.
    pub rank: usize,
    /// Zone the route belongs to.
    pub zone_id: String,
    /// Route label.
    pub route_name: String,
    /// Estimated driving time in minutes.
    pub duration_min: f64,
    /// Consolidation flag carried by the candidate.
    pub consolidated: bool,
    /// Pricing result.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub cost: CostBreakdown,
}

/// Price every candidate and rank them by ascending final cost.
///
/// The sort is stable: routes with equal final cost keep their input order,
/// so repeated runs over the same candidates always yield the same ranks.
///
/// # Errors
/// Returns [`ValidationError`] when the configuration is invalid.
///
/// # Examples
/// ```
/// use lastmile_core::{PricingConfig, RouteCandidate, RouteMetrics, evaluate};
///
/// # fn main() -> Result<(), lastmile_core::ValidationError> {
/// let candidates = vec![
///     RouteCandidate::new("Route A1", 2, 205.5, RouteMetrics::new(142.0, 38.0)?, false)?,
///     RouteCandidate::new("Route A3", 3, 406.25, RouteMetrics::new(118.0, 31.0)?, true)?,
/// ];
/// let ranked = evaluate(&candidates, "ZONE_A", &PricingConfig::default())?;
/// assert_eq!(ranked[0].route_name, "Route A3");
/// assert_eq!(ranked[0].rank, 1);
/// # Ok(())
/// # }
/// ```
pub fn evaluate(
    candidates: &[RouteCandidate],
    zone_id: &str,
    config: &PricingConfig,
) -> Result<Vec<RankedRoute>, ValidationError> {
    let mut ranked = candidates
        .iter()
        .map(|candidate| {
            price_candidate(candidate, config).map(|cost| RankedRoute {
                rank: 0,
                zone_id: zone_id.to_owned(),
                route_name: candidate.name().to_owned(),
                duration_min: candidate.metrics().duration_min(),
                consolidated: candidate.is_consolidated(),
                cost,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|a, b| a.cost.final_cost_usd.total_cmp(&b.cost.final_cost_usd));
    for (position, route) in ranked.iter_mut().enumerate() {
        route.rank = position + 1;
    }
    Ok(ranked)
}
