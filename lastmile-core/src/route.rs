//! Route groups produced by the grouper and the priced candidates built
//! from them.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{ValidationError, ensure_identifier, ensure_non_negative};
use crate::{RouteMetrics, Stop};

/// An ordered, non-empty run of stops assigned to one vehicle.
///
/// Only the grouper builds these, so the invariants hold by construction:
/// at least one stop, and `total_load_kg` equals the running sum of the
/// member loads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RouteGroup {
    stops: Vec<Stop>,
    total_load_kg: f64,
}

impl RouteGroup {
    pub(crate) fn start(stop: Stop) -> Self {
        let total_load_kg = stop.load_kg();
        Self {
            stops: vec![stop],
            total_load_kg,
        }
    }

    pub(crate) fn push(&mut self, stop: Stop) {
        self.total_load_kg += stop.load_kg();
        self.stops.push(stop);
    }

    /// Stops in dispatch order.
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Consume the group, returning its stops.
    #[must_use]
    pub fn into_stops(self) -> Vec<Stop> {
        self.stops
    }

    /// Sum of member loads in kilograms.
    #[must_use]
    pub const fn total_load_kg(&self) -> f64 {
        self.total_load_kg
    }

    /// Number of stops on the route.
    #[must_use]
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route merges two or more stops.
    #[must_use]
    pub fn is_consolidated(&self) -> bool {
        self.num_stops() >= 2
    }
}

/// A route ready for pricing: stop count, load, measured metrics and the
/// consolidation flag.
///
/// The flag is caller-supplied. Grouped routes derive it from their stop
/// count, while pre-planned routes (for example the simulated dataset) may
/// carry an explicit `false` on a multi-stop route, in which case pricing
/// applies no consolidation discount.
///
/// # Examples
/// ```
/// use lastmile_core::{RouteCandidate, RouteMetrics};
///
/// # fn main() -> Result<(), lastmile_core::ValidationError> {
/// let metrics = RouteMetrics::new(118.0, 31.0)?;
/// let candidate = RouteCandidate::new("Route A3", 3, 406.25, metrics, true)?;
/// assert!(candidate.is_consolidated());
/// assert!(RouteCandidate::new("Route A4", 0, 0.0, metrics, false).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RouteCandidate {
    name: String,
    num_stops: usize,
    total_load_kg: f64,
    metrics: RouteMetrics,
    consolidated: bool,
}

impl RouteCandidate {
    /// Validate and construct a candidate.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when the name is blank, `num_stops` is
    /// zero or the load is negative or non-finite.
    pub fn new(
        name: impl Into<String>,
        num_stops: usize,
        total_load_kg: f64,
        metrics: RouteMetrics,
        consolidated: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        ensure_identifier("route_name", &name)?;
        if num_stops == 0 {
            return Err(ValidationError::EmptyRoute);
        }
        let total_load_kg = ensure_non_negative("total_load_kg", total_load_kg)?;
        Ok(Self {
            name,
            num_stops,
            total_load_kg,
            metrics,
            consolidated,
        })
    }

    /// Build a candidate from a grouped route, deriving the consolidation
    /// flag from its stop count.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyIdentifier`] when `name` is blank.
    pub fn from_group(
        name: impl Into<String>,
        group: &RouteGroup,
        metrics: RouteMetrics,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            group.num_stops(),
            group.total_load_kg(),
            metrics,
            group.is_consolidated(),
        )
    }

    /// Route label, e.g. `Route A1`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of delivery stops.
    #[must_use]
    pub const fn num_stops(&self) -> usize {
        self.num_stops
    }

    /// Total cargo weight in kilograms.
    #[must_use]
    pub const fn total_load_kg(&self) -> f64 {
        self.total_load_kg
    }

    /// Externally supplied distance and duration.
    #[must_use]
    pub const fn metrics(&self) -> RouteMetrics {
        self.metrics
    }

    /// Caller-supplied consolidation flag.
    #[must_use]
    pub const fn is_consolidated(&self) -> bool {
        self.consolidated
    }
}
