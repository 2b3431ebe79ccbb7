//! Distance-provider trait and the metrics it returns.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{ValidationError, ensure_non_negative};
use crate::{Stop, Zone};

use super::error::DistanceError;

/// Driving distance and duration for one route.
///
/// # Examples
/// ```
/// use lastmile_core::RouteMetrics;
///
/// # fn main() -> Result<(), lastmile_core::ValidationError> {
/// let metrics = RouteMetrics::new(118.0, 31.0)?;
/// assert_eq!(metrics.distance_km(), 118.0);
/// assert!(RouteMetrics::new(-1.0, 31.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RouteMetrics {
    distance_km: f64,
    duration_min: f64,
}

impl RouteMetrics {
    /// Validate and construct route metrics.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when either figure is negative or
    /// non-finite.
    pub fn new(distance_km: f64, duration_min: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            distance_km: ensure_non_negative("distance_km", distance_km)?,
            duration_min: ensure_non_negative("duration_min", duration_min)?,
        })
    }

    /// Total route distance in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Total route duration in minutes.
    #[must_use]
    pub const fn duration_min(&self) -> f64 {
        self.duration_min
    }
}

/// Supply distance and duration for a grouped route.
///
/// `route_index` is the 0-based position of the route among those planned
/// for `zone`; table-backed providers key on it, live providers ignore it.
/// `stops` is non-empty and in dispatch order.
///
/// # Examples
///
/// ```rust
/// use lastmile_core::{DistanceError, DistanceProvider, RouteMetrics, Stop, Zone};
///
/// struct PerStop;
///
/// impl DistanceProvider for PerStop {
///     fn measure(
///         &self,
///         _zone: &Zone,
///         _route_index: usize,
///         stops: &[Stop],
///     ) -> Result<RouteMetrics, DistanceError> {
///         if stops.is_empty() {
///             return Err(DistanceError::EmptyRoute);
///         }
///         let count = u32::try_from(stops.len()).unwrap_or(u32::MAX);
///         Ok(RouteMetrics::new(f64::from(count) * 10.0, f64::from(count) * 4.0)?)
///     }
/// }
///
/// let zone = Zone::new("ZONE_A", "North")?;
/// let stop = Stop::new("ORD-1", 50.0, 1)?;
/// let metrics = PerStop.measure(&zone, 0, &[stop])?;
/// assert_eq!(metrics.distance_km(), 10.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait DistanceProvider {
    /// Measure the route formed by `stops`.
    ///
    /// Implementations must return `Err(DistanceError::EmptyRoute)` when
    /// `stops` is empty.
    fn measure(
        &self,
        zone: &Zone,
        route_index: usize,
        stops: &[Stop],
    ) -> Result<RouteMetrics, DistanceError>;
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for Box<T> {
    fn measure(
        &self,
        zone: &Zone,
        route_index: usize,
        stops: &[Stop],
    ) -> Result<RouteMetrics, DistanceError> {
        (**self).measure(zone, route_index, stops)
    }
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for &T {
    fn measure(
        &self,
        zone: &Zone,
        route_index: usize,
        stops: &[Stop],
    ) -> Result<RouteMetrics, DistanceError> {
        (**self).measure(zone, route_index, stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::FixedDistanceProvider;

    #[rstest]
    fn boxed_providers_delegate() {
        let metrics = RouteMetrics::new(12.0, 3.0).expect("valid metrics");
        let provider: Box<dyn DistanceProvider> = Box::new(FixedDistanceProvider::new(metrics));
        let zone = Zone::new("ZONE_A", "North").expect("valid zone");
        let stop = Stop::new("ORD-1", 1.0, 0).expect("valid stop");
        assert_eq!(provider.measure(&zone, 0, &[stop]), Ok(metrics));
    }

    #[rstest]
    fn empty_routes_are_rejected() {
        let metrics = RouteMetrics::new(12.0, 3.0).expect("valid metrics");
        let zone = Zone::new("ZONE_A", "North").expect("valid zone");
        let err = FixedDistanceProvider::new(metrics)
            .measure(&zone, 0, &[])
            .expect_err("empty route");
        assert_eq!(err, DistanceError::EmptyRoute);
    }

    #[rstest]
    #[case(f64::NAN, 1.0)]
    #[case(1.0, -3.0)]
    fn metrics_reject_invalid_figures(#[case] distance: f64, #[case] duration: f64) {
        assert!(RouteMetrics::new(distance, duration).is_err());
    }
}
