//! Test utilities for distance providers.
//!
//! [`StubDistanceProvider`] is a deterministic stand-in for
//! [`HttpDistanceProvider`](super::HttpDistanceProvider) that returns
//! pre-configured responses without making HTTP requests.

use lastmile_core::{DistanceError, DistanceProvider, RouteMetrics, Stop, Zone};

/// Stub `DistanceProvider` for testing.
///
/// Returns scripted metrics by route index, or the same error for every
/// route.
///
/// # Example
///
/// ```
/// use lastmile_core::{DistanceProvider, RouteMetrics, Stop, Zone};
/// use lastmile_data::routing::test_support::StubDistanceProvider;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = StubDistanceProvider::with_routes(vec![
///     RouteMetrics::new(12.5, 20.0)?,
///     RouteMetrics::new(30.0, 41.5)?,
/// ]);
/// let zone = Zone::new("ZONE_A", "North")?;
/// let stop = Stop::new("ORD-1", 10.0, 1)?;
///
/// assert_eq!(provider.measure(&zone, 1, &[stop])?.distance_km(), 30.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StubDistanceProvider {
    response: StubResponse,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Routes(Vec<RouteMetrics>),
    Error(DistanceError),
}

impl StubDistanceProvider {
    /// Return `routes[route_index]`; indices past the end are unknown routes.
    #[must_use]
    pub fn with_routes(routes: Vec<RouteMetrics>) -> Self {
        Self {
            response: StubResponse::Routes(routes),
        }
    }

    /// Return `error` for every non-empty route.
    ///
    /// Empty input still returns `DistanceError::EmptyRoute`.
    #[must_use]
    pub fn with_error(error: DistanceError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }
}

impl DistanceProvider for StubDistanceProvider {
    fn measure(
        &self,
        zone: &Zone,
        route_index: usize,
        stops: &[Stop],
    ) -> Result<RouteMetrics, DistanceError> {
        if stops.is_empty() {
            return Err(DistanceError::EmptyRoute);
        }

        match &self.response {
            StubResponse::Routes(routes) => {
                routes
                    .get(route_index)
                    .copied()
                    .ok_or_else(|| DistanceError::UnknownRoute {
                        zone: zone.id().to_owned(),
                        index: route_index,
                    })
            }
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
