//! In-memory collaborators for unit and behaviour tests.

use std::collections::HashMap;

use crate::{
    DistanceError, DistanceProvider, OrderSource, OrderSourceError, RouteMetrics, Stop, Zone,
};

/// In-memory [`OrderSource`] keyed by zone id.
///
/// Zones without recorded orders return an empty list. A failing source
/// returns [`OrderSourceError::Unavailable`] for every zone.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderSource {
    orders: HashMap<String, Vec<Stop>>,
    failure: Option<String>,
}

impl MemoryOrderSource {
    /// Create a source with no orders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the orders for `zone_id`, replacing any already held.
    #[must_use]
    pub fn with_zone(mut self, zone_id: impl Into<String>, stops: Vec<Stop>) -> Self {
        self.orders.insert(zone_id.into(), stops);
        self
    }

    /// Create a source that fails every fetch with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            orders: HashMap::new(),
            failure: Some(message.into()),
        }
    }
}

impl OrderSource for MemoryOrderSource {
    fn fetch_orders(&self, zone: &Zone) -> Result<Vec<Stop>, OrderSourceError> {
        if let Some(message) = &self.failure {
            return Err(OrderSourceError::Unavailable {
                message: message.clone(),
            });
        }
        Ok(self.orders.get(zone.id()).cloned().unwrap_or_default())
    }
}

/// [`DistanceProvider`] returning the same metrics for every route.
///
/// Configure an error with [`FixedDistanceProvider::with_error`] to exercise
/// failure paths.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDistanceProvider {
    metrics: RouteMetrics,
    error: Option<DistanceError>,
}

impl FixedDistanceProvider {
    /// Return `metrics` for every non-empty route.
    #[must_use]
    pub const fn new(metrics: RouteMetrics) -> Self {
        Self {
            metrics,
            error: None,
        }
    }

    /// Fail every measurement with `error`.
    #[must_use]
    pub fn with_error(mut self, error: DistanceError) -> Self {
        self.error = Some(error);
        self
    }
}

impl DistanceProvider for FixedDistanceProvider {
    fn measure(
        &self,
        _zone: &Zone,
        _route_index: usize,
        stops: &[Stop],
    ) -> Result<RouteMetrics, DistanceError> {
        if stops.is_empty() {
            return Err(DistanceError::EmptyRoute);
        }
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.metrics),
        }
    }
}
