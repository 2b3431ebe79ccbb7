//! Delivery stops (orders) awaiting dispatch.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{ValidationError, ensure_identifier, ensure_non_negative};

/// Geographic position of a stop or depot.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
pub type Location = Coord<f64>;

/// A single delivery order bound for a zone.
///
/// Stops are immutable once built. The load is validated to be finite and
/// non-negative; higher `priority` values are dispatched first.
///
/// # Examples
/// ```
/// use lastmile_core::Stop;
///
/// # fn main() -> Result<(), lastmile_core::ValidationError> {
/// let stop = Stop::new("ORD-1", 120.5, 3)?.with_customer("Acme Hardware");
/// assert_eq!(stop.load_kg(), 120.5);
/// assert_eq!(stop.customer_name(), "Acme Hardware");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stop {
    order_id: String,
    customer_name: String,
    address: String,
    location: Option<Location>,
    load_kg: f64,
    priority: i32,
}

impl Stop {
    /// Validate and construct a stop.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when `order_id` is blank or `load_kg` is
    /// negative or non-finite.
    pub fn new(
        order_id: impl Into<String>,
        load_kg: f64,
        priority: i32,
    ) -> Result<Self, ValidationError> {
        let order_id = order_id.into();
        ensure_identifier("order_id", &order_id)?;
        let load_kg = ensure_non_negative("load_kg", load_kg)?;
        Ok(Self {
            order_id,
            customer_name: String::new(),
            address: String::new(),
            location: None,
            load_kg,
            priority,
        })
    }

    /// Attach the customer's display name.
    #[must_use]
    pub fn with_customer(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = customer_name.into();
        self
    }

    /// Attach the postal delivery address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Attach the destination coordinates.
    #[must_use]
    pub const fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Order identifier.
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Customer display name; empty when unknown.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Delivery address; empty when unknown.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Destination coordinates, when geocoded.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        self.location
    }

    /// Cargo weight in kilograms.
    #[must_use]
    pub const fn load_kg(&self) -> f64 {
        self.load_kg
    }

    /// Dispatch priority; higher goes first.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }
}

/// Sort stops into dispatch order: priority descending, then load descending.
///
/// The sort is stable, so stops that tie on both keys keep their relative
/// order. Sources that already order rows server-side are unaffected.
///
/// # Examples
/// ```
/// use lastmile_core::{Stop, dispatch_order};
///
/// # fn main() -> Result<(), lastmile_core::ValidationError> {
/// let mut stops = vec![Stop::new("a", 10.0, 1)?, Stop::new("b", 5.0, 2)?];
/// dispatch_order(&mut stops);
/// assert_eq!(stops[0].order_id(), "b");
/// # Ok(())
/// # }
/// ```
pub fn dispatch_order(stops: &mut [Stop]) {
    stops.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.load_kg.total_cmp(&a.load_kg))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-0.5)]
    #[case(f64::NAN)]
    fn stop_rejects_invalid_load(#[case] load: f64) {
        assert!(Stop::new("ORD-1", load, 0).is_err());
    }

    #[rstest]
    fn stop_rejects_blank_identifier() {
        let err = Stop::new(" ", 1.0, 0).expect_err("blank id");
        assert_eq!(err, ValidationError::EmptyIdentifier { field: "order_id" });
    }

    #[rstest]
    fn dispatch_order_breaks_priority_ties_by_load() {
        let mut stops = vec![
            Stop::new("light", 10.0, 1).expect("valid stop"),
            Stop::new("urgent", 5.0, 3).expect("valid stop"),
            Stop::new("heavy", 40.0, 1).expect("valid stop"),
            Stop::new("heavy-twin", 40.0, 1).expect("valid stop"),
        ];
        dispatch_order(&mut stops);
        let ids: Vec<_> = stops.iter().map(Stop::order_id).collect();
        assert_eq!(ids, ["urgent", "heavy", "heavy-twin", "light"]);
    }
}
