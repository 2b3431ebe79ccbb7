//! Read-only access to delivery orders awaiting dispatch.

use thiserror::Error;

use crate::{Stop, ValidationError, Zone};

/// Errors raised by an [`OrderSource`].
///
/// The zone optimizer never fails on these: any error is logged and the
/// zone is treated as having no orders.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderSourceError {
    /// The backing store could not be reached or queried.
    #[error("order source unavailable: {message}")]
    Unavailable {
        /// Detail from the underlying store.
        message: String,
    },
    /// A fetched row could not be turned into a [`Stop`].
    #[error("order {order_id} is invalid: {source}")]
    InvalidRecord {
        /// Identifier of the offending order.
        order_id: String,
        /// Validation failure.
        #[source]
        source: ValidationError,
    },
}

/// Fetch the orders destined for a zone.
///
/// Implementations should return stops in dispatch order (priority
/// descending, then load descending) when the backing store can sort;
/// the optimizer re-applies [`crate::dispatch_order`] regardless.
///
/// # Examples
///
/// ```rust
/// use lastmile_core::{OrderSource, OrderSourceError, Stop, Zone};
///
/// struct Single;
///
/// impl OrderSource for Single {
///     fn fetch_orders(&self, _zone: &Zone) -> Result<Vec<Stop>, OrderSourceError> {
///         Stop::new("ORD-1", 25.0, 1)
///             .map(|stop| vec![stop])
///             .map_err(|source| OrderSourceError::InvalidRecord {
///                 order_id: "ORD-1".into(),
///                 source,
///             })
///     }
/// }
///
/// let zone = Zone::new("ZONE_A", "North")?;
/// assert_eq!(Single.fetch_orders(&zone)?.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait OrderSource {
    /// Return every pending order for `zone`; an empty list is valid.
    fn fetch_orders(&self, zone: &Zone) -> Result<Vec<Stop>, OrderSourceError>;
}

impl<T: OrderSource + ?Sized> OrderSource for Box<T> {
    fn fetch_orders(&self, zone: &Zone) -> Result<Vec<Stop>, OrderSourceError> {
        (**self).fetch_orders(zone)
    }
}

impl<T: OrderSource + ?Sized> OrderSource for &T {
    fn fetch_orders(&self, zone: &Zone) -> Result<Vec<Stop>, OrderSourceError> {
        (**self).fetch_orders(zone)
    }
}
