//! Greedy capacity-constrained grouping of dispatch-ordered stops.

use crate::error::{ValidationError, ensure_positive};
use crate::{RouteGroup, Stop};

/// Partition `stops` into routes without exceeding `capacity_kg`.
///
/// Stops are taken in the given order. A stop joins the current route when
/// the running load plus its own load stays within capacity; otherwise the
/// current route is closed and the stop opens a new one. A stop heavier than
/// the capacity still gets a route of its own, so no order is ever dropped
/// and concatenating the output reproduces the input.
///
/// The pass is linear and never revisits a closed route.
///
/// # Errors
/// Returns [`ValidationError`] when `capacity_kg` is not finite and
/// positive.
///
/// # Examples
/// ```
/// use lastmile_core::{Stop, group_stops};
///
/// # fn main() -> Result<(), lastmile_core::ValidationError> {
/// let stops = vec![
///     Stop::new("a", 600.0, 1)?,
///     Stop::new("b", 300.0, 1)?,
///     Stop::new("c", 200.0, 1)?,
/// ];
/// let routes = group_stops(stops, 1000.0)?;
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[0].total_load_kg(), 900.0);
/// # Ok(())
/// # }
/// ```
pub fn group_stops<I>(stops: I, capacity_kg: f64) -> Result<Vec<RouteGroup>, ValidationError>
where
    I: IntoIterator<Item = Stop>,
{
    let capacity_kg = ensure_positive("capacity_kg", capacity_kg)?;
    let mut routes = Vec::new();
    let mut current: Option<RouteGroup> = None;

    for stop in stops {
        let fits = current
            .as_ref()
            .is_some_and(|route| route.total_load_kg() + stop.load_kg() <= capacity_kg);
        if fits {
            if let Some(route) = current.as_mut() {
                route.push(stop);
            }
        } else if let Some(closed) = current.replace(RouteGroup::start(stop)) {
            routes.push(closed);
        }
    }
    routes.extend(current);
    Ok(routes)
}
