//! Distance and duration figures for planned routes.
//!
//! The [`DistanceProvider`] trait abstracts where route distances come from.
//! The evaluator never sees the difference between a static table and a live
//! mapping service: both hand back [`RouteMetrics`].

mod error;
mod provider;
mod table;

pub use error::DistanceError;
pub use provider::{DistanceProvider, RouteMetrics};
pub use table::StaticDistanceTable;
