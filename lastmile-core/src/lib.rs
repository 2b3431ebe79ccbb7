//! Core domain types and rules for the last-mile delivery engine.
//!
//! Stops flow one way through the crate: an [`OrderSource`] supplies them,
//! [`group_stops`] packs them into capacity-bounded routes, a
//! [`DistanceProvider`] measures each route, [`evaluate`] prices and ranks
//! them with the rules in [`PricingConfig`], and [`summarize`] rolls the
//! results up per zone. [`ZoneOptimizer`] wires the steps together.
//!
//! Every rule is a pure function of its inputs. Constructors return
//! `Result` so negative or non-finite figures are rejected where they enter.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
pub mod distance;
mod error;
mod evaluate;
mod group;
mod optimizer;
mod orders;
pub mod pricing;
pub mod rounding;
mod route;
mod stop;
mod zone;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use aggregate::{FleetSummary, RouteSummary, ZoneSummary, summarize};
pub use distance::{DistanceError, DistanceProvider, RouteMetrics, StaticDistanceTable};
pub use error::ValidationError;
pub use evaluate::{RankedRoute, evaluate};
pub use group::group_stops;
pub use optimizer::{FleetReport, OptimizeError, ZoneOptimizer, ZoneReport};
pub use orders::{OrderSource, OrderSourceError};
pub use pricing::{CostBreakdown, LoadBand, PricingConfig, price, price_candidate};
pub use route::{RouteCandidate, RouteGroup};
pub use stop::{Location, Stop, dispatch_order};
pub use zone::{Zone, ZoneCatalog};
