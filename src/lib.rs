//! Facade crate for the last-mile delivery engine.
//!
//! This crate re-exports the core grouping, pricing and ranking types and
//! exposes the SQLite order store, the HTTP distance provider and the vendor
//! scorecard behind feature flags.

#![forbid(unsafe_code)]

pub use lastmile_core::{
    CostBreakdown, DistanceError, DistanceProvider, FleetReport, FleetSummary, LoadBand,
    OptimizeError, OrderSource, OrderSourceError, PricingConfig, RankedRoute, RouteCandidate,
    RouteGroup, RouteMetrics, RouteSummary, StaticDistanceTable, Stop, ValidationError, Zone,
    ZoneCatalog, ZoneOptimizer, ZoneReport, ZoneSummary, evaluate, group_stops, price,
    summarize,
};

#[cfg(feature = "store-sqlite")]
pub use lastmile_data::{SqliteOrderSource, SqliteOrderSourceError};

#[cfg(feature = "http-distances")]
pub use lastmile_data::{HttpDistanceProvider, HttpDistanceProviderConfig, ProviderBuildError};

#[cfg(any(feature = "store-sqlite", feature = "http-distances"))]
pub use lastmile_data::{placeholder_distance_table, simulated_candidates, simulated_distance_table};

pub use lastmile_scorecard::{
    RiskCategory, Scorecard, ScorecardError, ScorecardWeights, Vendor, score_vendors,
};
