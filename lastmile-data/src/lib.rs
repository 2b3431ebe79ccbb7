//! Data access for the last-mile delivery engine.
//!
//! Responsibilities:
//! - Read pending orders from the SQLite order store.
//! - Measure routes through an HTTP Directions service.
//! - Ship the bundled demo dataset for offline runs.
//!
//! Boundaries:
//! - Do not encode pricing or ranking rules (live in `lastmile-core`).
//! - Expose synchronous seams; async I/O stays inside the HTTP provider.
//!
//! Invariants:
//! - Read-only access to the order store.
//! - API keys never appear in logs or error messages.

pub mod orders;
pub mod routing;
pub mod simulated;

pub use orders::{SqliteOrderSource, SqliteOrderSourceError};
pub use routing::{HttpDistanceProvider, HttpDistanceProviderConfig, ProviderBuildError};
pub use simulated::{placeholder_distance_table, simulated_candidates, simulated_distance_table};
