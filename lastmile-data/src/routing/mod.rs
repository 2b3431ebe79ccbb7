//! HTTP-based distance providers for mapping services.
//!
//! This module provides [`HttpDistanceProvider`], an implementation of
//! [`lastmile_core::DistanceProvider`] that measures routes through a
//! Directions-style API.
//!
//! # Architecture
//!
//! One HTTP request is made per planned route. The synchronous
//! [`DistanceProvider`](lastmile_core::DistanceProvider) trait is implemented
//! by blocking on the async call internally, so the optimizer never needs an
//! async runtime of its own.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use lastmile_data::routing::{HttpDistanceProvider, HttpDistanceProviderConfig};
//!
//! let config = HttpDistanceProviderConfig::new("my-api-key")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("dispatch/1.0");
//! let provider = HttpDistanceProvider::with_config(config)?;
//! # Ok::<(), lastmile_data::routing::ProviderBuildError>(())
//! ```

mod directions;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use directions::{DirectionsResponse, DirectionsRoute, Leg, Measure};
pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpDistanceProvider, HttpDistanceProviderConfig,
    ProviderBuildError,
};
