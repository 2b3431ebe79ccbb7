//! HTTP-based `DistanceProvider` using a Directions-style API.
//!
//! # Architecture
//!
//! The [`DistanceProvider`] trait is synchronous so the optimizer stays
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! call to the sync interface by blocking on a Tokio runtime internally.
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use lastmile_core::{DistanceProvider, Stop, Zone};
//! use lastmile_data::routing::HttpDistanceProvider;
//!
//! let provider = HttpDistanceProvider::new("my-api-key")?;
//! let zone = Zone::new("ZONE_A", "North")?;
//! let stops = vec![
//!     Stop::new("ORD-1", 120.0, 2)?.with_location(Coord { x: -87.63, y: 41.88 }),
//!     Stop::new("ORD-2", 80.0, 1)?.with_location(Coord { x: -87.65, y: 41.92 }),
//! ];
//!
//! let metrics = provider.measure(&zone, 0, &stops)?;
//! println!("{} km", metrics.distance_km());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use lastmile_core::rounding::round_to;
use lastmile_core::{DistanceError, DistanceProvider, Location, RouteMetrics, Stop, Zone};
use log::debug;
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::directions::DirectionsResponse;

/// Error type for [`HttpDistanceProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// No API key was configured.
    #[error("a maps API key is required for live distances")]
    MissingApiKey,
    /// The base URL could not be parsed.
    #[error("invalid maps base URL {url}: {source}")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default user agent for directions requests.
pub const DEFAULT_USER_AGENT: &str = "lastmile-routing/0.1";

/// Default Directions API base URL.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Placeholder shown instead of the API key in logs and errors.
const REDACTED: &str = "REDACTED";

const METRES_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const KM_PLACES: i32 = 2;
const MINUTE_PLACES: i32 = 1;

/// Configuration for [`HttpDistanceProvider`].
#[derive(Clone)]
pub struct HttpDistanceProviderConfig {
    /// Base URL of the maps API, without the `/directions/json` suffix.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for HttpDistanceProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDistanceProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &REDACTED)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl HttpDistanceProviderConfig {
    /// Create a configuration for the default endpoint using `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the provider at a different endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Distance provider backed by a Directions-style HTTP API.
///
/// Each route becomes one request: the zone depot (or the first stop when
/// no depot is set) is the origin, the last stop is the destination and
/// the stops in between are waypoints the service may reorder. Leg
/// distances and durations are summed and converted to kilometres and
/// minutes.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the provider blocks on its own current-thread
/// runtime. Inside a multi-threaded runtime it uses that runtime's handle
/// with [`tokio::task::block_in_place`]. Inside a `current_thread` runtime
/// it falls back to its own runtime, which may deadlock if the caller's
/// runtime drives IO this request depends on.
pub struct HttpDistanceProvider {
    client: Client,
    config: HttpDistanceProviderConfig,
    endpoint: Url,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpDistanceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDistanceProvider")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl HttpDistanceProvider {
    /// Create a provider for the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDistanceProviderConfig::new(api_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank, the base URL does not parse, or
    /// the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpDistanceProviderConfig) -> Result<Self, ProviderBuildError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderBuildError::MissingApiKey);
        }
        let endpoint = directions_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            runtime,
        })
    }

    /// Build the request URL for a route.
    ///
    /// Coordinates are sent as `lat,lng`. Waypoints carry the
    /// `optimize:true` prefix so the service may reorder them. Without a
    /// depot the first stop is the origin, so a single-stop route needs one.
    fn build_directions_url(&self, zone: &Zone, stops: &[Stop]) -> Result<Url, DistanceError> {
        let points = stops
            .iter()
            .map(|stop| {
                stop.location()
                    .ok_or_else(|| DistanceError::MissingLocation {
                        order_id: stop.order_id().to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (origin, rest) = match (zone.depot(), points.as_slice()) {
            (Some(depot), _) => (depot, points.as_slice()),
            (None, []) => return Err(DistanceError::EmptyRoute),
            (None, [_]) => {
                return Err(DistanceError::MissingDepot {
                    zone: zone.id().to_owned(),
                });
            }
            (None, [first, rest @ ..]) => (*first, rest),
        };
        let (destination, waypoints) = rest
            .split_last()
            .map_or((origin, &[][..]), |(last, middle)| (*last, middle));

        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("origin", &lat_lng(origin))
                .append_pair("destination", &lat_lng(destination));
            if !waypoints.is_empty() {
                let joined = waypoints
                    .iter()
                    .map(|point| lat_lng(*point))
                    .collect::<Vec<_>>()
                    .join("|");
                query.append_pair("waypoints", &format!("optimize:true|{joined}"));
            }
            query
                .append_pair("mode", "driving")
                .append_pair("units", "metric")
                .append_pair("key", &self.config.api_key);
        }
        Ok(url)
    }

    /// Fetch and total a route asynchronously.
    async fn fetch_route_async(
        &self,
        zone: &Zone,
        stops: &[Stop],
    ) -> Result<RouteMetrics, DistanceError> {
        let url = self.build_directions_url(zone, stops)?;
        let redacted = redact_key(&url);
        debug!("requesting directions for {} stops: {redacted}", stops.len());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &redacted))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &redacted))?;

        let directions: DirectionsResponse =
            response
                .json()
                .await
                .map_err(|err| DistanceError::ParseError {
                    message: err.without_url().to_string(),
                })?;

        convert_response(directions)
    }

    /// Convert a reqwest error to a `DistanceError`.
    ///
    /// `url` must already be redacted; the reqwest error text is stripped
    /// of its URL so the key never leaks.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> DistanceError {
        if error.is_timeout() {
            return DistanceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        let message = strip_url(error);
        if let Some(status) = error.status() {
            return DistanceError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message,
            };
        }

        DistanceError::NetworkError {
            url: url.to_owned(),
            message,
        }
    }
}

impl DistanceProvider for HttpDistanceProvider {
    /// Measure a route through the Directions API.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded; see the type-level documentation.
    fn measure(
        &self,
        zone: &Zone,
        _route_index: usize,
        stops: &[Stop],
    ) -> Result<RouteMetrics, DistanceError> {
        if stops.is_empty() {
            return Err(DistanceError::EmptyRoute);
        }

        let future = self.fetch_route_async(zone, stops);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}

fn directions_endpoint(base_url: &str) -> Result<Url, ProviderBuildError> {
    let raw = format!("{}/directions/json", base_url.trim_end_matches('/'));
    Url::parse(&raw).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })
}

fn lat_lng(point: Location) -> String {
    format!("{},{}", point.y, point.x)
}

/// Render `url` with the `key` parameter masked.
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                REDACTED.to_owned()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.into()
}

fn strip_url(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    if let Some(url) = error.url() {
        message = message.replace(url.as_str(), "<url>");
    }
    message
}

/// Total the first route of a successful response.
fn convert_response(response: DirectionsResponse) -> Result<RouteMetrics, DistanceError> {
    if !response.is_ok() {
        return Err(DistanceError::ServiceError {
            code: response.status,
            message: response.error_message.unwrap_or_default(),
        });
    }

    let route = response
        .routes
        .first()
        .ok_or_else(|| DistanceError::ServiceError {
            code: "ZERO_RESULTS".to_owned(),
            message: "no route found".to_owned(),
        })?;

    let (metres, seconds) = route.totals();
    Ok(RouteMetrics::new(
        round_to(metres / METRES_PER_KM, KM_PLACES),
        round_to(seconds / SECONDS_PER_MINUTE, MINUTE_PLACES),
    )?)
}
