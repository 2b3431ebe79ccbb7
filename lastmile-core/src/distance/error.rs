use thiserror::Error;

use crate::ValidationError;

/// Errors from [`crate::distance::DistanceProvider::measure`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// No stops were provided for the route.
    #[error("at least one stop is required to measure a route")]
    EmptyRoute,
    /// A static table had no entry for the requested route.
    #[error("no distance recorded for route {index} in zone {zone}")]
    UnknownRoute {
        /// Zone identifier.
        zone: String,
        /// 0-based route index within the zone.
        index: usize,
    },
    /// A stop lacked the coordinates needed to query a mapping service.
    #[error("order {order_id} has no destination coordinates")]
    MissingLocation {
        /// Order that could not be located.
        order_id: String,
    },
    /// A single-stop route has no depot to start from, so origin and
    /// destination would coincide.
    #[error("route in zone {zone} has a single stop and the zone has no depot")]
    MissingDepot {
        /// Zone identifier.
        zone: String,
    },
    /// The request timed out.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL with credentials removed.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    HttpError {
        /// Request URL with credentials removed.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("request to {url} failed: {message}")]
    NetworkError {
        /// Request URL with credentials removed.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The mapping service rejected the query.
    #[error("routing service returned {code}: {message}")]
    ServiceError {
        /// Status code reported by the service.
        code: String,
        /// Error detail reported by the service.
        message: String,
    },
    /// The response could not be decoded.
    #[error("failed to parse routing response: {message}")]
    ParseError {
        /// Decoder error detail.
        message: String,
    },
    /// The service returned figures that fail validation.
    #[error("routing service returned invalid metrics: {0}")]
    InvalidMetrics(#[from] ValidationError),
}
