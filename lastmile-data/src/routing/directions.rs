//! Directions API response types.
//!
//! Only the fields needed to total a route are decoded: the overall status,
//! an optional error message and, per route, the legs with their distance in
//! metres and duration in seconds.

use serde::Deserialize;

/// Directions API response.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Status reported by the service.
    ///
    /// Common values:
    /// - `"OK"` - at least one route was found
    /// - `"ZERO_RESULTS"` - no route between the points
    /// - `"REQUEST_DENIED"` - the API key was rejected
    /// - `"OVER_QUERY_LIMIT"` - quota exhausted
    pub status: String,

    /// Optional detail when `status` is not `"OK"`.
    #[serde(default)]
    pub error_message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// One route returned by the service.
#[derive(Debug, Deserialize)]
pub struct DirectionsRoute {
    /// Legs between consecutive points, in travel order.
    #[serde(default)]
    pub legs: Vec<Leg>,
    /// Optimised visiting order of the waypoints.
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
}

impl DirectionsRoute {
    /// Total distance in metres and duration in seconds over every leg.
    #[must_use]
    pub fn totals(&self) -> (f64, f64) {
        self.legs.iter().fold((0.0, 0.0), |(metres, seconds), leg| {
            (metres + leg.distance.value, seconds + leg.duration.value)
        })
    }
}

/// A single leg of a route.
#[derive(Debug, Deserialize)]
pub struct Leg {
    /// Leg length.
    pub distance: Measure,
    /// Leg travel time.
    pub duration: Measure,
}

/// A measured quantity with its display text.
#[derive(Debug, Deserialize)]
pub struct Measure {
    /// Metres for distances, seconds for durations.
    pub value: f64,
    /// Human-readable rendering, e.g. `"12.3 km"`.
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_success_response() {
        let json = r#"{
            "status": "OK",
            "routes": [{
                "waypoint_order": [1, 0],
                "legs": [
                    {"distance": {"value": 12000, "text": "12 km"}, "duration": {"value": 900, "text": "15 mins"}},
                    {"distance": {"value": 8500, "text": "8.5 km"}, "duration": {"value": 600, "text": "10 mins"}}
                ]
            }]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.is_ok());
        let route = response.routes.first().expect("one route");
        assert_eq!(route.waypoint_order, vec![1, 0]);
        assert_eq!(route.totals(), (20_500.0, 1_500.0));
    }

    #[test]
    fn deserialise_error_response() {
        let json = r#"{
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(!response.is_ok());
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
        assert!(response.routes.is_empty());
    }
}
