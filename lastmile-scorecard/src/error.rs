//! Error types raised while scoring vendors.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while validating, scoring or persisting a vendor scorecard.
#[derive(Debug, Error)]
pub enum ScorecardError {
    /// A weight was outside `[0, 1]` or the weights did not sum to one.
    #[error("scorecard weights must lie in [0, 1] and sum to 1, got {on_time_delivery}, {cost_efficiency}, {compliance}")]
    InvalidWeights {
        /// On-time delivery weight supplied by the caller.
        on_time_delivery: f64,
        /// Cost efficiency weight supplied by the caller.
        cost_efficiency: f64,
        /// Compliance weight supplied by the caller.
        compliance: f64,
    },
    /// A vendor metric was negative or non-finite.
    #[error("vendor {vendor} has invalid {field}: {value}")]
    InvalidVendor {
        /// Name of the offending vendor.
        vendor: String,
        /// Metric that failed validation.
        field: &'static str,
        /// Value found on the vendor record.
        value: f64,
    },
    /// A vendor had a blank name.
    #[error("vendor names must not be empty")]
    UnnamedVendor,
    /// Reading the vendor list failed.
    #[error("failed to read vendors from {path}")]
    ReadVendors {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The vendor list was not a JSON array of vendor records.
    #[error("failed to parse vendors from {path}")]
    ParseVendors {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Encoding the scorecard report failed.
    #[error("failed to encode scorecard report")]
    Encode(#[source] serde_json::Error),
    /// Writing the scorecard report failed.
    #[error("failed to write scorecard report to {path}")]
    WriteReport {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
