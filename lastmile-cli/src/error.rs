//! Error types emitted by the lastmile CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use lastmile_core::{OptimizeError, ValidationError};
use lastmile_data::{ProviderBuildError, SqliteOrderSourceError};
use lastmile_scorecard::ScorecardError;
use thiserror::Error;

/// Errors emitted by the lastmile CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Pricing overrides or bundled route data failed validation.
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),
    /// The depot was not a `lat,lng` pair of valid coordinates.
    #[error("invalid depot {value:?}: expected `lat,lng` in degrees")]
    InvalidDepot { value: String },
    /// Opening the order database failed.
    #[error(transparent)]
    OpenOrders(#[from] SqliteOrderSourceError),
    /// Constructing the HTTP distance provider failed.
    #[error("failed to build distance provider for {base_url:?}: {source}")]
    BuildDistanceProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// A zone could not be optimised.
    #[error("optimisation failed: {0}")]
    Optimize(#[from] OptimizeError),
    /// Scoring vendors failed.
    #[error(transparent)]
    Scorecard(#[from] ScorecardError),
    /// Serialising a report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing a report to stdout failed.
    #[error("failed to write report: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing a report file failed.
    #[error("failed to write report to {path:?}: {source}")]
    WriteReportFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
