//! Command-line interface for the last-mile delivery engine.
//!
//! `lastmile optimize` ranks delivery routes per zone, either from the
//! bundled demo dataset or from a SQLite order store, and `lastmile
//! scorecard` ranks delivery vendors. Both emit JSON reports on stdout or
//! to `--output`.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

mod error;
mod optimize;
mod scorecard;

pub use error::CliError;

use optimize::{OptimizeArgs, run_optimize};
use scorecard::{ScorecardArgs, run_scorecard};

pub(crate) const ARG_ORDERS_DB: &str = "orders-db";
pub(crate) const ARG_MAPS_API_KEY: &str = "maps-api-key";
pub(crate) const ARG_MAPS_BASE_URL: &str = "maps-base-url";
pub(crate) const ARG_COST_PER_KM: &str = "cost-per-km";
pub(crate) const ARG_MAX_LOAD_KG: &str = "max-load-kg";
pub(crate) const ARG_DEPOT: &str = "depot";
pub(crate) const ARG_VENDORS: &str = "vendors";
pub(crate) const ARG_OUTPUT: &str = "output";

/// Run the lastmile CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the selected
/// command fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimize(args) => run_optimize(args),
        Command::Scorecard(args) => run_scorecard(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "lastmile",
    about = "Route consolidation and vendor scoring for last-mile delivery",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Group, price and rank delivery routes for every zone.
    Optimize(OptimizeArgs),
    /// Score and rank delivery vendors.
    Scorecard(ScorecardArgs),
}

/// Write `report` as pretty JSON to `output`, or to `writer` when no output
/// path is configured.
pub(crate) fn emit_report<T: Serialize>(
    report: &T,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    payload.push('\n');
    match output {
        Some(path) => {
            lastmile_fs::write_report(path, payload).map_err(|source| {
                CliError::WriteReportFile {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            info!("wrote report to {path}");
            Ok(())
        }
        None => writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput),
    }
}

/// Require `path` to name an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match lastmile_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) if path.exists() => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Resolve an optional output path, treating an empty value as unset.
pub(crate) fn output_path(output: Option<Utf8PathBuf>) -> Option<Utf8PathBuf> {
    output.filter(|path| !path.as_str().is_empty())
}

#[cfg(test)]
mod tests;
