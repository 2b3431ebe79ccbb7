//! Scorecard command implementation for the lastmile CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use lastmile_scorecard::{
    Scorecard, ScorecardWeights, read_vendors, sample_vendors, score_vendors,
};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_OUTPUT, ARG_VENDORS, CliError, emit_report, output_path, require_existing};

/// CLI arguments for the `scorecard` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score delivery vendors on on-time delivery, cost per unit \
                 and compliance, rank them and classify their procurement \
                 risk. Without a vendor file the bundled reference vendors \
                 are scored.",
    about = "Rank delivery vendors"
)]
#[ortho_config(prefix = "LASTMILE")]
pub(crate) struct ScorecardArgs {
    /// JSON array of vendor records.
    #[arg(long = ARG_VENDORS, value_name = "path")]
    #[serde(default)]
    pub(crate) vendors: Option<Utf8PathBuf>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

/// Resolved `scorecard` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScorecardConfig {
    pub(crate) vendors: Option<Utf8PathBuf>,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScorecardConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.vendors
            .as_deref()
            .map_or(Ok(()), |path| require_existing(path, ARG_VENDORS))
    }
}

impl From<ScorecardArgs> for ScorecardConfig {
    fn from(args: ScorecardArgs) -> Self {
        Self {
            vendors: args.vendors,
            output: output_path(args.output),
        }
    }
}

pub(crate) fn run_scorecard(args: ScorecardArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_scorecard_with(args, &mut stdout)
}

pub(crate) fn run_scorecard_with(
    args: ScorecardArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = ScorecardConfig::from(merged);
    config.validate_sources()?;
    let scorecard = execute_scorecard(&config)?;
    emit_report(&scorecard, config.output.as_deref(), writer)
}

pub(crate) fn execute_scorecard(config: &ScorecardConfig) -> Result<Scorecard, CliError> {
    let vendors = match &config.vendors {
        Some(path) => read_vendors(path)?,
        None => {
            info!("no vendor file given; scoring the reference vendors");
            sample_vendors()
        }
    };
    Ok(score_vendors(&vendors, ScorecardWeights::default())?)
}
