//! Optimize command implementation for the lastmile CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use lastmile_core::{
    DistanceProvider, FleetReport, Location, PricingConfig, ZoneCatalog, ZoneOptimizer,
    ZoneReport,
};
use lastmile_data::routing::{DEFAULT_BASE_URL, HttpDistanceProvider, HttpDistanceProviderConfig};
use lastmile_data::{SqliteOrderSource, placeholder_distance_table, simulated_candidates};
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_COST_PER_KM, ARG_DEPOT, ARG_MAPS_API_KEY, ARG_MAPS_BASE_URL, ARG_MAX_LOAD_KG,
    ARG_ORDERS_DB, ARG_OUTPUT, CliError, emit_report, output_path, require_existing,
};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Group pending orders into capacity-bounded routes, price \
                 them and rank them per zone. Without an order database the \
                 bundled demo routes are evaluated instead. Values can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Rank delivery routes for every zone"
)]
#[ortho_config(prefix = "LASTMILE")]
pub(crate) struct OptimizeArgs {
    /// SQLite database holding the `delivery_orders` table.
    #[arg(long = ARG_ORDERS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) orders_db: Option<Utf8PathBuf>,
    /// API key for the Directions service; omit to use placeholder distances.
    #[arg(long = ARG_MAPS_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) maps_api_key: Option<String>,
    /// Base URL for the Directions service.
    #[arg(long = ARG_MAPS_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) maps_base_url: Option<String>,
    /// Depot every route starts from, as `lat,lng`.
    #[arg(long = ARG_DEPOT, value_name = "lat,lng")]
    #[serde(default)]
    pub(crate) depot: Option<String>,
    /// Override the cost per kilometre in USD.
    #[arg(long = ARG_COST_PER_KM, value_name = "usd")]
    #[serde(default)]
    pub(crate) cost_per_km: Option<f64>,
    /// Override the vehicle capacity in kilograms.
    #[arg(long = ARG_MAX_LOAD_KG, value_name = "kg")]
    #[serde(default)]
    pub(crate) max_load_kg: Option<f64>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Where route distances come from in live mode.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DistanceSource {
    /// The same placeholder figures for every route.
    Placeholder,
    /// A Directions service reached over HTTP.
    Http { api_key: String, base_url: String },
}

/// How routes are obtained.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum OptimizeMode {
    /// Evaluate the bundled pre-planned routes.
    Simulated,
    /// Group orders from the database and measure them.
    Live {
        orders_db: Utf8PathBuf,
        distances: DistanceSource,
    },
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimizeConfig {
    pub(crate) mode: OptimizeMode,
    pub(crate) pricing: PricingConfig,
    pub(crate) depot: Option<Location>,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.mode {
            OptimizeMode::Simulated => Ok(()),
            OptimizeMode::Live { orders_db, .. } => require_existing(orders_db, ARG_ORDERS_DB),
        }
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let mut pricing = PricingConfig::default();
        if let Some(cost_per_km) = args.cost_per_km {
            pricing = pricing.with_cost_per_km(cost_per_km);
        }
        if let Some(max_load_kg) = args.max_load_kg {
            pricing = pricing.with_max_load_kg(max_load_kg);
        }
        pricing.validate()?;
        let depot = args.depot.as_deref().map(parse_depot).transpose()?;

        let api_key = args.maps_api_key.filter(|key| !key.trim().is_empty());
        let mode = match (args.orders_db, api_key) {
            (None, key) => {
                if key.is_some() {
                    warn!("--{ARG_MAPS_API_KEY} is ignored without --{ARG_ORDERS_DB}");
                }
                OptimizeMode::Simulated
            }
            (Some(orders_db), None) => OptimizeMode::Live {
                orders_db,
                distances: DistanceSource::Placeholder,
            },
            (Some(orders_db), Some(api_key)) => OptimizeMode::Live {
                orders_db,
                distances: DistanceSource::Http {
                    api_key,
                    base_url: args
                        .maps_base_url
                        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
                },
            },
        };

        let needs_depot = matches!(
            &mode,
            OptimizeMode::Live {
                distances: DistanceSource::Http { .. },
                ..
            }
        );
        if needs_depot && depot.is_none() {
            warn!("no --{ARG_DEPOT} configured; single-stop routes cannot be measured");
        }

        Ok(Self {
            mode,
            pricing,
            depot,
            output: output_path(args.output),
        })
    }
}

pub(crate) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &mut stdout)
}

pub(crate) fn run_optimize_with(args: OptimizeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_and_emit(&config, writer)
}

pub(crate) fn execute_and_emit(
    config: &OptimizeConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = execute_optimize(config)?;
    let fleet = &report.summary.summary;
    info!(
        "{} routes across {} zones: base ${}, optimised ${}, saved ${} ({}%)",
        fleet.num_routes,
        report.summary.num_zones,
        fleet.total_base_cost,
        fleet.total_final_cost,
        fleet.total_savings,
        fleet.avg_savings_pct
    );
    emit_report(&report, config.output.as_deref(), writer)
}

pub(crate) fn execute_optimize(config: &OptimizeConfig) -> Result<FleetReport, CliError> {
    let catalog = match config.depot {
        Some(depot) => ZoneCatalog::default().with_depot(depot),
        None => ZoneCatalog::default(),
    };
    match &config.mode {
        OptimizeMode::Simulated => evaluate_simulated(&catalog, &config.pricing),
        OptimizeMode::Live {
            orders_db,
            distances,
        } => {
            let orders = SqliteOrderSource::open(orders_db)?;
            let provider = build_distance_provider(distances)?;
            let optimizer = ZoneOptimizer::with_config(orders, provider, config.pricing)?;
            Ok(optimizer.optimize_fleet(&catalog)?)
        }
    }
}

fn evaluate_simulated(
    catalog: &ZoneCatalog,
    pricing: &PricingConfig,
) -> Result<FleetReport, CliError> {
    let zones = catalog
        .iter()
        .map(|zone| {
            let candidates = simulated_candidates(zone.id())?;
            ZoneReport::evaluate(zone, &candidates, pricing)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FleetReport::from_zones(zones))
}

fn build_distance_provider(
    source: &DistanceSource,
) -> Result<Box<dyn DistanceProvider>, CliError> {
    match source {
        DistanceSource::Placeholder => Ok(Box::new(placeholder_distance_table()?)),
        DistanceSource::Http { api_key, base_url } => {
            let config = HttpDistanceProviderConfig::new(api_key.clone())
                .with_base_url(base_url.clone());
            let provider = HttpDistanceProvider::with_config(config).map_err(|source| {
                CliError::BuildDistanceProvider {
                    base_url: base_url.clone(),
                    source,
                }
            })?;
            Ok(Box::new(provider))
        }
    }
}

/// Parse a `lat,lng` pair into a depot location.
pub(crate) fn parse_depot(value: &str) -> Result<Location, CliError> {
    let invalid = || CliError::InvalidDepot {
        value: value.to_owned(),
    };
    let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(invalid());
    }
    Ok(Location { x: lng, y: lat })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
