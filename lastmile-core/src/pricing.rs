//! Distance-based route pricing with consolidation and load-efficiency
//! discounts.
//!
//! Pricing is a fixed sequence, each step rounded to cents:
//!
//! 1. `base = distance × cost_per_km`
//! 2. consolidation discount when the route is flagged consolidated *and*
//!    carries two or more stops
//! 3. load-efficiency bonus when `load / max_load` lies inside the load band
//!    (both bounds inclusive)
//!
//! Discounts only ever lower the cost, so `final ≤ after_consolidation ≤ base`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::RouteCandidate;
use crate::error::{ValidationError, ensure_non_negative, ensure_positive};
use crate::rounding::{percent_of, round_currency, round_percent};

/// Cost per kilometre in USD.
pub const DEFAULT_COST_PER_KM: f64 = 0.85;
/// Vehicle capacity in kilograms.
pub const DEFAULT_MAX_LOAD_KG: f64 = 1000.0;
/// Discount for merging two or more stops onto one route.
pub const DEFAULT_CONSOLIDATION_DISCOUNT: f64 = 0.12;
/// Discount for running a vehicle inside the efficient load band.
pub const DEFAULT_LOAD_EFFICIENCY_BONUS: f64 = 0.06;

/// Minimum number of stops for a route to earn the consolidation discount.
const CONSOLIDATION_MIN_STOPS: usize = 2;

/// Inclusive range of load ratios that earn the efficiency bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadBand {
    /// Lowest qualifying `load / max_load` ratio.
    pub min: f64,
    /// Highest qualifying `load / max_load` ratio.
    pub max: f64,
}

impl LoadBand {
    /// Construct a band, rejecting inverted or negative bounds.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidLoadBand`] when `min > max` or
    /// either bound is negative or non-finite.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        let band = Self { min, max };
        band.validate()?;
        Ok(band)
    }

    /// Check the band's bounds.
    ///
    /// # Errors
    /// See [`LoadBand::new`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ordered = self.min <= self.max;
        let finite = self.min.is_finite() && self.max.is_finite();
        if !(finite && ordered && self.min >= 0.0) {
            return Err(ValidationError::InvalidLoadBand {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Whether `ratio` lies within the band, bounds included.
    #[must_use]
    pub fn contains(&self, ratio: f64) -> bool {
        (self.min..=self.max).contains(&ratio)
    }
}

impl Default for LoadBand {
    fn default() -> Self {
        Self { min: 0.60, max: 0.90 }
    }
}

/// Immutable pricing configuration passed to every pricing call.
///
/// # Examples
/// ```
/// use lastmile_core::PricingConfig;
///
/// let config = PricingConfig::default().with_cost_per_km(1.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.base_cost(118.0), 118.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingConfig {
    /// USD charged per kilometre.
    pub cost_per_km: f64,
    /// Vehicle capacity in kilograms.
    pub max_load_kg: f64,
    /// Fractional discount for consolidated routes.
    pub consolidation_discount: f64,
    /// Fractional discount for efficiently loaded routes.
    pub load_efficiency_bonus: f64,
    /// Load ratios that earn the efficiency bonus.
    pub load_band: LoadBand,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cost_per_km: DEFAULT_COST_PER_KM,
            max_load_kg: DEFAULT_MAX_LOAD_KG,
            consolidation_discount: DEFAULT_CONSOLIDATION_DISCOUNT,
            load_efficiency_bonus: DEFAULT_LOAD_EFFICIENCY_BONUS,
            load_band: LoadBand::default(),
        }
    }
}

impl PricingConfig {
    /// Set the per-kilometre rate.
    #[must_use]
    pub const fn with_cost_per_km(mut self, cost_per_km: f64) -> Self {
        self.cost_per_km = cost_per_km;
        self
    }

    /// Set the vehicle capacity.
    #[must_use]
    pub const fn with_max_load_kg(mut self, max_load_kg: f64) -> Self {
        self.max_load_kg = max_load_kg;
        self
    }

    /// Set the consolidation discount rate.
    #[must_use]
    pub const fn with_consolidation_discount(mut self, rate: f64) -> Self {
        self.consolidation_discount = rate;
        self
    }

    /// Set the load-efficiency bonus rate.
    #[must_use]
    pub const fn with_load_efficiency_bonus(mut self, rate: f64) -> Self {
        self.load_efficiency_bonus = rate;
        self
    }

    /// Set the qualifying load band.
    #[must_use]
    pub const fn with_load_band(mut self, load_band: LoadBand) -> Self {
        self.load_band = load_band;
        self
    }

    /// Check every field.
    ///
    /// # Errors
    /// Returns [`ValidationError`] for a negative or non-finite rate per
    /// kilometre, a non-positive capacity, a discount outside `[0, 1)` or an
    /// invalid load band.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("cost_per_km", self.cost_per_km)?;
        ensure_positive("max_load_kg", self.max_load_kg)?;
        ensure_rate("consolidation_discount", self.consolidation_discount)?;
        ensure_rate("load_efficiency_bonus", self.load_efficiency_bonus)?;
        self.load_band.validate()
    }

    /// Step 1: distance-based cost, rounded to cents.
    #[must_use]
    pub fn base_cost(&self, distance_km: f64) -> f64 {
        round_currency(distance_km * self.cost_per_km)
    }

    /// Step 2: apply the consolidation discount for routes with two or more
    /// stops.
    #[must_use]
    pub fn apply_consolidation_discount(&self, base_cost: f64, num_stops: usize) -> f64 {
        if num_stops >= CONSOLIDATION_MIN_STOPS {
            round_currency(base_cost * (1.0 - self.consolidation_discount))
        } else {
            base_cost
        }
    }

    /// Step 3: apply the efficiency bonus when the load ratio is in band.
    #[must_use]
    pub fn apply_load_balance_bonus(&self, cost: f64, total_load_kg: f64) -> f64 {
        if self.load_band.contains(self.load_ratio(total_load_kg)) {
            round_currency(cost * (1.0 - self.load_efficiency_bonus))
        } else {
            cost
        }
    }

    /// Fraction of vehicle capacity used; above `1.0` means overloaded.
    #[must_use]
    pub fn load_ratio(&self, total_load_kg: f64) -> f64 {
        total_load_kg / self.max_load_kg
    }
}

fn ensure_rate(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::RateOutOfRange { field, value })
    }
}

/// Priced result for one route.
///
/// `load_utilization_pct` is not capped, so overloaded routes report more
/// than 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CostBreakdown {
    /// Distance-based cost before discounts.
    pub base_cost_usd: f64,
    /// Cost after the consolidation step.
    pub after_consolidation_usd: f64,
    /// Cost after every discount.
    pub final_cost_usd: f64,
    /// `base - final`.
    pub total_savings_usd: f64,
    /// Savings as a percentage of base; zero when base is zero.
    pub savings_pct: f64,
    /// Route distance in kilometres.
    pub distance_km: f64,
    /// Number of stops on the route.
    pub num_stops: usize,
    /// Route cargo weight in kilograms.
    pub total_load_kg: f64,
    /// Load as a percentage of vehicle capacity.
    pub load_utilization_pct: f64,
}

/// Price a route.
///
/// The consolidation discount needs both `is_consolidated` and at least two
/// stops; a multi-stop route flagged `false` pays full price.
///
/// # Errors
/// Returns [`ValidationError`] when the configuration is invalid or when
/// `distance_km` or `total_load_kg` is negative or non-finite.
///
/// # Examples
/// ```
/// use lastmile_core::{PricingConfig, price};
///
/// # fn main() -> Result<(), lastmile_core::ValidationError> {
/// let cost = price(118.0, 3, 750.0, true, &PricingConfig::default())?;
/// assert_eq!(cost.base_cost_usd, 100.3);
/// assert_eq!(cost.after_consolidation_usd, 88.26);
/// assert_eq!(cost.final_cost_usd, 82.96);
/// assert_eq!(cost.load_utilization_pct, 75.0);
/// # Ok(())
/// # }
/// ```
pub fn price(
    distance_km: f64,
    num_stops: usize,
    total_load_kg: f64,
    is_consolidated: bool,
    config: &PricingConfig,
) -> Result<CostBreakdown, ValidationError> {
    config.validate()?;
    let distance_km = ensure_non_negative("distance_km", distance_km)?;
    let total_load_kg = ensure_non_negative("total_load_kg", total_load_kg)?;

    let base_cost_usd = config.base_cost(distance_km);
    let after_consolidation_usd = if is_consolidated {
        config.apply_consolidation_discount(base_cost_usd, num_stops)
    } else {
        base_cost_usd
    };
    let final_cost_usd = config.apply_load_balance_bonus(after_consolidation_usd, total_load_kg);
    let total_savings_usd = round_currency(base_cost_usd - final_cost_usd);

    Ok(CostBreakdown {
        base_cost_usd,
        after_consolidation_usd,
        final_cost_usd,
        total_savings_usd,
        savings_pct: percent_of(total_savings_usd, base_cost_usd),
        distance_km,
        num_stops,
        total_load_kg,
        load_utilization_pct: round_percent(config.load_ratio(total_load_kg) * 100.0),
    })
}

/// Price a [`RouteCandidate`] using its own metrics and flag.
///
/// # Errors
/// See [`price`].
pub fn price_candidate(
    candidate: &RouteCandidate,
    config: &PricingConfig,
) -> Result<CostBreakdown, ValidationError> {
    price(
        candidate.metrics().distance_km(),
        candidate.num_stops(),
        candidate.total_load_kg(),
        candidate.is_consolidated(),
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    #[fixture]
    fn config() -> PricingConfig {
        PricingConfig::default()
    }

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    fn consolidated_route_in_band_gets_both_discounts(config: PricingConfig) {
        let cost = price(118.0, 3, 750.0, true, &config).expect("valid inputs");
        approx(cost.base_cost_usd, 100.30);
        approx(cost.after_consolidation_usd, 88.26);
        approx(cost.final_cost_usd, 82.96);
        approx(cost.total_savings_usd, 17.34);
        approx(cost.savings_pct, 17.3);
        approx(cost.load_utilization_pct, 75.0);
    }

    #[rstest]
    #[case(3, false)]
    #[case(1, true)]
    fn consolidation_needs_flag_and_two_stops(
        config: PricingConfig,
        #[case] num_stops: usize,
        #[case] consolidated: bool,
    ) {
        let cost = price(118.0, num_stops, 100.0, consolidated, &config).expect("valid inputs");
        approx(cost.after_consolidation_usd, cost.base_cost_usd);
    }

    #[rstest]
    #[case(600.0, true)]
    #[case(900.0, true)]
    #[case(599.0, false)]
    #[case(901.0, false)]
    fn load_band_bounds_are_inclusive(
        config: PricingConfig,
        #[case] load: f64,
        #[case] bonus: bool,
    ) {
        let cost = price(100.0, 1, load, false, &config).expect("valid inputs");
        approx(cost.base_cost_usd, 85.0);
        let expected = if bonus { 79.9 } else { 85.0 };
        approx(cost.final_cost_usd, expected);
    }

    #[rstest]
    fn zero_distance_reports_zero_savings_pct(config: PricingConfig) {
        let cost = price(0.0, 2, 700.0, true, &config).expect("valid inputs");
        approx(cost.base_cost_usd, 0.0);
        approx(cost.final_cost_usd, 0.0);
        approx(cost.savings_pct, 0.0);
    }

    #[rstest]
    fn overload_is_reported_not_rejected(config: PricingConfig) {
        let cost = price(50.0, 1, 1250.0, false, &config).expect("valid inputs");
        approx(cost.load_utilization_pct, 125.0);
        approx(cost.final_cost_usd, cost.base_cost_usd);
    }

    #[rstest]
    #[case(-1.0, 100.0)]
    #[case(f64::NAN, 100.0)]
    #[case(10.0, -5.0)]
    #[case(10.0, f64::INFINITY)]
    fn invalid_inputs_are_rejected(
        config: PricingConfig,
        #[case] distance: f64,
        #[case] load: f64,
    ) {
        assert!(price(distance, 1, load, false, &config).is_err());
    }

    #[rstest]
    #[case(PricingConfig::default().with_max_load_kg(0.0))]
    #[case(PricingConfig::default().with_cost_per_km(-0.1))]
    #[case(PricingConfig::default().with_consolidation_discount(1.0))]
    #[case(PricingConfig::default().with_load_efficiency_bonus(-0.01))]
    #[case(PricingConfig::default().with_load_band(LoadBand { min: 0.9, max: 0.6 }))]
    fn invalid_configs_are_rejected(#[case] config: PricingConfig) {
        assert!(config.validate().is_err());
        assert!(price(10.0, 1, 10.0, false, &config).is_err());
    }

    #[rstest]
    fn alternate_rates_flow_through(config: PricingConfig) {
        let custom = config
            .with_cost_per_km(1.0)
            .with_consolidation_discount(0.5)
            .with_load_efficiency_bonus(0.0);
        let cost = price(100.0, 2, 700.0, true, &custom).expect("valid inputs");
        approx(cost.after_consolidation_usd, 50.0);
        approx(cost.final_cost_usd, 50.0);
        approx(cost.savings_pct, 50.0);
    }
}
