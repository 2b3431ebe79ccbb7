//! Normalisation, weighting and ranking of vendors.
#![forbid(unsafe_code)]

use lastmile_core::rounding::{percent_of, round_currency};
use log::info;

use crate::{
    RiskCategory, RiskSummary, Scorecard, ScorecardError, ScorecardWeights, ScoredVendor, Vendor,
};

/// Score given to every value when a metric does not vary.
const FLAT_SCORE: f64 = 100.0;

/// Min-max normalise `values` onto `[0, 100]`.
///
/// When every value is equal (including a single value) each maps to 100,
/// so a metric nobody differs on never penalises anyone.
///
/// # Examples
/// ```
/// use lastmile_scorecard::normalise;
///
/// assert_eq!(normalise(&[10.0, 15.0, 20.0]), vec![0.0, 50.0, 100.0]);
/// assert_eq!(normalise(&[7.0, 7.0]), vec![100.0, 100.0]);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "min-max scaling is inherently floating point"
)]
pub fn normalise(values: &[f64]) -> Vec<f64> {
    let (min, max) = values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), &value| (min.min(value), max.max(value)),
    );
    let span = max - min;
    if values.is_empty() || span <= 0.0 {
        return vec![FLAT_SCORE; values.len()];
    }
    values
        .iter()
        .map(|value| (value - min) / span * FLAT_SCORE)
        .collect()
}

/// Score, rank and classify `vendors`.
///
/// Cost is inverted (`max_cost - cost`) before normalising so cheaper
/// vendors score higher. Scores are rounded to two decimals before ranking;
/// equal scores share the lowest rank and keep their input order.
///
/// # Errors
/// Returns [`ScorecardError`] when the weights or any vendor record fail
/// validation.
///
/// # Examples
/// ```
/// use lastmile_scorecard::{ScorecardWeights, Vendor, score_vendors};
///
/// # fn main() -> Result<(), lastmile_scorecard::ScorecardError> {
/// let vendors = vec![
///     Vendor::new("Cheap", 80.0, 9.0, 70.0),
///     Vendor::new("Reliable", 95.0, 12.0, 90.0),
/// ];
/// let scorecard = score_vendors(&vendors, ScorecardWeights::default())?;
/// assert_eq!(scorecard.top().map(|v| v.vendor.name.as_str()), Some("Reliable"));
/// # Ok(())
/// # }
/// ```
pub fn score_vendors(
    vendors: &[Vendor],
    weights: ScorecardWeights,
) -> Result<Scorecard, ScorecardError> {
    weights.validate()?;
    vendors.iter().try_for_each(Vendor::validate)?;

    let on_time = normalise(&collect(vendors, |v| v.on_time_delivery_pct));
    let cost_inv = normalise(&inverted_costs(vendors));
    let compliance = normalise(&collect(vendors, |v| v.compliance_score));

    let mut scored: Vec<ScoredVendor> = vendors
        .iter()
        .zip(on_time)
        .zip(cost_inv)
        .zip(compliance)
        .map(|(((vendor, norm_on_time), norm_cost_inv), norm_compliance)| {
            let weighted_score =
                weighted(weights, norm_on_time, norm_cost_inv, norm_compliance);
            ScoredVendor {
                rank: 0,
                vendor: vendor.clone(),
                norm_on_time,
                norm_cost_inv,
                norm_compliance,
                weighted_score,
                risk_category: RiskCategory::from_score(weighted_score),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
    assign_min_ranks(&mut scored);
    let risk = summarise_risk(&scored);
    info!(
        "scored {} vendors: {} low, {} medium, {} high risk",
        scored.len(),
        risk.low,
        risk.medium,
        risk.high
    );

    Ok(Scorecard {
        weights,
        vendors: scored,
        risk,
    })
}

fn collect(vendors: &[Vendor], metric: impl Fn(&Vendor) -> f64) -> Vec<f64> {
    vendors.iter().map(metric).collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "cost is inverted against the most expensive vendor"
)]
fn inverted_costs(vendors: &[Vendor]) -> Vec<f64> {
    let max_cost = vendors
        .iter()
        .map(|vendor| vendor.avg_cost_per_unit)
        .fold(f64::NEG_INFINITY, f64::max);
    collect(vendors, |vendor| max_cost - vendor.avg_cost_per_unit)
}

#[expect(
    clippy::float_arithmetic,
    reason = "the weighted score is a linear combination of normalised metrics"
)]
fn weighted(weights: ScorecardWeights, on_time: f64, cost_inv: f64, compliance: f64) -> f64 {
    round_currency(
        weights.on_time_delivery * on_time
            + weights.cost_efficiency * cost_inv
            + weights.compliance * compliance,
    )
}

/// Give each vendor `1 + number of vendors with a strictly higher score`.
///
/// Expects `scored` sorted by descending score.
fn assign_min_ranks(scored: &mut [ScoredVendor]) {
    let mut previous: Option<(f64, usize)> = None;
    for (position, vendor) in scored.iter_mut().enumerate() {
        let rank = match previous {
            Some((score, rank)) if score.total_cmp(&vendor.weighted_score).is_eq() => rank,
            _ => position + 1,
        };
        vendor.rank = rank;
        previous = Some((vendor.weighted_score, rank));
    }
}

fn summarise_risk(scored: &[ScoredVendor]) -> RiskSummary {
    let mut summary = scored
        .iter()
        .fold(RiskSummary::default(), |mut counts, vendor| {
            match vendor.risk_category {
                RiskCategory::Low => counts.low += 1,
                RiskCategory::Medium => counts.medium += 1,
                RiskCategory::High => counts.high += 1,
            }
            counts
        });
    summary.high_risk_pct = percent_of(count_as_f64(summary.high), count_as_f64(scored.len()));
    summary
}

fn count_as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}
