//! Vendor records, scoring weights and scorecard output types.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::ScorecardError;

/// Tolerance applied when checking that the weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Delivery vendor with its raw performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Display name.
    #[serde(rename = "vendor_name")]
    pub name: String,
    /// Share of deliveries made on time, in percent.
    pub on_time_delivery_pct: f64,
    /// Average cost per delivered unit in USD; lower is better.
    pub avg_cost_per_unit: f64,
    /// Compliance audit score.
    pub compliance_score: f64,
}

impl Vendor {
    /// Construct a vendor record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        on_time_delivery_pct: f64,
        avg_cost_per_unit: f64,
        compliance_score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            on_time_delivery_pct,
            avg_cost_per_unit,
            compliance_score,
        }
    }

    /// Check the name is present and every metric is finite and non-negative.
    ///
    /// # Errors
    /// Returns [`ScorecardError::UnnamedVendor`] or
    /// [`ScorecardError::InvalidVendor`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ScorecardError> {
        if self.name.trim().is_empty() {
            return Err(ScorecardError::UnnamedVendor);
        }
        let metrics = [
            ("on_time_delivery_pct", self.on_time_delivery_pct),
            ("avg_cost_per_unit", self.avg_cost_per_unit),
            ("compliance_score", self.compliance_score),
        ];
        match metrics
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((field, value)) => Err(ScorecardError::InvalidVendor {
                vendor: self.name.clone(),
                field,
                value,
            }),
            None => Ok(()),
        }
    }
}

/// Relative importance of each metric in the weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorecardWeights {
    /// Weight of on-time delivery.
    pub on_time_delivery: f64,
    /// Weight of cost efficiency.
    pub cost_efficiency: f64,
    /// Weight of compliance.
    pub compliance: f64,
}

impl Default for ScorecardWeights {
    fn default() -> Self {
        Self {
            on_time_delivery: 0.40,
            cost_efficiency: 0.35,
            compliance: 0.25,
        }
    }
}

impl ScorecardWeights {
    /// Validate and construct a weight set.
    ///
    /// # Errors
    /// Returns [`ScorecardError::InvalidWeights`] when a weight is outside
    /// `[0, 1]` or the three do not sum to one.
    pub fn new(
        on_time_delivery: f64,
        cost_efficiency: f64,
        compliance: f64,
    ) -> Result<Self, ScorecardError> {
        let weights = Self {
            on_time_delivery,
            cost_efficiency,
            compliance,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check each weight lies in `[0, 1]` and the sum is one.
    ///
    /// # Errors
    /// Returns [`ScorecardError::InvalidWeights`] on failure.
    #[expect(
        clippy::float_arithmetic,
        reason = "the weight sum is checked against a tolerance"
    )]
    pub fn validate(&self) -> Result<(), ScorecardError> {
        let parts = [self.on_time_delivery, self.cost_efficiency, self.compliance];
        let in_range = parts
            .iter()
            .all(|weight| weight.is_finite() && (0.0..=1.0).contains(weight));
        let sum: f64 = parts.iter().sum();
        if in_range && (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            Ok(())
        } else {
            Err(ScorecardError::InvalidWeights {
                on_time_delivery: self.on_time_delivery,
                cost_efficiency: self.cost_efficiency,
                compliance: self.compliance,
            })
        }
    }
}

/// Procurement risk implied by a weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskCategory {
    /// Score of 75 or more.
    Low,
    /// Score of 55 up to 75.
    Medium,
    /// Score below 55.
    High,
}

impl RiskCategory {
    /// Lowest score classed as low risk.
    pub const LOW_THRESHOLD: f64 = 75.0;
    /// Lowest score classed as medium risk.
    pub const MEDIUM_THRESHOLD: f64 = 55.0;

    /// Classify a weighted score.
    #[must_use]
    pub const fn from_score(score: f64) -> Self {
        if score >= Self::LOW_THRESHOLD {
            Self::Low
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// A vendor with its normalised metrics, weighted score, rank and risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredVendor {
    /// 1-based rank; tied scores share the lowest rank.
    pub rank: usize,
    /// Raw vendor record.
    #[serde(flatten)]
    pub vendor: Vendor,
    /// On-time delivery normalised to `[0, 100]`.
    pub norm_on_time: f64,
    /// Inverted cost normalised to `[0, 100]`.
    pub norm_cost_inv: f64,
    /// Compliance normalised to `[0, 100]`.
    pub norm_compliance: f64,
    /// Weighted score rounded to two decimals.
    pub weighted_score: f64,
    /// Risk band for the weighted score.
    pub risk_category: RiskCategory,
}

/// Count of vendors per risk band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiskSummary {
    /// Vendors rated low risk.
    pub low: usize,
    /// Vendors rated medium risk.
    pub medium: usize,
    /// Vendors rated high risk.
    pub high: usize,
    /// High-risk vendors as a percentage of all vendors, one decimal.
    pub high_risk_pct: f64,
}

/// Ranked vendors with the weights used and a risk summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    /// Weights applied to every vendor.
    pub weights: ScorecardWeights,
    /// Vendors ordered by rank.
    pub vendors: Vec<ScoredVendor>,
    /// Risk band counts.
    pub risk: RiskSummary,
}

impl Scorecard {
    /// Whether no vendors were scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Best-ranked vendor, if any.
    #[must_use]
    pub fn top(&self) -> Option<&ScoredVendor> {
        self.vendors.first()
    }
}
