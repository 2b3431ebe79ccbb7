//! Weighted vendor scorecards for delivery carriers.
//!
//! Each vendor is judged on three metrics: on-time delivery, cost per unit
//! and compliance. Metrics are min-max normalised across the vendor set
//! (cost inverted so cheaper is better), combined with
//! [`ScorecardWeights`], ranked, and bucketed into [`RiskCategory`] bands.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use lastmile_scorecard::{ScorecardWeights, read_vendors, score_vendors, write_scorecard};
//!
//! let vendors = read_vendors(Utf8Path::new("data/vendors.json")).expect("read vendors");
//! let scorecard = score_vendors(&vendors, ScorecardWeights::default()).expect("score vendors");
//! write_scorecard(Utf8Path::new("reports/scorecard.json"), &scorecard).expect("write report");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use camino::Utf8Path;
use log::debug;

mod error;
mod sample;
mod score;
mod types;

#[cfg(test)]
mod tests;

pub use error::ScorecardError;
pub use sample::sample_vendors;
pub use score::{normalise, score_vendors};
pub use types::{RiskCategory, RiskSummary, ScoredVendor, Scorecard, ScorecardWeights, Vendor};

/// Load vendors from a JSON array of vendor records.
///
/// # Errors
/// Returns [`ScorecardError::ReadVendors`] when the file cannot be read and
/// [`ScorecardError::ParseVendors`] when it is not a vendor array.
pub fn read_vendors(path: &Utf8Path) -> Result<Vec<Vendor>, ScorecardError> {
    let contents =
        lastmile_fs::read_to_string(path).map_err(|source| ScorecardError::ReadVendors {
            path: path.to_path_buf(),
            source,
        })?;
    let vendors: Vec<Vendor> =
        serde_json::from_str(&contents).map_err(|source| ScorecardError::ParseVendors {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("read {} vendors from {path}", vendors.len());
    Ok(vendors)
}

/// Render a scorecard as pretty-printed JSON.
///
/// # Errors
/// Returns [`ScorecardError::Encode`] when serialisation fails.
pub fn render_scorecard(scorecard: &Scorecard) -> Result<String, ScorecardError> {
    serde_json::to_string_pretty(scorecard).map_err(ScorecardError::Encode)
}

/// Write a scorecard as pretty-printed JSON, creating parent directories.
///
/// # Errors
/// Returns [`ScorecardError::Encode`] or [`ScorecardError::WriteReport`].
pub fn write_scorecard(path: &Utf8Path, scorecard: &Scorecard) -> Result<(), ScorecardError> {
    let json = render_scorecard(scorecard)?;
    lastmile_fs::write_report(path, json).map_err(|source| ScorecardError::WriteReport {
        path: path.to_path_buf(),
        source,
    })
}
