//! Unit coverage for vendor scoring.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use proptest::prelude::*;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::{
    RiskCategory, ScorecardError, ScorecardWeights, Vendor, normalise, read_vendors,
    sample_vendors, score_vendors, write_scorecard,
};

#[fixture]
fn sample_scorecard() -> crate::Scorecard {
    score_vendors(&sample_vendors(), ScorecardWeights::default()).expect("sample data is valid")
}

#[rstest]
fn sample_vendors_rank_in_reference_order(sample_scorecard: crate::Scorecard) {
    let ranked: Vec<(&str, f64)> = sample_scorecard
        .vendors
        .iter()
        .map(|scored| (scored.vendor.name.as_str(), scored.weighted_score))
        .collect();
    assert_eq!(
        ranked,
        [
            ("SwiftTrans LLC", 69.35),
            ("PrimeRoute Inc", 65.0),
            ("BlueLine Freight", 59.65),
            ("RegionHaul Co", 58.08),
            ("NorthStar Carriers", 56.69),
            ("TerraFreight Partners", 54.8),
            ("MidWest Freight", 54.02),
            ("FastLane Delivery", 42.83),
            ("CentralLink Logistics", 42.49),
            ("QuickDrop Solutions", 35.0),
        ]
    );
}

#[rstest]
fn sample_risk_summary_counts_bands(sample_scorecard: crate::Scorecard) {
    let risk = sample_scorecard.risk;
    assert_eq!((risk.low, risk.medium, risk.high), (0, 5, 5));
    assert_eq!(risk.high_risk_pct, 50.0);
}

#[rstest]
#[case(75.0, RiskCategory::Low)]
#[case(74.99, RiskCategory::Medium)]
#[case(55.0, RiskCategory::Medium)]
#[case(54.99, RiskCategory::High)]
#[case(0.0, RiskCategory::High)]
fn risk_bands_use_inclusive_lower_bounds(#[case] score: f64, #[case] expected: RiskCategory) {
    assert_eq!(RiskCategory::from_score(score), expected);
}

#[rstest]
fn tied_scores_share_the_lowest_rank() {
    let vendors = vec![
        Vendor::new("Alpha", 90.0, 10.0, 80.0),
        Vendor::new("Beta", 80.0, 12.0, 70.0),
        Vendor::new("Gamma", 90.0, 10.0, 80.0),
        Vendor::new("Delta", 70.0, 14.0, 60.0),
    ];
    let scorecard = score_vendors(&vendors, ScorecardWeights::default()).expect("valid vendors");
    let ranks: Vec<(&str, usize)> = scorecard
        .vendors
        .iter()
        .map(|scored| (scored.vendor.name.as_str(), scored.rank))
        .collect();
    assert_eq!(ranks, [("Alpha", 1), ("Gamma", 1), ("Beta", 3), ("Delta", 4)]);
}

#[rstest]
fn single_vendor_scores_full_marks() {
    let scorecard = score_vendors(
        &[Vendor::new("Solo", 60.0, 20.0, 50.0)],
        ScorecardWeights::default(),
    )
    .expect("valid vendor");
    let top = scorecard.top().expect("one vendor");
    assert_eq!(top.weighted_score, 100.0);
    assert_eq!(top.risk_category, RiskCategory::Low);
    assert_eq!(top.rank, 1);
}

#[rstest]
fn empty_input_yields_empty_scorecard() {
    let scorecard = score_vendors(&[], ScorecardWeights::default()).expect("empty is valid");
    assert!(scorecard.is_empty());
    assert_eq!(scorecard.risk.high_risk_pct, 0.0);
}

#[rstest]
#[case(0.5, 0.5, 0.5)]
#[case(1.2, -0.1, -0.1)]
#[case(f64::NAN, 0.5, 0.5)]
fn weights_must_sum_to_one(#[case] on_time: f64, #[case] cost: f64, #[case] compliance: f64) {
    assert!(matches!(
        ScorecardWeights::new(on_time, cost, compliance),
        Err(ScorecardError::InvalidWeights { .. })
    ));
}

#[rstest]
fn negative_metrics_are_rejected() {
    let vendors = [Vendor::new("Broken", 90.0, -1.0, 80.0)];
    let err = score_vendors(&vendors, ScorecardWeights::default()).expect_err("invalid cost");
    assert!(matches!(
        err,
        ScorecardError::InvalidVendor { field: "avg_cost_per_unit", .. }
    ));
}

#[rstest]
fn blank_names_are_rejected() {
    let vendors = [Vendor::new("  ", 90.0, 1.0, 80.0)];
    let err = score_vendors(&vendors, ScorecardWeights::default()).expect_err("blank name");
    assert!(matches!(err, ScorecardError::UnnamedVendor));
}

#[rstest]
fn vendors_round_trip_through_files() {
    let dir = TempDir::new().expect("create temp dir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir");
    let input = root.join("vendors.json");
    std::fs::write(
        &input,
        r#"[{"vendor_name": "Acme", "on_time_delivery_pct": 90.0, "avg_cost_per_unit": 10.0, "compliance_score": 80.0}]"#,
    )
    .expect("write vendors");

    let vendors = read_vendors(&input).expect("read vendors");
    assert_eq!(vendors, [Vendor::new("Acme", 90.0, 10.0, 80.0)]);

    let scorecard = score_vendors(&vendors, ScorecardWeights::default()).expect("valid vendors");
    let output = root.join("out/scorecard.json");
    write_scorecard(&output, &scorecard).expect("write report");
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).expect("read report"))
            .expect("report is JSON");
    assert_eq!(report["vendors"][0]["vendor_name"], "Acme");
    assert_eq!(report["vendors"][0]["risk_category"], "LOW");
}

#[rstest]
fn malformed_vendor_files_are_parse_errors() {
    let dir = TempDir::new().expect("create temp dir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir");
    let input = root.join("vendors.json");
    std::fs::write(&input, "{not json").expect("write vendors");

    assert!(matches!(
        read_vendors(&input),
        Err(ScorecardError::ParseVendors { .. })
    ));
}

proptest! {
    #[test]
    fn normalised_values_stay_in_range(values in prop::collection::vec(0.0_f64..1_000.0, 1..32)) {
        let normalised = normalise(&values);
        prop_assert_eq!(normalised.len(), values.len());
        prop_assert!(normalised.iter().all(|value| (0.0..=100.0).contains(value)));
    }

    #[test]
    fn ranks_never_decrease_down_the_list(
        metrics in prop::collection::vec((0.0_f64..100.0, 1.0_f64..50.0, 0.0_f64..100.0), 0..24)
    ) {
        let vendors: Vec<Vendor> = metrics
            .iter()
            .enumerate()
            .map(|(i, &(on_time, cost, compliance))| {
                Vendor::new(format!("Vendor {i}"), on_time, cost, compliance)
            })
            .collect();
        let scorecard = score_vendors(&vendors, ScorecardWeights::default())
            .expect("generated vendors are valid");
        prop_assert_eq!(scorecard.vendors.len(), vendors.len());
        let ranks: Vec<usize> = scorecard.vendors.iter().map(|scored| scored.rank).collect();
        prop_assert!(ranks.windows(2).all(|pair| pair.first() <= pair.get(1)));
        prop_assert!(ranks.first().is_none_or(|&rank| rank == 1));
        let counted = scorecard.risk.low + scorecard.risk.medium + scorecard.risk.high;
        prop_assert_eq!(counted, vendors.len());
    }
}
