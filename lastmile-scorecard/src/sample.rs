//! Reference vendor list used when no input file is supplied.
#![forbid(unsafe_code)]

use crate::Vendor;

const SAMPLE: [(&str, f64, f64, f64); 10] = [
    ("SwiftTrans LLC", 94.5, 12.50, 91.0),
    ("RegionHaul Co", 87.2, 10.80, 78.0),
    ("MidWest Freight", 91.0, 13.20, 85.0),
    ("FastLane Delivery", 78.5, 9.90, 70.0),
    ("PrimeRoute Inc", 96.0, 14.00, 95.0),
    ("CentralLink Logistics", 82.3, 11.40, 74.0),
    ("NorthStar Carriers", 89.7, 12.80, 88.0),
    ("QuickDrop Solutions", 73.1, 8.75, 62.0),
    ("BlueLine Freight", 93.2, 13.50, 90.0),
    ("TerraFreight Partners", 85.6, 11.10, 80.0),
];

/// The ten reference vendors.
#[must_use]
pub fn sample_vendors() -> Vec<Vendor> {
    SAMPLE
        .iter()
        .map(|&(name, on_time, cost, compliance)| Vendor::new(name, on_time, cost, compliance))
        .collect()
}
