//! Test utilities for sheet parser testing
//!
//! This module provides the shared sheet fixtures used across the test
//! modules.

use crate::app::models::{Cell, SheetRow};

mod stats_tests;

/// Header row carrying the full strict label set
pub fn standard_header() -> SheetRow {
    vec![
        Cell::from("ポイントID"),
        Cell::from("名称"),
        Cell::from("緯度"),
        Cell::from("経度"),
        Cell::from("標高"),
        Cell::from("備考"),
    ]
}

/// One data row in the standard column order
pub fn waypoint_row(
    id: &str,
    location: &str,
    lat: f64,
    lng: f64,
    elevation: &str,
    remarks: &str,
) -> SheetRow {
    vec![
        Cell::from(id),
        Cell::from(location),
        Cell::from(lat),
        Cell::from(lng),
        Cell::from(elevation),
        Cell::from(remarks),
    ]
}

/// A complete three-waypoint sheet in the standard layout
pub fn standard_sheet() -> Vec<SheetRow> {
    vec![
        standard_header(),
        waypoint_row("A-01", "本部前", 35.6812, 139.7671, "3.2", ""),
        waypoint_row("A-02", "北門", 35.6895, 139.6917, "", "夜間閉鎖"),
        waypoint_row("B-01", "資材置場", 34.6937, 135.5023, "12", ""),
    ]
}
