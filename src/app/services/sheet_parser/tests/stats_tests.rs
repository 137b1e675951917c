//! Tests for import statistics accounting

use super::super::parser::SheetParser;
use super::super::stats::ParseStats;
use super::{standard_header, waypoint_row};
use crate::app::models::Cell;

#[test]
fn test_stats_account_for_every_skip_cause() {
    let parser = SheetParser::with_defaults();
    let rows = vec![
        standard_header(),
        vec![Cell::Empty, Cell::Empty, Cell::Empty],
        waypoint_row("A-01", "本部前", 35.6812, 139.7671, "3.2", ""),
        waypoint_row("A-02", "北門", 35.6895, 139.6917, "", ""),
        waypoint_row("A-01", "裏門", 35.71, 139.72, "", ""),
        vec![
            Cell::from("B-01"),
            Cell::from("東屋"),
            Cell::from("山の上"),
            Cell::from(139.52),
        ],
        waypoint_row("B-02", "水場", 35.52, 139.48, "8", ""),
        waypoint_row("", "名無し", 35.53, 139.47, "", ""),
        vec![],
        waypoint_row("C-01", "終点", 35.54, 139.46, "", ""),
        waypoint_row("C-02", "予備", 35.55, 139.45, "", ""),
    ];

    let result = parser.parse_rows(&rows).unwrap();
    let stats = &result.stats;

    assert_eq!(stats.total_rows, 8);
    assert_eq!(stats.waypoints_parsed, 5);
    assert_eq!(stats.rows_skipped, 3);
    assert_eq!(stats.waypoints_parsed + stats.rows_skipped, stats.total_rows);
    assert_eq!(stats.success_rate(), 62.5);
    assert!(!stats.is_successful());

    // Skip reasons carry the sheet row number and the cause, in row order
    assert_eq!(stats.errors.len(), 3);
    assert!(stats.errors[0].contains("row 5"));
    assert!(stats.errors[0].contains("A-01"));
    assert!(stats.errors[1].contains("緯度"));
    assert!(stats.errors[2].contains("ポイントID"));
}

#[test]
fn test_is_successful_needs_more_than_ninety_percent() {
    let mut stats = ParseStats::new();
    stats.total_rows = 10;
    stats.waypoints_parsed = 9;
    stats.rows_skipped = 1;

    assert_eq!(stats.success_rate(), 90.0);
    assert!(!stats.is_successful());

    stats.total_rows = 16;
    stats.waypoints_parsed = 15;

    assert_eq!(stats.success_rate(), 93.75);
    assert!(stats.is_successful());

    // No rows is 0%, not a division error
    assert_eq!(ParseStats::new().success_rate(), 0.0);
}
