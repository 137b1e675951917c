//! Tests for enrichment statistics

use crate::app::services::elevation_enricher::EnrichmentStats;

#[test]
fn test_resolution_rate() {
    let stats = EnrichmentStats {
        total: 4,
        already_valid: 2,
        updated: 1,
        unresolved: 1,
    };

    assert_eq!(stats.resolution_rate(), 75.0);
    assert_eq!(stats.looked_up(), 2);
}

#[test]
fn test_empty_run_counts_as_fully_resolved() {
    let stats = EnrichmentStats::new();

    assert_eq!(stats.total, 0);
    assert_eq!(stats.resolution_rate(), 100.0);
}

#[test]
fn test_summary_reports_all_counts() {
    let stats = EnrichmentStats {
        total: 10,
        already_valid: 6,
        updated: 3,
        unresolved: 1,
    };

    let summary = stats.summary();
    assert!(summary.contains("10 waypoints"));
    assert!(summary.contains("6 already valid"));
    assert!(summary.contains("3 updated"));
    assert!(summary.contains("1 unresolved"));
    assert!(summary.contains("90.0% resolved"));
}
