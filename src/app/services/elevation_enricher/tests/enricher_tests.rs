//! Tests for the elevation backfill orchestration

use std::sync::Arc;
use std::time::Duration;

use super::{FixedProvider, ScriptedProvider, store_with_elevations};
use crate::app::services::elevation_enricher::ElevationEnricher;
use crate::config::EnrichmentConfig;

fn fast_enricher(provider: Arc<FixedProvider>) -> ElevationEnricher {
    ElevationEnricher::new(provider, EnrichmentConfig::without_delay())
}

#[tokio::test]
async fn test_valid_elevation_makes_no_lookup() {
    let provider = Arc::new(FixedProvider::new(Some(99.9)));
    let enricher = fast_enricher(provider.clone());
    let mut store = store_with_elevations(&[("A-01", "3.2")]);

    let value = enricher.ensure_valid_elevation(&mut store, "A-01").await;

    assert_eq!(value.as_deref(), Some("3.2"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_missing_elevation_is_backfilled() {
    let provider = Arc::new(FixedProvider::new(Some(123.456)));
    let enricher = fast_enricher(provider.clone());
    let mut store = store_with_elevations(&[("A-01", "")]);

    let value = enricher.ensure_valid_elevation(&mut store, "A-01").await;

    assert_eq!(value.as_deref(), Some("123.5"));
    assert_eq!(store.get_by_id("A-01").unwrap().elevation, "123.5");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_zero_elevation_triggers_a_lookup() {
    let provider = Arc::new(FixedProvider::new(Some(42.0)));
    let enricher = fast_enricher(provider.clone());
    let mut store = store_with_elevations(&[("A-01", "0")]);

    let value = enricher.ensure_valid_elevation(&mut store, "A-01").await;

    assert_eq!(value.as_deref(), Some("42"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_unknown_id_returns_none() {
    let provider = Arc::new(FixedProvider::new(Some(42.0)));
    let enricher = fast_enricher(provider.clone());
    let mut store = store_with_elevations(&[("A-01", "")]);

    let value = enricher.ensure_valid_elevation(&mut store, "Z-99").await;

    assert!(value.is_none());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_failed_lookup_keeps_the_stored_value() {
    let provider = Arc::new(FixedProvider::new(None));
    let enricher = fast_enricher(provider.clone());
    let mut store = store_with_elevations(&[("A-01", "")]);

    let value = enricher.ensure_valid_elevation(&mut store, "A-01").await;

    assert_eq!(value.as_deref(), Some(""));
    assert_eq!(store.get_by_id("A-01").unwrap().elevation, "");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_non_positive_result_is_rejected() {
    let provider = Arc::new(FixedProvider::new(Some(-4.0)));
    let enricher = fast_enricher(provider.clone());
    let mut store = store_with_elevations(&[("A-01", "0")]);

    let value = enricher.ensure_valid_elevation(&mut store, "A-01").await;

    assert_eq!(value.as_deref(), Some("0"));
    assert_eq!(store.get_by_id("A-01").unwrap().elevation, "0");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_infinite_result_is_rejected() {
    let provider = Arc::new(FixedProvider::new(Some(f64::INFINITY)));
    let enricher = fast_enricher(provider.clone());
    let mut store = store_with_elevations(&[("A-01", "")]);

    let value = enricher.ensure_valid_elevation(&mut store, "A-01").await;

    assert_eq!(value.as_deref(), Some(""));
    assert_eq!(store.get_by_id("A-01").unwrap().elevation, "");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_enrich_all_counts_outcomes() {
    let provider = Arc::new(ScriptedProvider::new(vec![Some(10.26), None]));
    let enricher = ElevationEnricher::new(provider, EnrichmentConfig::without_delay());
    let mut store = store_with_elevations(&[("A-01", "3.2"), ("A-02", ""), ("A-03", "-1")]);

    let stats = enricher.enrich_all(&mut store).await;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.already_valid, 1);
    assert_eq!(stats.updated, 1);
    assert_eq!(stats.unresolved, 1);
    assert_eq!(stats.looked_up(), 2);

    assert_eq!(store.get_by_id("A-02").unwrap().elevation, "10.3");
    assert_eq!(store.get_by_id("A-03").unwrap().elevation, "-1");
}

#[tokio::test]
async fn test_enrich_all_spares_valid_waypoints_from_lookups() {
    let provider = Arc::new(FixedProvider::new(Some(50.0)));
    let enricher = fast_enricher(provider.clone());
    let mut store =
        store_with_elevations(&[("A-01", "3.2"), ("A-02", "12"), ("A-03", "")]);

    let stats = enricher.enrich_all(&mut store).await;

    assert_eq!(provider.call_count(), 1);
    assert_eq!(stats.already_valid, 2);
    assert_eq!(stats.updated, 1);
    assert_eq!(store.get_by_id("A-03").unwrap().elevation, "50");
}

#[tokio::test]
async fn test_enrich_all_with_paced_requests_completes() {
    let provider = Arc::new(FixedProvider::new(Some(7.0)));
    let config = EnrichmentConfig::default().with_request_delay(Duration::from_millis(1));
    let enricher = ElevationEnricher::new(provider.clone(), config);
    let mut store = store_with_elevations(&[("A-01", ""), ("A-02", ""), ("A-03", "")]);

    let stats = enricher.enrich_all(&mut store).await;

    assert_eq!(stats.updated, 3);
    assert_eq!(provider.call_count(), 3);
}

#[tokio::test]
async fn test_enrich_all_on_empty_store() {
    let provider = Arc::new(FixedProvider::new(Some(7.0)));
    let enricher = fast_enricher(provider.clone());
    let mut store = store_with_elevations(&[]);

    let stats = enricher.enrich_all(&mut store).await;

    assert_eq!(stats.total, 0);
    assert_eq!(provider.call_count(), 0);
    assert_eq!(stats.resolution_rate(), 100.0);
}
