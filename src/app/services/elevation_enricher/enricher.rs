//! Elevation backfill orchestration
//!
//! This module coordinates the lookup flow: deciding which waypoints need
//! a lookup, querying the provider with pacing between requests, and
//! writing resolved elevations back into the store.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::app::models::WaypointPatch;
use crate::app::services::sheet_parser::field_parsers::{
    needs_elevation_lookup, normalize_elevation_value,
};
use crate::app::services::waypoint_store::WaypointStore;
use crate::config::EnrichmentConfig;

use super::provider::ElevationProvider;
use super::stats::EnrichmentStats;

/// Elevation backfill service for the waypoint store
///
/// The enricher never errors: a failed or rejected lookup leaves the
/// waypoint unchanged and is reported through the returned statistics.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use waypoint_sheet::app::services::elevation_enricher::{
///     ElevationEnricher, ElevationProvider,
/// };
/// use waypoint_sheet::app::services::waypoint_store::WaypointStore;
/// use waypoint_sheet::config::EnrichmentConfig;
///
/// # async fn example(provider: Arc<dyn ElevationProvider>) {
/// let enricher = ElevationEnricher::new(provider, EnrichmentConfig::default());
///
/// let mut store = WaypointStore::new();
/// let stats = enricher.enrich_all(&mut store).await;
/// println!("{}", stats.summary());
/// # }
/// ```
pub struct ElevationEnricher {
    /// Lookup service for terrain elevation queries
    provider: Arc<dyn ElevationProvider>,

    /// Pacing configuration
    config: EnrichmentConfig,
}

impl ElevationEnricher {
    /// Create a new enricher around a lookup provider
    pub fn new(provider: Arc<dyn ElevationProvider>, config: EnrichmentConfig) -> Self {
        Self { provider, config }
    }

    /// Make sure one waypoint carries a usable elevation
    ///
    /// Returns the waypoint's elevation text after the attempt, or `None`
    /// when no waypoint has the given ID. A stored elevation that already
    /// passes the validity check is returned as-is without contacting the
    /// provider. A lookup that fails or returns a value that is not a
    /// finite positive number leaves the stored value untouched.
    pub async fn ensure_valid_elevation(
        &self,
        store: &mut WaypointStore,
        id: &str,
    ) -> Option<String> {
        let waypoint = store.get_by_id(id)?;

        if !needs_elevation_lookup(&waypoint.elevation) {
            return Some(waypoint.elevation.clone());
        }
        let (lat, lng) = waypoint.position();

        self.lookup_and_apply(store, id, lat, lng).await;

        store.get_by_id(id).map(|waypoint| waypoint.elevation.clone())
    }

    /// Backfill every waypoint in the store that needs an elevation
    ///
    /// Waypoints are visited in insertion order. Consecutive provider
    /// requests are separated by the configured delay; waypoints whose
    /// elevation is already usable cost nothing.
    pub async fn enrich_all(&self, store: &mut WaypointStore) -> EnrichmentStats {
        let ids = store.ids();
        let mut stats = EnrichmentStats::new();
        stats.total = ids.len();

        info!("Backfilling elevations for {} waypoints", stats.total);

        let mut requested = false;
        for id in ids {
            let (lat, lng) = match store.get_by_id(&id) {
                Some(waypoint) if needs_elevation_lookup(&waypoint.elevation) => {
                    waypoint.position()
                }
                Some(_) => {
                    stats.already_valid += 1;
                    continue;
                }
                None => continue,
            };

            if requested && !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }
            requested = true;

            if self.lookup_and_apply(store, &id, lat, lng).await {
                stats.updated += 1;
            } else {
                stats.unresolved += 1;
            }
        }

        info!("{}", stats.summary());
        stats
    }

    /// Query the provider once and write a usable result back
    ///
    /// Returns true when the waypoint was updated.
    async fn lookup_and_apply(
        &self,
        store: &mut WaypointStore,
        id: &str,
        lat: f64,
        lng: f64,
    ) -> bool {
        match self.provider.fetch_elevation(lat, lng).await {
            Some(value) if value.is_finite() && value > 0.0 => {
                let normalized = normalize_elevation_value(value);
                debug!("Elevation for '{}' resolved to {}", id, normalized);
                matches!(
                    store.update(id, WaypointPatch::elevation(normalized)),
                    Ok(Some(_))
                )
            }
            Some(value) => {
                warn!(
                    "Elevation service returned unusable value {} for '{}'",
                    value, id
                );
                false
            }
            None => {
                warn!("Elevation lookup failed for '{}'", id);
                false
            }
        }
    }
}
