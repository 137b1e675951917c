//! Elevation backfill for stored waypoints
//!
//! This module fills in missing or unusable elevations by querying a
//! terrain lookup service hosted outside this crate. Lookups are paced so
//! a full backfill pass stays under the service's rate limits, and a
//! waypoint that already holds a usable elevation is never looked up.
//!
//! ## Architecture
//!
//! The service is organized into logical components:
//! - [`enricher`] - Lookup orchestration and store write-back
//! - [`provider`] - The async lookup trait implemented by the host
//! - [`stats`] - Outcome counts for one backfill pass

pub mod enricher;
pub mod provider;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use enricher::ElevationEnricher;
pub use provider::ElevationProvider;
pub use stats::EnrichmentStats;
