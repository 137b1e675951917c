//! Statistics for elevation backfill runs

use serde::{Deserialize, Serialize};

/// Outcome counts for one backfill pass over the store
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnrichmentStats {
    /// Number of waypoints examined
    pub total: usize,

    /// Waypoints whose stored elevation already passed the validity check
    pub already_valid: usize,

    /// Waypoints updated with a looked-up elevation
    pub updated: usize,

    /// Waypoints left unchanged after a failed or rejected lookup
    pub unresolved: usize,
}

impl EnrichmentStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of waypoints that went to the lookup service
    pub fn looked_up(&self) -> usize {
        self.updated + self.unresolved
    }

    /// Share of waypoints holding a usable elevation after the run
    pub fn resolution_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            ((self.already_valid + self.updated) as f64 / self.total as f64) * 100.0
        }
    }

    /// Summary line for logging
    pub fn summary(&self) -> String {
        format!(
            "Elevation backfill: {} waypoints | {} already valid | {} updated | \
             {} unresolved ({:.1}% resolved)",
            self.total,
            self.already_valid,
            self.updated,
            self.unresolved,
            self.resolution_rate()
        )
    }
}
