//! Parsing statistics and result structures for sheet imports
//!
//! This module provides types for tracking import success rates and
//! organizing parsed waypoints for downstream processing.

use crate::app::models::Waypoint;

/// Parsing result with waypoints and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed waypoint records, in sheet order
    pub waypoints: Vec<Waypoint>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
///
/// Blank rows are structural padding and are not counted.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of non-blank data rows encountered
    pub total_rows: usize,

    /// Number of waypoints successfully parsed
    pub waypoints_parsed: usize,

    /// Number of rows skipped due to validation failures
    pub rows_skipped: usize,

    /// Row-level skip reasons for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            waypoints_parsed: 0,
            rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.waypoints_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
