//! Configuration for sheet import, ID generation, and enrichment.
//!
//! Provides the option structures passed into the sheet parser, the
//! waypoint store, and the elevation enricher. All configuration lives
//! in memory; hosts construct it directly or start from the defaults.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Header matching and row validation policy for sheet imports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ParsePolicy {
    /// Exact header labels; rows missing required fields are skipped
    #[default]
    Strict,
    /// Token-based header matching; rows without an ID get one assigned
    Loose,
}

/// Header labels used for strict resolution and for exported sheets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnLabels {
    /// Point ID column label
    pub point_id: String,

    /// Location name column label
    pub location: String,

    /// Latitude column label
    pub latitude: String,

    /// Longitude column label
    pub longitude: String,

    /// Elevation column label
    pub elevation: String,

    /// Remarks column label
    pub remarks: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            point_id: constants::labels::POINT_ID.to_string(),
            location: constants::labels::LOCATION.to_string(),
            latitude: constants::labels::LATITUDE.to_string(),
            longitude: constants::labels::LONGITUDE.to_string(),
            elevation: constants::labels::ELEVATION.to_string(),
            remarks: constants::labels::REMARKS.to_string(),
        }
    }
}

impl ColumnLabels {
    /// Labels of the required import columns, in canonical order
    pub fn required(&self) -> Vec<&str> {
        vec![
            self.point_id.as_str(),
            self.location.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
        ]
    }
}

/// Options controlling a single sheet import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Header matching and row validation policy
    pub policy: ParsePolicy,

    /// Header labels used for column resolution
    pub labels: ColumnLabels,

    /// Maximum number of data rows accepted per import
    pub max_rows: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            policy: ParsePolicy::Strict,
            labels: ColumnLabels::default(),
            max_rows: constants::MAX_IMPORT_ROWS,
        }
    }
}

impl ParseOptions {
    /// Create options with the loose policy
    pub fn loose() -> Self {
        Self::default().with_policy(ParsePolicy::Loose)
    }

    /// Set the parse policy
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the row cap for imports
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
}

/// ID assignment scheme for waypoints added without an explicit ID
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdGeneration {
    /// Per-type ID prefixes; the gap-filling counter runs per prefix
    pub type_prefixes: HashMap<String, String>,
}

impl IdGeneration {
    /// Prefix for a waypoint of the given type; the provisional marker
    /// when the type has no dedicated prefix
    pub fn prefix_for(&self, waypoint_type: &str) -> &str {
        self.type_prefixes
            .get(waypoint_type)
            .map(String::as_str)
            .unwrap_or(constants::TEMP_ID_PREFIX)
    }

    /// Register an ID prefix for a waypoint type
    pub fn with_type_prefix(
        mut self,
        waypoint_type: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        self.type_prefixes
            .insert(waypoint_type.into(), prefix.into());
        self
    }
}

/// Pacing configuration for the elevation enrichment loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Delay inserted between consecutive lookup requests
    pub request_delay: Duration,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_millis(constants::ELEVATION_REQUEST_DELAY_MS),
        }
    }
}

impl EnrichmentConfig {
    /// Disable request pacing (for testing and local providers)
    pub fn without_delay() -> Self {
        Self {
            request_delay: Duration::ZERO,
        }
    }

    /// Set the delay between consecutive lookup requests
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }
}
