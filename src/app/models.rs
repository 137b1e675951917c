//! Data models for the waypoint sheet editor
//!
//! This module contains the core data structures for representing sheet
//! cell data and waypoint records, plus the request DTOs consumed by the
//! waypoint store.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// =============================================================================
// Sheet Cell Values
// =============================================================================

/// A single spreadsheet cell as handed over by the workbook codec
///
/// Cell values reach this crate already decoded from the binary container;
/// only the three shapes the editor distinguishes are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Missing or blank cell
    Empty,

    /// Textual cell content
    Text(String),

    /// Numeric cell content
    Number(f64),
}

/// One sheet row as delivered by the workbook codec
pub type SheetRow = Vec<Cell>;

impl Cell {
    /// Build a text cell, folding empty text into `Cell::Empty`
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }

    /// True for `Cell::Empty` and whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::text(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

// =============================================================================
// Waypoint Record Structure
// =============================================================================

/// A single waypoint on the editor map
///
/// The field set is fixed; free-form input is normalized at the parse and
/// update boundaries, so a stored waypoint never carries half-valid data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Point ID, unique within one collection (e.g., "A-01", "仮01")
    pub id: String,

    /// Latitude in WGS84 decimal degrees, always finite
    pub lat: f64,

    /// Longitude in WGS84 decimal degrees, always finite
    pub lng: f64,

    /// Elevation in meters as normalized text; empty when unknown
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub elevation: String,

    /// Location name shown beside the marker
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    /// Free-form remarks
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remarks: String,

    /// Category tag; selects the ID prefix when one is configured
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub waypoint_type: String,
}

impl Waypoint {
    /// Create a new waypoint with validation
    pub fn new(
        id: String,
        lat: f64,
        lng: f64,
        elevation: String,
        location: String,
        remarks: String,
        waypoint_type: String,
    ) -> Result<Self> {
        let waypoint = Self {
            id,
            lat,
            lng,
            elevation,
            location,
            remarks,
            waypoint_type,
        };

        waypoint.validate()?;
        Ok(waypoint)
    }

    /// Validate waypoint data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::validation("waypoint id cannot be empty"));
        }

        if !self.lat.is_finite() {
            return Err(Error::validation(format!(
                "latitude of '{}' is not a finite number",
                self.id
            )));
        }

        if !self.lng.is_finite() {
            return Err(Error::validation(format!(
                "longitude of '{}' is not a finite number",
                self.id
            )));
        }

        Ok(())
    }

    /// Waypoint position as a (latitude, longitude) tuple
    pub fn position(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// =============================================================================
// Store Request Structures
// =============================================================================

/// Request to add a waypoint; omitted fields take generated or empty values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewWaypoint {
    /// Explicit point ID; one is generated when absent
    pub id: Option<String>,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lng: f64,

    /// Elevation text, normalized on insert
    pub elevation: Option<String>,

    /// Location name
    pub location: Option<String>,

    /// Free-form remarks
    pub remarks: Option<String>,

    /// Category tag used for ID prefix selection
    pub waypoint_type: Option<String>,
}

impl NewWaypoint {
    /// Create an add request holding only a position
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            ..Self::default()
        }
    }

    /// Set an explicit point ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the location name
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the elevation text
    pub fn with_elevation(mut self, elevation: impl Into<String>) -> Self {
        self.elevation = Some(elevation.into());
        self
    }

    /// Set the remarks text
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Set the waypoint category tag
    pub fn with_waypoint_type(mut self, waypoint_type: impl Into<String>) -> Self {
        self.waypoint_type = Some(waypoint_type.into());
        self
    }
}

/// Partial update for a stored waypoint; `None` fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaypointPatch {
    /// New point ID (rename, uniqueness-checked)
    pub id: Option<String>,

    /// New latitude in decimal degrees
    pub lat: Option<f64>,

    /// New longitude in decimal degrees
    pub lng: Option<f64>,

    /// New elevation text, normalized on write
    pub elevation: Option<String>,

    /// New location name
    pub location: Option<String>,

    /// New remarks text
    pub remarks: Option<String>,

    /// New waypoint category tag
    pub waypoint_type: Option<String>,
}

impl WaypointPatch {
    /// Patch that moves a waypoint to a new position
    pub fn position(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            ..Self::default()
        }
    }

    /// Patch that replaces the elevation text
    pub fn elevation(value: impl Into<String>) -> Self {
        Self {
            elevation: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch that renames the waypoint
    pub fn rename(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}
