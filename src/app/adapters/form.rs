//! Form field adapter between UI input and waypoint records
//!
//! The host application snapshots its edit-form fields into a
//! [`FormState`] and hands it to this module; the core never reads or
//! writes UI widgets itself. Conversion applies the same corrections the
//! sheet importer uses: point IDs are reshaped toward "A-01" form,
//! coordinate fields accept decimal or DMS text, and elevation text is
//! normalized when the record reaches the store. Display layers that
//! want DMS output can render the stored coordinates through
//! [`format_dms`](crate::app::services::sheet_parser::format_dms).
//!
//! ## Usage
//!
//! ```rust
//! use waypoint_sheet::app::adapters::form::FormState;
//! use waypoint_sheet::app::services::waypoint_store::WaypointStore;
//!
//! # fn example() -> waypoint_sheet::Result<()> {
//! let form = FormState {
//!     id: "a1".to_string(),
//!     lat: "35度40分53.0秒".to_string(),
//!     lng: "139.7671".to_string(),
//!     location: "本部前".to_string(),
//!     ..FormState::default()
//! };
//!
//! let mut store = WaypointStore::new();
//! let waypoint = store.add(form.to_new_waypoint()?)?;
//! assert_eq!(waypoint.id, "A-01");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::app::models::{NewWaypoint, Waypoint, WaypointPatch};
use crate::app::services::sheet_parser::coordinates::parse_coordinate_text;
use crate::app::services::sheet_parser::{format_point_id, is_valid_point_id_format};
use crate::app::services::waypoint_store::WaypointStore;
use crate::{Error, Result};

/// Snapshot of the waypoint edit form, one string per input field
///
/// Every field holds the raw text the user typed; correction and
/// validation happen in the conversion methods, never at capture time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormState {
    /// Point ID field; blank means "assign one for me"
    pub id: String,

    /// Latitude field, decimal degrees or DMS text
    pub lat: String,

    /// Longitude field, decimal degrees or DMS text
    pub lng: String,

    /// Elevation field, free-form
    pub elevation: String,

    /// Location name field
    pub location: String,

    /// Remarks field
    pub remarks: String,

    /// Category tag selected for the waypoint
    pub waypoint_type: String,
}

impl FormState {
    /// Render a stored waypoint back into form field text
    ///
    /// Coordinates are rendered as plain decimal degrees; the exact
    /// stored value survives a later [`to_new_waypoint`] round trip.
    ///
    /// [`to_new_waypoint`]: FormState::to_new_waypoint
    pub fn from_waypoint(waypoint: &Waypoint) -> Self {
        Self {
            id: waypoint.id.clone(),
            lat: format!("{}", waypoint.lat),
            lng: format!("{}", waypoint.lng),
            elevation: waypoint.elevation.clone(),
            location: waypoint.location.clone(),
            remarks: waypoint.remarks.clone(),
            waypoint_type: waypoint.waypoint_type.clone(),
        }
    }

    /// Convert the form into an add request for the store
    ///
    /// The ID field is auto-corrected and then format-checked; a blank
    /// field requests a generated ID instead. Coordinate fields go
    /// through the same parser the sheet importer uses, so DMS text
    /// typed into the form works. Unusable input yields
    /// [`Error::Validation`] naming the offending field.
    pub fn to_new_waypoint(&self) -> Result<NewWaypoint> {
        let id = self.corrected_id()?;
        let (lat, lng) = self.parsed_position()?;

        Ok(NewWaypoint {
            id,
            lat,
            lng,
            elevation: Some(self.elevation.clone()),
            location: Some(self.location.clone()),
            remarks: Some(self.remarks.clone()),
            waypoint_type: Some(self.waypoint_type.clone()),
        })
    }

    /// Apply the form to an existing waypoint in the store
    ///
    /// Field corrections match [`to_new_waypoint`], folded into a patch
    /// for `target_id`. The ID field only renames when its corrected
    /// form differs from the stored ID, so a generated ID like "仮01"
    /// survives edits to the other fields; a blank ID field keeps the
    /// current ID. Returns `Ok(None)` when `target_id` is unknown.
    ///
    /// [`to_new_waypoint`]: FormState::to_new_waypoint
    pub fn apply_to_store(
        &self,
        store: &mut WaypointStore,
        target_id: &str,
    ) -> Result<Option<Waypoint>> {
        let Some(current) = store.get_by_id(target_id) else {
            return Ok(None);
        };

        let id = match format_point_id(&self.id) {
            formatted if formatted.is_empty() || formatted == current.id => None,
            formatted => {
                Self::check_id_format(&formatted)?;
                Some(formatted)
            }
        };

        let (lat, lng) = self.parsed_position()?;

        let patch = WaypointPatch {
            id,
            lat: Some(lat),
            lng: Some(lng),
            elevation: Some(self.elevation.clone()),
            location: Some(self.location.clone()),
            remarks: Some(self.remarks.clone()),
            waypoint_type: Some(self.waypoint_type.clone()),
        };

        store.update(target_id, patch)
    }

    /// Corrected ID field, or `None` when it is blank
    fn corrected_id(&self) -> Result<Option<String>> {
        let formatted = format_point_id(&self.id);
        if formatted.is_empty() {
            return Ok(None);
        }

        Self::check_id_format(&formatted)?;
        Ok(Some(formatted))
    }

    fn check_id_format(formatted: &str) -> Result<()> {
        if !is_valid_point_id_format(formatted) {
            return Err(Error::validation(format!(
                "point id '{}' is not in the A-01 form",
                formatted
            )));
        }
        Ok(())
    }

    /// Parse both coordinate fields, rejecting anything non-finite
    fn parsed_position(&self) -> Result<(f64, f64)> {
        let lat = parse_coordinate_text(&self.lat);
        if !lat.is_finite() {
            return Err(Error::validation(format!(
                "latitude '{}' is not a usable coordinate",
                self.lat.trim()
            )));
        }

        let lng = parse_coordinate_text(&self.lng);
        if !lng.is_finite() {
            return Err(Error::validation(format!(
                "longitude '{}' is not a usable coordinate",
                self.lng.trim()
            )));
        }

        Ok((lat, lng))
    }
}
