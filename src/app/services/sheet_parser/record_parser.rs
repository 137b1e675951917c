//! Individual sheet row parsing
//!
//! This module turns one data row into a validated waypoint, reporting
//! unusable rows as errors so the orchestrator can count and skip them.

use tracing::debug;

use super::column_map::ColumnMap;
use super::coordinates::parse_coordinate_text;
use super::field_parsers::{cell_text, normalize_elevation, required_text};
use crate::app::models::{SheetRow, Waypoint};
use crate::config::{ParseOptions, ParsePolicy};
use crate::constants;
use crate::{Error, Result};

/// Sequence of fallback IDs handed to ID-less rows under the loose policy
///
/// The counter restarts with every parse call, so fallback IDs follow the
/// sheet order of the rows that needed them.
#[derive(Debug)]
pub struct AutoIdSequence {
    next: usize,
}

impl AutoIdSequence {
    /// Start a fresh sequence at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next fallback ID ("P1", "P2", ...)
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", constants::LOOSE_AUTO_ID_PREFIX, self.next);
        self.next += 1;
        id
    }
}

impl Default for AutoIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a single waypoint record from a sheet row
///
/// Strict policy: ID, location, and both coordinates must carry usable
/// values. Loose policy: only the coordinates are required, and a blank
/// ID cell receives the next fallback ID.
pub fn parse_waypoint_record(
    row: &SheetRow,
    map: &ColumnMap,
    options: &ParseOptions,
    auto_ids: &mut AutoIdSequence,
) -> Result<Waypoint> {
    let labels = &options.labels;

    let id = match options.policy {
        ParsePolicy::Strict => required_text(row, map.point_id, &labels.point_id)?,
        ParsePolicy::Loose => {
            let text = cell_text(row, map.point_id);
            if text.is_empty() {
                let assigned = auto_ids.next_id();
                debug!("Assigned fallback id '{}' to row without one", assigned);
                assigned
            } else {
                text
            }
        }
    };

    let location = match options.policy {
        ParsePolicy::Strict => required_text(row, map.location, &labels.location)?,
        ParsePolicy::Loose => cell_text(row, map.location),
    };

    let lat = parse_required_coordinate(row, map.latitude, &labels.latitude)?;
    let lng = parse_required_coordinate(row, map.longitude, &labels.longitude)?;

    let elevation = normalize_elevation(&cell_text(row, map.elevation));
    let remarks = cell_text(row, map.remarks);

    // Waypoint::new re-checks the invariants the field parsing establishes
    Waypoint::new(id, lat, lng, elevation, location, remarks, String::new())
}

/// Parse a required coordinate column into finite decimal degrees
fn parse_required_coordinate(row: &SheetRow, index: Option<usize>, label: &str) -> Result<f64> {
    let text = required_text(row, index, label)?;

    let value = parse_coordinate_text(&text);
    if !value.is_finite() {
        return Err(Error::validation(format!(
            "unparseable value '{}' in coordinate column '{}'",
            text, label
        )));
    }

    Ok(value)
}
