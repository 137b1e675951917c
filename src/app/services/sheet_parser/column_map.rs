//! Header resolution for waypoint sheet imports
//!
//! This module analyzes the header row to locate the waypoint columns.
//! The strict policy demands the exact editor labels; the loose policy
//! accepts the label fragments found in sheets assembled by hand.

use crate::app::models::SheetRow;
use crate::config::{ParseOptions, ParsePolicy};
use crate::constants::loose_tokens;

use super::field_parsers::text_value;

/// Column positions resolved from a header row
///
/// A role stays `None` when no header cell claims it; whether that is
/// fatal depends on the parse policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    /// Point ID column index
    pub point_id: Option<usize>,

    /// Location name column index
    pub location: Option<usize>,

    /// Latitude column index
    pub latitude: Option<usize>,

    /// Longitude column index
    pub longitude: Option<usize>,

    /// Elevation column index
    pub elevation: Option<usize>,

    /// Remarks column index
    pub remarks: Option<usize>,
}

impl ColumnMap {
    /// Resolve column roles from a header row
    ///
    /// Cells are visited left to right and tested against the roles in a
    /// fixed priority order; the first matching role claims the cell, and
    /// a role matched by several cells keeps the rightmost one.
    pub fn resolve(header: &SheetRow, options: &ParseOptions) -> Self {
        let mut map = Self::default();

        for (index, cell) in header.iter().enumerate() {
            let text = text_value(cell);
            if text.is_empty() {
                continue;
            }

            match options.policy {
                ParsePolicy::Strict => map.claim_strict(&text, index, options),
                ParsePolicy::Loose => map.claim_loose(&text, index, options),
            }
        }

        map
    }

    /// Labels of required roles that no header cell claimed
    ///
    /// The strict policy requires ID, location, and both coordinates; the
    /// loose policy requires the coordinates only.
    pub fn missing_required(&self, options: &ParseOptions) -> Vec<String> {
        let labels = &options.labels;
        let mut missing = Vec::new();

        if options.policy == ParsePolicy::Strict {
            if self.point_id.is_none() {
                missing.push(labels.point_id.clone());
            }
            if self.location.is_none() {
                missing.push(labels.location.clone());
            }
        }
        if self.latitude.is_none() {
            missing.push(labels.latitude.clone());
        }
        if self.longitude.is_none() {
            missing.push(labels.longitude.clone());
        }

        missing
    }

    fn claim_strict(&mut self, text: &str, index: usize, options: &ParseOptions) {
        let labels = &options.labels;

        if text == labels.point_id {
            self.point_id = Some(index);
        } else if text == labels.location {
            self.location = Some(index);
        } else if text == labels.latitude {
            self.latitude = Some(index);
        } else if text == labels.longitude {
            self.longitude = Some(index);
        } else if text == labels.elevation {
            self.elevation = Some(index);
        } else if text == labels.remarks {
            self.remarks = Some(index);
        }
    }

    fn claim_loose(&mut self, text: &str, index: usize, options: &ParseOptions) {
        let labels = &options.labels;

        if text.contains(loose_tokens::POINT_ID) {
            self.point_id = Some(index);
        } else if text == labels.latitude {
            self.latitude = Some(index);
        } else if text == labels.longitude {
            self.longitude = Some(index);
        } else if text == labels.elevation {
            self.elevation = Some(index);
        } else if loose_tokens::LOCATION.iter().any(|t| text.contains(t)) {
            self.location = Some(index);
        }
    }
}
