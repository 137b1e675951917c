//! Gap-filling waypoint ID generation
//!
//! Waypoints added without an explicit ID receive a generated one: the
//! configured prefix for their type (the provisional marker `仮` by
//! default) followed by the smallest unused number, zero-padded to two
//! digits. Removing a waypoint frees its number for the next addition.

use super::WaypointStore;
use crate::constants;
use std::collections::HashSet;

impl WaypointStore {
    /// Next free generated ID for the given waypoint type
    pub fn next_generated_id(&self, waypoint_type: &str) -> String {
        let prefix = self.id_generation.prefix_for(waypoint_type);
        next_available_id(self.waypoints.iter().map(|w| w.id.as_str()), prefix)
    }
}

/// Smallest unused generated ID under the given prefix
///
/// Only IDs made of the prefix plus a purely numeric suffix reserve a
/// number; `仮01` reserves 1, while `仮A` and `A-01` reserve nothing.
pub fn next_available_id<'a>(existing: impl Iterator<Item = &'a str>, prefix: &str) -> String {
    let taken: HashSet<u32> = existing
        .filter_map(|id| numeric_suffix(id, prefix))
        .collect();

    let mut number = 1;
    while taken.contains(&number) {
        number += 1;
    }

    format_generated_id(prefix, number)
}

/// Format a generated ID with the standard zero padding
pub fn format_generated_id(prefix: &str, number: u32) -> String {
    format!(
        "{}{:0width$}",
        prefix,
        number,
        width = constants::GENERATED_ID_DIGITS
    )
}

/// The number reserved by an ID of the form `<prefix><digits>`
fn numeric_suffix(id: &str, prefix: &str) -> Option<u32> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
